use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::warn;

use bingo_app::state::AppState;
use bingo_app::terminal::{self, Input, Renderer};
use bingo_app::{ipc, logging};
use bingo_engine::GameConfig;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("could not load config from {}", path))?,
        None => GameConfig::default(),
    };

    let state = AppState::new();
    let snapshots = ipc::start_game(&state, config)?;

    let render_thread = std::thread::Builder::new()
        .name("bingo-render".into())
        .spawn(move || {
            let mut renderer = Renderer::new();
            let stdout = io::stdout();
            for snap in snapshots {
                let mut out = stdout.lock();
                let _ = out.write_all(renderer.render(&snap).as_bytes());
                let _ = out.flush();
            }
        })
        .context("could not spawn the render thread")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;
        match terminal::parse_input(&line) {
            Some(Input::Command(command)) => ipc::send_command(command, &state)?,
            Some(Input::Quit) => break,
            None => warn!(input = %line.trim(), "unrecognised input (cell 0-8, s, n, q)"),
        }
    }

    ipc::shutdown(&state)?;
    let _ = render_thread.join();
    Ok(())
}

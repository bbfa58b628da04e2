//! Line-oriented terminal front-end: input parsing and board rendering.

use std::fmt::Write;

use bingo_core::commands::PlayerCommand;
use bingo_core::constants::GRID_COLUMNS;
use bingo_core::events::GameEvent;
use bingo_core::state::GameStateSnapshot;

/// What a line of player input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(PlayerCommand),
    Quit,
}

/// Parse one input line. Digits select a cell; `s` skips; `n` starts a new
/// game; `q` quits. Anything else is `None`.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "s" | "skip" => Some(Input::Command(PlayerCommand::Skip)),
        "n" | "new" => Some(Input::Command(PlayerCommand::NewGame)),
        "q" | "quit" => Some(Input::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .map(|index| Input::Command(PlayerCommand::SelectCell { index })),
    }
}

/// Full board: header, question line, and the grid.
pub fn render_board(snap: &GameStateSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Football Bingo    score {}/{}    {} left",
        snap.correct_count, snap.total, snap.questions_left
    );
    match &snap.prompt {
        Some(prompt) => {
            let _ = writeln!(out, "[{:>2}s] {}", snap.seconds_remaining, prompt);
        }
        None => {
            let _ = writeln!(out, "Game over.");
        }
    }
    for row in snap.rows(GRID_COLUMNS) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let mark = if cell.answered { '*' } else { ' ' };
                format!("{}{} {:<18}", mark, cell.index, cell.value)
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());
    }
    out
}

/// One line per event, for feedback.
pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::Correct { cell } => format!("Correct! Cell {} is yours.", cell),
        GameEvent::Incorrect { cell } => format!("Wrong, cell {} does not match.", cell),
        GameEvent::GameOver { .. } => format!(
            "Game Over! {} (press n for a new game)",
            event.summary().unwrap_or_default()
        ),
    }
}

/// Renders snapshots, redrawing the board only when the question changes.
#[derive(Debug, Default)]
pub struct Renderer {
    last_question: Option<(usize, bool)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to print for this snapshot. Clock-only updates shrink to a
    /// countdown line.
    pub fn render(&mut self, snap: &GameStateSnapshot) -> String {
        let mut out = String::new();
        for event in &snap.events {
            let _ = writeln!(out, "{}", render_event(event));
        }
        let key = (snap.question_index, snap.is_over());
        if self.last_question != Some(key) || !snap.events.is_empty() {
            self.last_question = Some(key);
            out.push_str(&render_board(snap));
        } else if !snap.is_over() {
            let _ = writeln!(out, "  {}s", snap.seconds_remaining);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_engine::{Deck, GameConfig, GameEngine};

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("4\n"),
            Some(Input::Command(PlayerCommand::SelectCell { index: 4 }))
        );
        assert_eq!(parse_input(" S "), Some(Input::Command(PlayerCommand::Skip)));
        assert_eq!(parse_input("new"), Some(Input::Command(PlayerCommand::NewGame)));
        assert_eq!(parse_input("q"), Some(Input::Quit));
        assert_eq!(parse_input("-1"), None);
        assert_eq!(parse_input("hello"), None);
    }

    #[test]
    fn test_render_board() {
        let mut engine = GameEngine::new(GameConfig::default(), Deck::sample()).unwrap();
        engine.select_cell(0);
        let text = render_board(&engine.snapshot());
        assert!(text.contains("score 1/9"));
        assert!(text.contains("2014"));
        assert!(text.contains("*0 PSG"));
        assert_eq!(text.lines().count(), 2 + 3);
    }

    #[test]
    fn test_renderer_redraws_on_question_change_only() {
        let mut engine = GameEngine::new(GameConfig::default(), Deck::sample()).unwrap();
        let mut renderer = Renderer::new();

        let first = renderer.render(&engine.snapshot());
        assert!(first.contains("Messi"));

        engine.tick();
        let countdown = renderer.render(&engine.snapshot());
        assert_eq!(countdown, "  9s\n");

        engine.skip();
        let redraw = renderer.render(&engine.snapshot());
        assert!(redraw.contains("2014"));
    }

    #[test]
    fn test_render_game_over_event() {
        let line = render_event(&GameEvent::GameOver {
            correct_count: 2,
            total: 9,
        });
        assert!(line.contains("You answered 2 out of 9 correctly."));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error("could not parse deck or config")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type BingoResult<T> = Result<T, BingoError>;

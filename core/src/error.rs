use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Name is {len} characters long, at most {max} are allowed")]
    NameTooLong { len: usize, max: usize },
    #[error("Invalid cell code {0}")]
    InvalidCellCode(u8),
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

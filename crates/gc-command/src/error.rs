use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("corridor index {index} out of range (corridor count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("command codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;

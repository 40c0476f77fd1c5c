use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("current corridor index {index} out of range (corridor count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("density history is empty; the greedy policy needs at least one sample")]
    EmptyHistory,

    #[error(
        "unknown policy {0:?}: expected \"fixed\", \"round-robin\", or \"greedy-min-density\""
    )]
    UnknownPolicy(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;

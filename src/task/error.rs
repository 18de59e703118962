use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("index {index} is out of range for a list of {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read or write the task file: {0}")]
    FileIo(#[from] std::io::Error),

    #[error("task file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;

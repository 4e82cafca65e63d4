use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("sequence length must be greater than zero (got {0})")]
    InvalidLength(i64),

    /// Interactive length input that is not an integer.
    #[error("invalid number provided: '{0}'")]
    InvalidNumber(String),

    #[error("ID '{0}' may only contain letters, digits, '_' and '-'")]
    InvalidId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

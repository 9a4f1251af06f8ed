use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid date '{0}': expected MM-DD-YYYY or MM/DD/YYYY")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CatatError>;

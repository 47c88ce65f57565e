use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    #[error("Failed to load page {url}: {reason}")]
    PageLoad { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

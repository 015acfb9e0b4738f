//! Error types for pos-dashboard

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the file is missing required columns: {}", .0.join(", "))]
    Schema(Vec<String>),

    #[error("could not read spreadsheet: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet write error: {0}")]
    Export(String),

    #[error("invalid admin password")]
    Auth,

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

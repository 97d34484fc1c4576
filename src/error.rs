use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid quiz: {0}")]
    Quiz(String),

    #[error("Cannot initialise logging: {0}")]
    Logging(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Submission(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

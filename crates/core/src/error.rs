use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid term {term:?}: {reason}")]
    InvalidTerm { term: String, reason: String },
    #[error("word list {}: {reason}", .path.display())]
    SourceFormat { path: PathBuf, reason: String },
    #[error("batch: {0}")]
    Batch(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LexiconError {
    pub fn invalid_term(term: &str, reason: impl Into<String>) -> Self {
        LexiconError::InvalidTerm {
            term: term.to_string(),
            reason: reason.into(),
        }
    }

    pub fn source_format(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        LexiconError::SourceFormat {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LexiconError>;

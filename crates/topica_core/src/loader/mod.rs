//! Catalog document loading entry points.
//!
//! # Responsibility
//! - Read and parse the one-shot catalog document into the model.
//! - Enforce document-level invariants before the snapshot is handed out.
//!
//! # Invariants
//! - A catalog that fails to load is never partially visible; callers get
//!   either a validated snapshot or a `LoadError`.
//! - Dangling category references are not a load failure.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod document;

pub use document::{load_catalog, parse_catalog};

pub type LoadResult<T> = Result<T, LoadError>;

/// Load-layer error for document retrieval, decoding and validation.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateTopic(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog document: {err}"),
            Self::Parse(err) => write!(f, "malformed catalog document: {err}"),
            Self::DuplicateTopic(name) => {
                write!(f, "duplicate topic name `{name}` in catalog document")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::DuplicateTopic(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

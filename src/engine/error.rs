use std::{error::Error, fmt};

type BoxError = Box<dyn Error + Send + Sync>;

/// Failure of a playlist transformation.
///
/// Validation variants are returned before any remote call is made. Remote
/// variants abort the operation where they occur, mutations applied up to
/// that point stay in place.
#[derive(Debug)]
pub enum EngineError {
    /// A listing, playlist or audio-feature lookup failed.
    RemoteFetch(BoxError),
    /// An add, remove or create call failed.
    RemoteMutation(BoxError),
    /// A sort rule names a feature that does not exist.
    InvalidRule(String),
    /// A date bound is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// The destination name of a clone is empty.
    InvalidName,
    /// No playlist with the requested name exists.
    NotFound(String),
}

impl EngineError {
    pub fn fetch(err: BoxError) -> Self {
        EngineError::RemoteFetch(err)
    }

    pub fn mutation(err: BoxError) -> Self {
        EngineError::RemoteMutation(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::RemoteFetch(e) => write!(f, "failed to fetch from remote: {}", e),
            EngineError::RemoteMutation(e) => write!(f, "failed to modify remote: {}", e),
            EngineError::InvalidRule(name) => {
                write!(f, "invalid feature_name '{}' in sort rule", name)
            }
            EngineError::InvalidDate(date) => {
                write!(f, "invalid date '{}', expected YYYY-MM-DD", date)
            }
            EngineError::InvalidName => f.write_str("new playlist name cannot be empty"),
            EngineError::NotFound(name) => write!(f, "playlist '{}' not found", name),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::RemoteFetch(e) | EngineError::RemoteMutation(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

use thiserror::Error;

/// Loading failures. Both variants mean the same thing to a caller —
/// the dataset is unavailable and graph construction cannot proceed —
/// but the source distinguishes I/O from malformed rows.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data unavailable: failed to read {path}")]
    Fetch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("data unavailable: failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl DataError {
    pub fn path(&self) -> &str {
        match self {
            DataError::Fetch { path, .. } => path,
            DataError::Parse { path, .. } => path,
        }
    }
}

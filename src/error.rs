use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed cause for failures raised by pluggable collaborators (fetchers, code tables).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't find the problem: {0}")]
    IdentityMissing(String),

    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("malformed problem page: {0}")]
    Extraction(String),

    #[error("failed to parse code definitions")]
    DelegatedParse(#[source] BoxError),

    #[error("cannot render: {0}")]
    RenderPrecondition(String),

    #[error("filesystem error at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Template(#[from] askama::Error),

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for index generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to list '{path}'")]
    #[diagnostic(
        code(eventdts::read_dir),
        help("pass the directory that holds the event declaration files")
    )]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(eventdts::write),
        help("check that the directory is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: eyre::Report,
    },
}

impl Error {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::ReadDir {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: eyre::Report) -> Box<Self> {
        Box::new(Self::Write {
            path: path.into(),
            source,
        })
    }

    /// The underlying I/O error kind, when there is one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::ReadDir { source, .. } => Some(source.kind()),
            Self::Write { source, .. } => source
                .chain()
                .find_map(|e| e.downcast_ref::<std::io::Error>())
                .map(std::io::Error::kind),
        }
    }
}

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Bin2cResult<T> = Result<T, Bin2cError>;

#[derive(Debug, Error)]
pub enum Bin2cError {
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Bin2cError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixError>;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to emit status line: {0}")]
    Status(#[from] io::Error),

    #[error("failed to serialize run summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

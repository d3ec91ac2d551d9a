//! Errors raised by the file layer.
//!
//! The conversion core never fails; only reading, writing and discovering
//! templates can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure to locate, read or write a template.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The target path does not exist.
    #[error("'{path}' does not exist")]
    NotFound { path: PathBuf },

    /// A single file was given that does not carry the template extension.
    #[error("'{path}' is not a {extension} file")]
    NotATemplate { path: PathBuf, extension: String },

    /// Reading or writing a template failed.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Walking a template directory failed.
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ConvertError {
    /// The path the failure concerns.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::NotATemplate { path, .. }
            | Self::Io { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }
}

//! CLI command implementations.

mod convert;
mod render;
mod scan;

use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::Path;

use formless::{ConvertError, Converter, RemainingCall};
use miette::{Diagnostic, Report};
use thiserror::Error;

use crate::output::RemainingCallDiagnostic;

pub use convert::{ConvertArgs, run_convert};
pub use render::{RenderArgs, run_render};
pub use scan::{ScanArgs, run_scan};

/// Options shared by every subcommand.
#[derive(Debug)]
pub struct Settings {
    pub converter: Converter,
    pub extension: String,
}

impl Settings {
    pub fn new(facade: String, extension: String) -> Self {
        Self {
            converter: Converter::builder().facade(facade).build(),
            extension,
        }
    }

    pub fn facade(&self) -> &str {
        self.converter.facade()
    }
}

/// A template could not be found, read or written.
#[derive(Debug, Error, Diagnostic)]
#[error(transparent)]
#[diagnostic(code(formless::file))]
pub struct FileError(#[from] pub ConvertError);

impl FileError {
    pub fn exit_code(&self) -> i32 {
        match self.0 {
            ConvertError::NotFound { .. } | ConvertError::NotATemplate { .. } => exitcode::NOINPUT,
            ConvertError::Io { .. } | ConvertError::Walk { .. } => exitcode::IOERR,
        }
    }
}

/// Reads a file the user named directly.
pub fn read_input(path: &Path) -> Result<String, FileError> {
    read_to_string(path).map_err(|source| {
        let path = path.to_path_buf();
        FileError(match source.kind() {
            ErrorKind::NotFound => ConvertError::NotFound { path },
            _ => ConvertError::Io { path, source },
        })
    })
}

/// Prints one warning per remaining call, pointing into `source`.
pub fn report_remaining<'a>(
    calls: impl IntoIterator<Item = &'a RemainingCall>,
    source: &str,
    facade: &str,
) {
    for call in calls {
        let diagnostic = RemainingCallDiagnostic::new(call, source, facade);
        eprintln!("{:?}", Report::new(diagnostic));
    }
}

//! Template discovery, per-file conversion and the remaining-call scan.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use formless_constructs::{Construct, resolve_construct};
use serde::Serialize;
use walkdir::WalkDir;

use crate::converter::Converter;
use crate::error::ConvertError;

/// File name suffix of Blade templates.
pub const DEFAULT_EXTENSION: &str = ".blade.php";

/// Whether converted output is written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// What happened to one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file does not mention the facade and was not touched.
    Skipped,
    Converted {
        /// Number of calls rewritten.
        rewrites: usize,
        /// Whether the converted text differs from the original.
        changed: bool,
        /// Facade calls still present after conversion.
        remaining: Vec<RemainingCall>,
    },
}

/// A line that still mentions the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainingCall {
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// Byte offset of the facade name within the file.
    pub offset: usize,
    /// The whole line, trimmed.
    pub text: String,
    /// The method called on the facade, e.g. `model`.
    pub method: String,
    /// The construct `method` names, or `None` for helpers that are not
    /// converted at all.
    #[serde(skip)]
    pub construct: Option<Construct>,
}

/// Per-file entry of a [`ConversionReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub rewrites: usize,
    pub changed: bool,
    pub remaining: usize,
}

/// Summary of converting a file or directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub root: PathBuf,
    pub dry_run: bool,
    /// Templates that mention the facade, in path order.
    pub files: Vec<FileReport>,
    /// Templates that do not mention the facade.
    pub skipped: usize,
    pub remaining: Vec<RemainingCall>,
}

impl ConversionReport {
    pub fn total_rewrites(&self) -> usize {
        self.files.iter().map(|file| file.rewrites).sum()
    }

    pub fn changed_files(&self) -> usize {
        self.files.iter().filter(|file| file.changed).count()
    }
}

/// Fast pre-check: does `text` contain `<facade>::` anywhere?
pub fn contains_facade(text: &str, facade: &str) -> bool {
    text.contains(&format!("{facade}::"))
}

/// Lists the templates under `root`, sorted by path.
///
/// A file is accepted only if its name ends with `extension`; a directory is
/// walked recursively.
pub fn discover_templates(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ConvertError> {
    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConvertError::NotFound {
            path: root.to_path_buf(),
        },
        _ => ConvertError::Io {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if metadata.is_file() {
        if !has_extension(root, extension) {
            return Err(ConvertError::NotATemplate {
                path: root.to_path_buf(),
                extension: extension.to_owned(),
            });
        }
        return Ok(vec![root.to_path_buf()]);
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| ConvertError::Walk {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            templates.push(entry.into_path());
        }
    }
    templates.sort();
    log::debug!("found {} templates under '{}'", templates.len(), root.display());
    Ok(templates)
}

/// Converts one template, writing it back unless `mode` is a dry run.
///
/// Files without the facade are skipped without being rewritten; a file is
/// only written when conversion changed it.
pub fn convert_file(
    path: &Path,
    converter: &Converter,
    mode: WriteMode,
) -> Result<FileOutcome, ConvertError> {
    let text = read(path)?;
    if !contains_facade(&text, converter.facade()) {
        log::debug!("skipping '{}': no {}:: calls", path.display(), converter.facade());
        return Ok(FileOutcome::Skipped);
    }

    let conversion = converter.convert_with_stats(&text);
    let changed = conversion.output != text;
    if changed && mode == WriteMode::Write {
        fs::write(path, &conversion.output).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let rewrites = conversion.total_rewrites();
    log::debug!("converted '{}': {rewrites} calls rewritten", path.display());

    Ok(FileOutcome::Converted {
        rewrites,
        changed,
        remaining: find_remaining_calls(path, &conversion.output, converter.facade()),
    })
}

/// Converts every template under `root` and collects a report.
pub fn convert_path(
    root: &Path,
    extension: &str,
    converter: &Converter,
    mode: WriteMode,
) -> Result<ConversionReport, ConvertError> {
    let mut report = ConversionReport {
        root: root.to_path_buf(),
        dry_run: mode == WriteMode::DryRun,
        ..ConversionReport::default()
    };

    for path in discover_templates(root, extension)? {
        match convert_file(&path, converter, mode)? {
            FileOutcome::Skipped => report.skipped += 1,
            FileOutcome::Converted {
                rewrites,
                changed,
                remaining,
            } => {
                report.files.push(FileReport {
                    path,
                    rewrites,
                    changed,
                    remaining: remaining.len(),
                });
                report.remaining.extend(remaining);
            }
        }
    }
    Ok(report)
}

/// Every line of `text` that still mentions the facade.
pub fn find_remaining_calls(path: &Path, text: &str, facade: &str) -> Vec<RemainingCall> {
    let needle = format!("{facade}::");
    let mut calls = Vec::new();
    let mut line_start = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        if let Some(column) = line.find(&needle) {
            let method: String = line[column + needle.len()..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            calls.push(RemainingCall {
                path: path.to_path_buf(),
                line: index + 1,
                offset: line_start + column,
                text: line.trim().to_owned(),
                construct: resolve_construct(&method),
                method,
            });
        }
        line_start += line.len();
    }
    calls
}

/// Reads each of `paths` and collects the facade calls left in them.
pub fn scan_remaining(paths: &[PathBuf], facade: &str) -> Result<Vec<RemainingCall>, ConvertError> {
    let mut calls = Vec::new();
    for path in paths {
        let text = read(path)?;
        if contains_facade(&text, facade) {
            calls.extend(find_remaining_calls(path, &text, facade));
        }
    }
    Ok(calls)
}

fn read(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConvertError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.ends_with(extension))
}

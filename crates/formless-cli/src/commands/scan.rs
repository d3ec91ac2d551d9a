//! Implementation of the `formless scan` command.

use std::path::PathBuf;

use formless::{discover_templates, scan_remaining};
use miette::IntoDiagnostic;

use crate::commands::{FileError, Settings, read_input, report_remaining};
use crate::output::{failure_mark, success_mark};

/// Arguments for the scan command.
#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Template or directory of templates to scan
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the scan command.
///
/// Exits with `DATAERR` when any facade call is found.
pub fn run_scan(args: ScanArgs, settings: &Settings) -> miette::Result<i32> {
    let templates = discover_templates(&args.path, &settings.extension).map_err(FileError)?;
    let calls = scan_remaining(&templates, settings.facade()).map_err(FileError)?;
    let mut files = 0;

    for template in &templates {
        let mut found = calls.iter().filter(|call| &call.path == template).peekable();
        if found.peek().is_none() {
            continue;
        }
        files += 1;
        if !args.json {
            let source = read_input(template)?;
            report_remaining(found, &source, settings.facade());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calls).into_diagnostic()?);
    } else if calls.is_empty() {
        println!(
            "{} no {}:: calls in {} templates",
            success_mark(),
            settings.facade(),
            templates.len()
        );
    } else {
        println!(
            "{} {} {}:: calls in {files} of {} templates",
            failure_mark(),
            calls.len(),
            settings.facade(),
            templates.len()
        );
    }

    if calls.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

//! Implementation of the `formless convert` command.

use std::path::PathBuf;

use formless::{ConversionReport, WriteMode, convert_path};
use miette::IntoDiagnostic;
use serde::Serialize;

use crate::commands::{FileError, Settings, read_input, report_remaining};
use crate::output::table::format_summary_table;
use crate::output::{failure_mark, success_mark};

/// Arguments for the convert command.
#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    /// Template or directory of templates to convert
    pub path: PathBuf,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any facade call is left unconverted
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for the convert command.
#[derive(Debug, Serialize)]
struct ConvertJson<'a> {
    #[serde(flatten)]
    report: &'a ConversionReport,
    total_rewrites: usize,
    changed_files: usize,
}

/// Run the convert command.
pub fn run_convert(args: ConvertArgs, settings: &Settings) -> miette::Result<i32> {
    let mode = if args.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };
    let report =
        convert_path(&args.path, &settings.extension, &settings.converter, mode).map_err(FileError)?;

    if args.json {
        let output = ConvertJson {
            report: &report,
            total_rewrites: report.total_rewrites(),
            changed_files: report.changed_files(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        print_summary(&report, settings)?;
    }

    if args.strict && !report.remaining.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn print_summary(report: &ConversionReport, settings: &Settings) -> miette::Result<()> {
    let facade = settings.facade();
    if !report.files.is_empty() {
        println!("{}", format_summary_table(report));
    }

    let mark = if report.remaining.is_empty() {
        success_mark()
    } else {
        failure_mark()
    };
    let verb = if report.dry_run { "would rewrite" } else { "rewrote" };
    println!(
        "{mark} {verb} {} calls in {} files, {} left, {} templates without {facade}::",
        report.total_rewrites(),
        report.changed_files(),
        report.remaining.len(),
        report.skipped
    );

    for file in report.files.iter().filter(|file| file.remaining > 0) {
        // Offsets point into the converted text, which a dry run never wrote.
        let mut source = read_input(&file.path)?;
        if report.dry_run {
            source = settings.converter.convert(&source);
        }
        let calls = report.remaining.iter().filter(|call| call.path == file.path);
        report_remaining(calls, &source, facade);
    }
    Ok(())
}

//! Implementation of the `formless render` command.

use std::path::PathBuf;

use clap::ArgGroup;

use crate::commands::{Settings, read_input};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
#[command(group(ArgGroup::new("input").required(true).args(["template", "file"])))]
pub struct RenderArgs {
    /// Template text to convert
    #[arg(long)]
    pub template: Option<String>,

    /// File to convert (not modified)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Run the render command.
pub fn run_render(args: RenderArgs, settings: &Settings) -> miette::Result<i32> {
    let text = match (args.template, args.file) {
        (Some(template), _) => template,
        (None, Some(path)) => read_input(&path)?,
        (None, None) => return Ok(exitcode::USAGE),
    };

    let conversion = settings.converter.convert_with_stats(&text);
    log::info!("{} calls rewritten", conversion.total_rewrites());
    println!("{}", conversion.output);
    Ok(exitcode::OK)
}

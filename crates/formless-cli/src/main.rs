//! Formless CLI entry point.
//!
//! Command-line tools for moving Blade templates off the `Form` facade:
//! - `formless convert` - Rewrite facade calls into HTML in place
//! - `formless scan` - List facade calls that are still present
//! - `formless render` - Print the conversion of a snippet or file

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    ConvertArgs, FileError, RenderArgs, ScanArgs, Settings, run_convert, run_render, run_scan,
};
use env_logger::{Builder, Env};
use formless::{DEFAULT_EXTENSION, DEFAULT_FACADE};
use miette::MietteHandlerOpts;

/// Blade Form facade converter.
#[derive(Debug, Parser)]
#[command(name = "formless")]
#[command(about = "Rewrites Blade Form facade calls into plain HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Name of the helper facade
    #[arg(long, env = "FORMLESS_FACADE", default_value = DEFAULT_FACADE, global = true)]
    pub facade: String,

    /// File name suffix of templates
    #[arg(long, env = "FORMLESS_EXTENSION", default_value = DEFAULT_EXTENSION, global = true)]
    pub extension: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a template or every template under a directory
    Convert(ConvertArgs),
    /// List facade calls left in templates without writing anything
    Scan(ScanArgs),
    /// Print the conversion of a snippet or a single file
    Render(RenderArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// `RUST_LOG` wins over the verbosity flag.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let settings = Settings::new(cli.facade, cli.extension);
    let result = match cli.command {
        Commands::Convert(args) => run_convert(args, &settings),
        Commands::Scan(args) => run_scan(args, &settings),
        Commands::Render(args) => run_render(args, &settings),
    };

    match result {
        Ok(code) => exit(code),
        Err(report) => {
            let code = report
                .downcast_ref::<FileError>()
                .map_or(exitcode::SOFTWARE, FileError::exit_code);
            eprintln!("{report:?}");
            exit(code);
        }
    }
}

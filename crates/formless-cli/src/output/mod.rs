//! Terminal output helpers.

mod diagnostic;
pub mod table;

use owo_colors::{OwoColorize, Stream};

pub use diagnostic::RemainingCallDiagnostic;

/// A green check mark when stdout supports color.
pub fn success_mark() -> String {
    "✓".if_supports_color(Stream::Stdout, OwoColorize::green).to_string()
}

/// A red cross when stdout supports color.
pub fn failure_mark() -> String {
    "✗".if_supports_color(Stream::Stdout, OwoColorize::red).to_string()
}

//! Tokenizer diagnostics.

use thiserror::Error;

/// Unresolved scanner state left over at the end of an argument list.
///
/// This never aborts a conversion: the split up to end-of-input is still
/// returned and the problem is recorded on the [`ArgumentList`].
///
/// [`ArgumentList`]: crate::parser::ArgumentList
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedArgumentList {
    /// A string literal was opened and never closed.
    #[error("unterminated string opened with {quote}")]
    UnterminatedString { quote: char },

    /// Openers and closers do not pair up. Positive depth means missing
    /// closers, negative depth means surplus closers.
    #[error("unbalanced delimiters (depth {depth})")]
    UnbalancedDelimiters { depth: isize },
}

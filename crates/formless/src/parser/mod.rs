//! Delimiter-balanced tokenizer for helper argument lists.
//!
//! This module splits the raw text between a helper call's parentheses into
//! top-level arguments and offers the small balanced-scan primitives the
//! attribute engine and construct rules build on. It is not a parser for the
//! host scripting language: it only tracks bracket depth and string state.

pub mod error;
mod scan;
mod split;

pub use error::MalformedArgumentList;
pub(crate) use scan::Scanner;
pub use split::{
    ArgumentList, split_key_value, split_top_level, take_balanced, take_expression, unwrap_array,
};

//! Rewrites Laravel Blade `Form::` facade calls into plain HTML.
//!
//! A template such as
//!
//! ```text
//! {!! Form::checkbox('tags[]', 'php', old('tags'), ['class' => 'form-check']) !!}
//! ```
//!
//! becomes markup that no longer needs the facade:
//!
//! ```text
//! <input type="checkbox" name="tags[]" value="{{ 'php' }}" @if(in_array('php', (array)old('tags'))) checked @endif class="form-check">
//! ```
//!
//! Expressions from the template are never evaluated; they are carried into
//! the output inside Blade interpolation.

pub mod attributes;
pub mod cache;
pub mod converter;
pub mod error;
pub mod expression;
pub mod files;
pub mod parser;
pub mod rules;

pub use cache::PatternCache;
pub use converter::{Conversion, Converter, DEFAULT_FACADE};
pub use error::ConvertError;
pub use files::{
    ConversionReport, DEFAULT_EXTENSION, FileOutcome, FileReport, RemainingCall, WriteMode,
    contains_facade, convert_file, convert_path, discover_templates, find_remaining_calls,
    scan_remaining,
};
pub use formless_constructs::{Construct, DISPATCH_ORDER, resolve_construct};
pub use parser::{ArgumentList, MalformedArgumentList, split_top_level};

//! One rewrite rule per helper construct.
//!
//! A rule turns the argument list of a single call into markup. Rules are
//! pure: the only thing they share is the pattern cache carried by
//! [`RuleContext`]. A rule returns `None` when the call has a shape it does
//! not convert, in which case the call is left in the document untouched.

mod buttons;
mod choices;
mod file;
mod form;
mod hidden;
mod inputs;
mod label;
mod select;
mod textarea;

use formless_constructs::Construct;

use crate::attributes::{AttributeSchema, RenderedAttributes, resolve};
use crate::cache::PatternCache;
use crate::parser::{ArgumentList, take_expression};

/// Signature shared by every construct rule.
pub type Rule = fn(&ArgumentList, &RuleContext<'_>) -> Option<String>;

/// Shared services handed to each rule invocation.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    cache: &'a PatternCache,
}

impl<'a> RuleContext<'a> {
    pub fn new(cache: &'a PatternCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &'a PatternCache {
        self.cache
    }

    /// Resolves `schema` against an options argument, or renders nothing
    /// when the call has no options argument.
    pub fn attributes(&self, schema: &AttributeSchema, options: Option<&str>) -> RenderedAttributes {
        options
            .map(|options| resolve(schema, options, self.cache))
            .unwrap_or_default()
    }

    /// The raw value expression following the first match of `key_pattern`
    /// (a pattern ending just before the value).
    pub(crate) fn option_value<'t>(&self, options: &'t str, key_pattern: &str) -> Option<&'t str> {
        let found = self.cache.get(key_pattern)?.find(options)?;
        let value = take_expression(&options[found.end()..]);
        (!value.is_empty()).then_some(value)
    }
}

/// The rule that rewrites `construct`.
pub fn rule_for(construct: Construct) -> Rule {
    match construct {
        Construct::Open => form::open,
        Construct::Close => form::close,
        Construct::Hidden => hidden::hidden,
        Construct::Textarea => textarea::textarea,
        Construct::Label => label::label,
        Construct::Input => inputs::input,
        Construct::Password => inputs::password,
        Construct::Number => inputs::number,
        Construct::Range => inputs::range,
        Construct::Text => inputs::text,
        Construct::Email => inputs::email,
        Construct::Url => inputs::url,
        Construct::Tel => inputs::tel,
        Construct::Search => inputs::search,
        Construct::Date => inputs::date,
        Construct::Time => inputs::time,
        Construct::Datetime => inputs::datetime,
        Construct::Color => inputs::color,
        Construct::Select => select::select,
        Construct::Checkbox => choices::checkbox,
        Construct::Radio => choices::radio,
        Construct::File => file::file,
        Construct::Submit => buttons::submit,
        Construct::Button => buttons::button,
    }
}

/// Rewrites one call's arguments as `construct`.
pub fn render(construct: Construct, args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    rule_for(construct)(args, ctx)
}

//! `<input>` constructs that carry a single value: the text-like family,
//! `input(type, ...)`, `password`, `number` and `range`.

use formless_constructs::Construct;

use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{
    format_value_for_output, interpolate, is_quoted_literal, normalize_field_name, strip_quotes,
};
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const TEXT: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("placeholder", Extraction::Quoted),
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("required", Extraction::Flag),
]);

const NUMBER: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("placeholder", Extraction::Quoted),
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("min", Extraction::QuotedOrNumeric),
    AttributeRule::new("max", Extraction::QuotedOrNumeric),
    AttributeRule::new("step", Extraction::QuotedOrNumeric),
]);

/// `(name, value, options)` rendered as `<input type=T name value>`.
fn text_field(input_type: &str, args: &[String], ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.first()?);
    let value = args
        .get(1)
        .map(|raw| format_value_for_output(raw))
        .unwrap_or_default();
    let attributes = ctx.attributes(&TEXT, args.get(2).map(String::as_str));
    Some(format!(
        r#"<input type="{input_type}" name="{name}" value="{value}"{attributes}>"#
    ))
}

fn typed(construct: Construct, args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    text_field(construct.input_type()?, args.as_slice(), ctx)
}

pub(super) fn text(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Text, args, ctx)
}

pub(super) fn email(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Email, args, ctx)
}

pub(super) fn url(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Url, args, ctx)
}

pub(super) fn tel(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Tel, args, ctx)
}

pub(super) fn search(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Search, args, ctx)
}

pub(super) fn date(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Date, args, ctx)
}

pub(super) fn time(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Time, args, ctx)
}

pub(super) fn datetime(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Datetime, args, ctx)
}

pub(super) fn color(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    typed(Construct::Color, args, ctx)
}

/// `input(type, name, value, options)`. A literal type is written as is,
/// anything else is interpolated.
pub(super) fn input(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let (input_type, rest) = args.as_slice().split_first()?;
    if rest.is_empty() {
        return None;
    }
    let input_type = if is_quoted_literal(input_type) {
        strip_quotes(input_type).to_owned()
    } else {
        interpolate(input_type)
    };
    text_field(&input_type, rest, ctx)
}

/// `password(name, options)`. The value is always empty.
pub(super) fn password(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let attributes = ctx.attributes(&TEXT, args.get(1));
    Some(format!(
        r#"<input type="password" name="{name}" value=""{attributes}>"#
    ))
}

pub(super) fn number(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    numeric_field(Construct::Number, args, ctx)
}

pub(super) fn range(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    numeric_field(Construct::Range, args, ctx)
}

/// Like [`text_field`], but the `value` attribute is left out entirely when
/// the value is empty.
fn numeric_field(construct: Construct, args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let input_type = construct.input_type()?;
    let name = normalize_field_name(args.get(0)?);
    let value = args
        .get(1)
        .map(format_value_for_output)
        .filter(|value| !value.is_empty())
        .map(|value| format!(r#" value="{value}""#))
        .unwrap_or_default();
    let attributes = ctx.attributes(&NUMBER, args.get(2));
    Some(format!(
        r#"<input type="{input_type}" name="{name}"{value}{attributes}>"#
    ))
}

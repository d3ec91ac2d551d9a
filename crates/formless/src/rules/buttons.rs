use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{interpolate, is_null_like, is_quoted_literal, strip_quotes};
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const SUBMIT: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("style", Extraction::Quoted),
    AttributeRule::new("onclick", Extraction::Quoted),
    AttributeRule::new("disabled", Extraction::Flag),
]);

const BUTTON: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("type", Extraction::Quoted),
    AttributeRule::new("onclick", Extraction::Quoted),
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("disabled", Extraction::Flag),
])
.with_data_attributes()
.with_dynamic_attributes();

/// `submit(text, options)` becomes `<button type="submit">`.
pub(super) fn submit(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let text = match args.get(0) {
        Some(text) if is_null_like(text) => String::new(),
        Some(text) if is_quoted_literal(text) => strip_quotes(text).to_owned(),
        Some(text) => interpolate(text),
        None => String::new(),
    };
    let attributes = ctx.attributes(&SUBMIT, args.get(1));
    Some(format!(
        r#"<button type="submit"{attributes}>{text}</button>"#
    ))
}

/// `button(text, options)`. The text is emitted unescaped, exactly as
/// written; without options the tag carries no attributes.
pub(super) fn button(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let text = args.get(0)?;
    let attributes = ctx.attributes(&BUTTON, args.get(1));
    Some(format!("<button{attributes}>{{!! {text} !!}}</button>"))
}

use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{
    interpolate, is_null_like, is_quoted_literal, normalize_field_name, strip_quotes,
};
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const LABEL: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("style", Extraction::Quoted),
]);

const FOR_KEY: &str = r#"['"]for['"]\s*=>\s*"#;

/// `label(name, text, options)`. Without a text the field name is shown,
/// and a `'for'` option replaces the name in the `for` attribute.
pub(super) fn label(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let text = match args.get(1) {
        Some(text) if !is_null_like(text) => text.to_owned(),
        _ => format!("'{name}'"),
    };
    let options = args.get(2);
    let target = match options.and_then(|options| ctx.option_value(options, FOR_KEY)) {
        Some(target) if is_quoted_literal(target) => strip_quotes(target).to_owned(),
        Some(target) => interpolate(target),
        None => name,
    };
    let attributes = ctx.attributes(&LABEL, options);
    Some(format!(
        r#"<label for="{target}"{attributes}>{{!! {text} !!}}</label>"#
    ))
}

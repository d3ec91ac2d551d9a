use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{format_value_for_output, normalize_field_name};
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const TEXTAREA: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("cols", Extraction::Numeric),
    AttributeRule::new("rows", Extraction::QuotedOrNumeric),
    AttributeRule::new("placeholder", Extraction::Quoted),
    AttributeRule::new("class", Extraction::Quoted),
]);

pub(super) fn textarea(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let value = args.get(1).map(format_value_for_output).unwrap_or_default();
    let attributes = ctx.attributes(&TEXTAREA, args.get(2));
    Some(format!(
        r#"<textarea name="{name}"{attributes}>{value}</textarea>"#
    ))
}

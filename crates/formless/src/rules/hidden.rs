use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{format_hidden_value, normalize_field_name};
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const HIDDEN: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("class", Extraction::Quoted),
]);

pub(super) fn hidden(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let value = args
        .get(1)
        .map(|raw| format_hidden_value(raw, &name))
        .unwrap_or_default();
    let attributes = ctx.attributes(&HIDDEN, args.get(2));
    Some(format!(
        r#"<input type="hidden" name="{name}" value="{value}"{attributes}>"#
    ))
}

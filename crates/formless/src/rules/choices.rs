//! Checkbox and radio inputs.

use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{format_value_for_output, is_null_like, normalize_field_name};
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const CHECKBOX: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Expression),
    AttributeRule::new("id", Extraction::Expression),
    AttributeRule::new("style", Extraction::Expression),
    AttributeRule::new("disabled", Extraction::Flag),
    // Handlers keep the casing the template used.
    AttributeRule::new("onClick", Extraction::Quoted),
    AttributeRule::new("onclick", Extraction::Quoted),
    AttributeRule::new("onChange", Extraction::Quoted),
    AttributeRule::new("onchange", Extraction::Quoted),
])
.with_data_attributes()
.with_dynamic_attributes()
.with_event_quotes();

const RADIO: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("style", Extraction::Quoted),
    AttributeRule::new("onchange", Extraction::Quoted).with_keys(&["onChange", "onchange"]),
    AttributeRule::new("disabled", Extraction::Flag),
]);

/// `checkbox(name, value = 1, checked, options)`.
pub(super) fn checkbox(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let raw_value = args.get(1).unwrap_or("1");
    let value = format_value_for_output(raw_value);
    let checked = args
        .get(2)
        .map(|checked| checked_test(&name, raw_value, checked))
        .unwrap_or_default();
    let attributes = ctx.attributes(&CHECKBOX, args.get(3));
    Some(format!(
        r#"<input type="checkbox" name="{name}" value="{value}"{checked}{attributes}>"#
    ))
}

/// `radio(name, value, checked, options)`. A checked argument of `false`,
/// `null` or an empty string renders no test at all.
pub(super) fn radio(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let raw_value = args.get(1).unwrap_or_default();
    let value = format_value_for_output(raw_value);
    let checked = args
        .get(2)
        .filter(|checked| !is_null_like(checked) && !checked.eq_ignore_ascii_case("false"))
        .map(|checked| checked_test(&name, raw_value, checked))
        .unwrap_or_default();
    let attributes = ctx.attributes(&RADIO, args.get(3));
    Some(format!(
        r#"<input type="radio" name="{name}" value="{value}"{checked}{attributes}>"#
    ))
}

/// For `name[]` fields the checked argument is a collection of selected
/// values; otherwise it is a plain condition.
fn checked_test(name: &str, value: &str, checked: &str) -> String {
    if name.ends_with("[]") {
        format!(" @if(in_array({value}, (array){checked})) checked @endif")
    } else {
        format!(" @if({checked}) checked @endif")
    }
}

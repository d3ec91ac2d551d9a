use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{is_array_field_name, is_null_like, normalize_field_name};
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const SELECT: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("onchange", Extraction::Quoted).with_keys(&["onChange", "onchange"]),
]);

/// `select(name, options, selected, attributes)`.
///
/// The options collection is only known at render time, so the output is a
/// Blade `@foreach` over it with a per-option selected test.
pub(super) fn select(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let choices = args.get(1)?;
    let selected = match args.get(2) {
        Some(selected) if is_null_like(selected) => String::new(),
        Some(selected) if is_array_field_name(&name) => {
            format!(" @if(in_array($key, (array){selected})) selected @endif")
        }
        Some(selected) => format!(" @if($key == {selected}) selected @endif"),
        None => String::new(),
    };
    let attributes = ctx.attributes(&SELECT, args.get(3));

    Some(format!(
        "<select name=\"{name}\"{attributes}>\n\
         @foreach({choices} as $key => $value)\n\
         <option value=\"{{{{ $key }}}}\"{selected}>{{{{ $value }}}}</option>\n\
         @endforeach\n\
         </select>"
    ))
}

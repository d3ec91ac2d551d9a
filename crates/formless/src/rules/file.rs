use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::normalize_field_name;
use crate::parser::ArgumentList;
use crate::rules::RuleContext;

const FILE: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("accept", Extraction::Quoted),
    AttributeRule::new("capture", Extraction::Quoted),
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("onchange", Extraction::Quoted),
    AttributeRule::new("onclick", Extraction::Quoted),
])
.with_event_quotes();

const MULTIPLE: &str = r#"['"]multiple['"]\s*=>\s*(true|false|\d+)"#;

pub(super) fn file(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let name = normalize_field_name(args.get(0)?);
    let options = args.get(1);
    let attributes = ctx.attributes(&FILE, options);
    let multiple = if options.is_some_and(|options| allows_multiple(options, ctx)) {
        " multiple"
    } else {
        ""
    };
    Some(format!(
        r#"<input type="file" name="{name}"{attributes}{multiple}>"#
    ))
}

/// `'multiple' => true` or any non-zero number.
fn allows_multiple(options: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.cache()
        .get(MULTIPLE)
        .and_then(|re| re.captures(options))
        .and_then(|caps| caps.get(1))
        .is_some_and(|flag| match flag.as_str() {
            "true" => true,
            "false" => false,
            number => number.bytes().any(|b| b != b'0'),
        })
}

use crate::attributes::{AttributeRule, AttributeSchema, Extraction};
use crate::expression::{interpolate, is_quoted_literal, strip_quotes};
use crate::parser::{ArgumentList, split_key_value, split_top_level, unwrap_array};
use crate::rules::RuleContext;

const FORM: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
    AttributeRule::new("target", Extraction::Quoted),
]);

const ROUTE_KEY: &str = r#"['"]route['"]\s*=>\s*"#;
const URL_KEY: &str = r#"['"]url['"]\s*=>\s*"#;
const METHOD: &str = r#"['"]method['"]\s*=>\s*['"]([^'"]+)['"]"#;

/// `Form::open([...])` becomes a `<form>` tag. Any method other than GET is
/// followed by the CSRF token field on its own line.
pub(super) fn open(args: &ArgumentList, ctx: &RuleContext<'_>) -> Option<String> {
    let options = args.get(0).map(unwrap_array).unwrap_or_default();
    let action = action(options, ctx);
    let method = ctx
        .cache()
        .get(METHOD)
        .and_then(|re| re.captures(options))
        .and_then(|caps| caps.get(1))
        .map_or("GET", |m| m.as_str());
    let attributes = ctx.attributes(&FORM, Some(options));

    let mut tag = format!(r#"<form action="{action}" method="{method}"{attributes}>"#);
    if !method.eq_ignore_ascii_case("GET") {
        tag.push_str("\n{{ csrf_field() }}");
    }
    Some(tag)
}

/// Only the argument-less form is converted.
pub(super) fn close(args: &ArgumentList, _ctx: &RuleContext<'_>) -> Option<String> {
    args.is_empty().then(|| "</form>".to_owned())
}

/// Named routes win over URLs.
fn action(options: &str, ctx: &RuleContext<'_>) -> String {
    if let Some(route) = ctx.option_value(options, ROUTE_KEY) {
        if !route.starts_with('[') {
            return format!("{{{{ route({route}) }}}}");
        }
        let items = split_top_level(unwrap_array(route));
        match items.as_slice() {
            [] => {}
            [name] => return format!("{{{{ route({name}) }}}}"),
            [name, param] if split_key_value(param).is_none() => {
                return format!("{{{{ route({name}, {param}) }}}}");
            }
            [name, params @ ..] => {
                return format!("{{{{ route({name}, [{}]) }}}}", params.join(", "));
            }
        }
    }

    match ctx.option_value(options, URL_KEY) {
        Some(url) if is_quoted_literal(url) => strip_quotes(url).to_owned(),
        Some(url) => interpolate(url),
        None => String::new(),
    }
}

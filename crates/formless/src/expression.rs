//! Classification and rewriting of single expressions.
//!
//! Field names and attribute values arrive as raw source text taken from a
//! helper's argument list. The functions here decide whether such text is a
//! plain literal, a string concatenation, or a runtime expression, and render
//! it with `{{ ... }}` interpolation where the value is only known when the
//! template runs.

use crate::parser::Scanner;

/// Runtime helpers whose result may be a collection.
const REQUEST_HELPERS: &[&str] = &["old", "session", "request", "input"];

/// How a value expression renders inside a `value="..."` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `''`, `""`, `null` or blank: the value is omitted.
    Empty,
    /// A quoted integer or decimal such as `'42'`.
    Number,
    /// A quoted `#rgb` or `#rrggbb` color.
    ColorCode,
    /// A call to a request helper (`old(...)`, `session(...)`, ...).
    RequestHelper,
    /// Anything else.
    Expression,
}

/// Wraps `expr` in output interpolation: `{{ expr }}`.
pub fn interpolate(expr: &str) -> String {
    format!("{{{{ {} }}}}", expr.trim())
}

/// Strips one enclosing layer of matching `'` or `"` quotes.
pub fn strip_quotes(raw: &str) -> &str {
    let text = raw.trim();
    for quote in ['\'', '"'] {
        if let Some(inner) = text.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote)) {
            return inner;
        }
    }
    text
}

/// Whether the whole text is exactly one string literal.
///
/// `'a'` is, `'a' . 'b'` is not.
pub fn is_quoted_literal(raw: &str) -> bool {
    let text = raw.trim();
    if !text.starts_with(['\'', '"']) {
        return false;
    }
    let mut scanner = Scanner::default();
    for (i, ch) in text.char_indices() {
        scanner.feed(ch);
        if i > 0 && !scanner.in_string() {
            return i + ch.len_utf8() == text.len();
        }
    }
    false
}

/// `''`, `""`, `null` (any case) or blank text.
pub fn is_null_like(raw: &str) -> bool {
    let text = raw.trim();
    text.is_empty() || text == "''" || text == "\"\"" || text.eq_ignore_ascii_case("null")
}

/// Splits on the top-level string concatenation operator.
///
/// Dots inside strings and brackets are ignored, as is a dot between two
/// digits (a decimal point) and the `.=` operator. Text without any operator
/// comes back as a single element.
pub fn split_concatenation(raw: &str) -> Vec<&str> {
    let text = raw.trim();
    let mut parts = Vec::new();
    let mut scanner = Scanner::default();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        let code = scanner.feed(ch);
        let next = chars.peek().map(|&(_, c)| c);
        let decimal = prev.is_some_and(|c: char| c.is_ascii_digit())
            && next.is_some_and(|c| c.is_ascii_digit());
        if code && ch == '.' && scanner.depth() == 0 && !decimal && next != Some('=') {
            parts.push(text[start..i].trim());
            start = i + 1;
        }
        prev = Some(ch);
    }
    parts.push(text[start..].trim());
    parts
}

/// The operands of a concatenation, when `raw` really is one.
///
/// Plain prose such as `"Enter a name."` also contains dots, so every operand
/// must be non-empty and at least one must be a string literal or variable.
fn concatenation(raw: &str) -> Option<Vec<&str>> {
    let parts = split_concatenation(raw);
    let operands = parts.len() > 1
        && parts.iter().all(|part| !part.is_empty())
        && parts
            .iter()
            .any(|part| is_quoted_literal(part) || part.starts_with('$'));
    operands.then_some(parts)
}

/// Normalizes a field name for a `name="..."` attribute.
///
/// A plain literal loses its quotes. A concatenation of the form
/// `'prefix' . expr . 'suffix'` (or without the suffix) becomes
/// `prefix{{ expr }}suffix`; any other concatenation is interpolated whole.
pub fn normalize_field_name(raw: &str) -> String {
    let text = raw.trim();
    let Some(parts) = concatenation(text) else {
        return strip_quotes(text).to_owned();
    };

    match parts.as_slice() {
        [first, middle @ .., last]
            if !middle.is_empty() && is_quoted_literal(first) && is_quoted_literal(last) =>
        {
            format!(
                "{}{}{}",
                strip_quotes(first),
                interpolate(&middle.join(" . ")),
                strip_quotes(last)
            )
        }
        [first, rest @ ..] if is_quoted_literal(first) => {
            format!("{}{}", strip_quotes(first), interpolate(&rest.join(" . ")))
        }
        _ => interpolate(text),
    }
}

/// Normalizes an attribute value taken from an options array.
///
/// A single string literal loses its quotes, and a concatenation that opens
/// with a string literal (`'btn-' . $type`) is interpolated whole. Anything
/// else is returned unchanged, so handler code such as
/// `$(this).closest('form').submit()` stays client-side script.
pub fn normalize_attribute_value(raw: &str) -> String {
    let text = raw.trim();
    if is_quoted_literal(text) {
        strip_quotes(text).to_owned()
    } else if concatenation(text).is_some_and(|parts| is_quoted_literal(parts[0])) {
        interpolate(text)
    } else {
        text.to_owned()
    }
}

/// Whether `raw` calls one of the request helpers that may yield an array,
/// e.g. `old('tags')` or `Request ('q')`.
pub fn is_array_helper_call(raw: &str) -> bool {
    let text = raw.trim();
    REQUEST_HELPERS.iter().any(|helper| {
        text.get(..helper.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(helper))
            && text[helper.len()..].trim_start().starts_with('(')
    })
}

pub fn classify_value(raw: &str) -> ValueKind {
    let text = raw.trim();
    let kind = if is_null_like(text) {
        ValueKind::Empty
    } else if is_quoted_literal(text) && is_number(strip_quotes(text)) {
        ValueKind::Number
    } else if is_quoted_literal(text) && is_color_code(strip_quotes(text)) {
        ValueKind::ColorCode
    } else if is_array_helper_call(text) {
        ValueKind::RequestHelper
    } else {
        ValueKind::Expression
    };
    log::trace!("value `{text}` classified as {kind:?}");
    kind
}

/// Renders a value expression for a `value="..."` attribute.
///
/// Null-like values render as the empty string, quoted numbers and colors
/// are interpolated without their quotes, and everything else is
/// interpolated verbatim.
pub fn format_value_for_output(raw: &str) -> String {
    match classify_value(raw) {
        ValueKind::Empty => String::new(),
        ValueKind::Number | ValueKind::ColorCode => interpolate(strip_quotes(raw)),
        ValueKind::RequestHelper | ValueKind::Expression => interpolate(raw),
    }
}

/// Whether a normalized field name ends in `[]` or a bracketed index.
pub fn is_array_field_name(name: &str) -> bool {
    let name = name.trim_end();
    name.ends_with(']') && name.contains('[')
}

/// Renders the value of a hidden field.
///
/// Array-suffixed fields may receive a collection at runtime, so their value
/// is joined with commas when it is one.
pub fn format_hidden_value(raw: &str, field_name: &str) -> String {
    if is_null_like(raw) {
        return String::new();
    }
    if is_array_field_name(field_name) {
        let value = raw.trim();
        return format!("{{{{ is_array({value}) ? implode(',', {value}) : {value} }}}}");
    }
    format_value_for_output(raw)
}

/// An unsigned integer or decimal literal.
pub(crate) fn is_number(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    }
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_color_code(text: &str) -> bool {
    text.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

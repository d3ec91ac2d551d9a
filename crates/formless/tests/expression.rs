//! Integration tests for field name and value normalization.

use formless::expression::{
    ValueKind, classify_value, format_hidden_value, format_value_for_output, interpolate,
    is_array_field_name, is_array_helper_call, is_null_like, is_quoted_literal,
    normalize_attribute_value, normalize_field_name, split_concatenation, strip_quotes,
};

// =============================================================================
// Quotes and literals
// =============================================================================

#[test]
fn test_strip_quotes() {
    assert_eq!(strip_quotes("'name'"), "name");
    assert_eq!(strip_quotes("\"name\""), "name");
    assert_eq!(strip_quotes("  'name'  "), "name");
    assert_eq!(strip_quotes("'name\""), "'name\"");
    assert_eq!(strip_quotes("$name"), "$name");
    assert_eq!(strip_quotes("'"), "'");
}

#[test]
fn test_is_quoted_literal() {
    assert!(is_quoted_literal("'a'"));
    assert!(is_quoted_literal(r#""a, b""#));
    assert!(is_quoted_literal(r"'it\'s'"));
    assert!(!is_quoted_literal("'a' . 'b'"));
    assert!(!is_quoted_literal("a"));
    assert!(!is_quoted_literal("'"));
    assert!(!is_quoted_literal("old('a')"));
}

#[test]
fn test_is_null_like() {
    assert!(is_null_like(""));
    assert!(is_null_like("   "));
    assert!(is_null_like("null"));
    assert!(is_null_like("NULL"));
    assert!(is_null_like("''"));
    assert!(is_null_like("\"\""));
    assert!(!is_null_like("0"));
    assert!(!is_null_like("'null'"));
}

#[test]
fn test_interpolate() {
    assert_eq!(interpolate("$x"), "{{ $x }}");
    assert_eq!(interpolate("  old('a') "), "{{ old('a') }}");
}

// =============================================================================
// Concatenation
// =============================================================================

#[test]
fn test_split_concatenation() {
    assert_eq!(
        split_concatenation("'a' . $b . 'c'"),
        vec!["'a'", "$b", "'c'"]
    );
    assert_eq!(split_concatenation("'a'.$b"), vec!["'a'", "$b"]);
    assert_eq!(split_concatenation("1.5"), vec!["1.5"]);
    assert_eq!(split_concatenation("'a.b'"), vec!["'a.b'"]);
    assert_eq!(
        split_concatenation("f($a . $b) . 'x'"),
        vec!["f($a . $b)", "'x'"]
    );
    assert_eq!(split_concatenation("$a .= 'x'"), vec!["$a .= 'x'"]);
}

#[test]
fn test_field_name_concatenation_with_suffix() {
    assert_eq!(
        normalize_field_name("'items[' . $i . '][name]'"),
        "items[{{ $i }}][name]"
    );
}

#[test]
fn test_field_name_concatenation_without_suffix() {
    assert_eq!(normalize_field_name("'prefix_' . $id"), "prefix_{{ $id }}");
}

#[test]
fn test_field_name_plain_literal() {
    assert_eq!(normalize_field_name("'email'"), "email");
    assert_eq!(normalize_field_name("\"email\""), "email");
    assert_eq!(normalize_field_name("'user.name'"), "user.name");
    assert_eq!(normalize_field_name("'tags[]'"), "tags[]");
}

#[test]
fn test_field_name_other_concatenation_is_interpolated() {
    assert_eq!(
        normalize_field_name("$prefix . '_name'"),
        "{{ $prefix . '_name' }}"
    );
}

#[test]
fn test_attribute_value_normalization() {
    assert_eq!(normalize_attribute_value("'btn'"), "btn");
    assert_eq!(
        normalize_attribute_value("'btn-' . $type"),
        "{{ 'btn-' . $type }}"
    );
    assert_eq!(normalize_attribute_value("Enter a name."), "Enter a name.");
    assert_eq!(normalize_attribute_value("e.g. Tokyo"), "e.g. Tokyo");
    assert_eq!(normalize_attribute_value("$class"), "$class");
}

#[test]
fn test_attribute_value_script_is_not_interpolated() {
    assert_eq!(
        normalize_attribute_value("$(this).closest('form').submit()"),
        "$(this).closest('form').submit()"
    );
    assert_eq!(normalize_attribute_value("$(this).val()"), "$(this).val()");
    assert_eq!(
        normalize_attribute_value("$user->name . ' (admin)'"),
        "$user->name . ' (admin)'"
    );
    assert_eq!(
        normalize_attribute_value("$price is 3.50 today."),
        "$price is 3.50 today."
    );
}

#[test]
fn test_attribute_value_concatenation_with_suffix() {
    assert_eq!(
        normalize_attribute_value("'row-' . $row->id . '-cell'"),
        "{{ 'row-' . $row->id . '-cell' }}"
    );
}

// =============================================================================
// Value classification
// =============================================================================

#[test]
fn test_empty_values_render_nothing() {
    assert_eq!(format_value_for_output("''"), "");
    assert_eq!(format_value_for_output("\"\""), "");
    assert_eq!(format_value_for_output("null"), "");
    assert_eq!(format_value_for_output("   "), "");
}

#[test]
fn test_quoted_numbers_lose_quotes() {
    assert_eq!(format_value_for_output("'42'"), "{{ 42 }}");
    assert_eq!(format_value_for_output("'3.14'"), "{{ 3.14 }}");
    assert_eq!(format_value_for_output("'1.'"), "{{ '1.' }}");
}

#[test]
fn test_quoted_colors_lose_quotes() {
    assert_eq!(format_value_for_output("'#ff00aa'"), "{{ #ff00aa }}");
    assert_eq!(format_value_for_output("'#FFF'"), "{{ #FFF }}");
    assert_eq!(format_value_for_output("'#ffff'"), "{{ '#ffff' }}");
}

#[test]
fn test_other_values_are_interpolated_verbatim() {
    assert_eq!(format_value_for_output("'hello'"), "{{ 'hello' }}");
    assert_eq!(format_value_for_output("$user->name"), "{{ $user->name }}");
    assert_eq!(format_value_for_output("old('name')"), "{{ old('name') }}");
    assert_eq!(format_value_for_output("42"), "{{ 42 }}");
}

#[test]
fn test_classify_value() {
    assert_eq!(classify_value("null"), ValueKind::Empty);
    assert_eq!(classify_value("'7'"), ValueKind::Number);
    assert_eq!(classify_value("'#abc'"), ValueKind::ColorCode);
    assert_eq!(classify_value("old('tags')"), ValueKind::RequestHelper);
    assert_eq!(classify_value("$value"), ValueKind::Expression);
}

#[test]
fn test_array_helper_calls() {
    assert!(is_array_helper_call("old('tags')"));
    assert!(is_array_helper_call("request ('q')"));
    assert!(is_array_helper_call("Session('x')"));
    assert!(is_array_helper_call("input('a', [])"));
    assert!(!is_array_helper_call("oldValue('a')"));
    assert!(!is_array_helper_call("Session::get('x')"));
    assert!(!is_array_helper_call("$old"));
}

// =============================================================================
// Array field names and hidden values
// =============================================================================

#[test]
fn test_array_field_names() {
    assert!(is_array_field_name("tags[]"));
    assert!(is_array_field_name("items[0]"));
    assert!(is_array_field_name("items[{{ $i }}][name]"));
    assert!(!is_array_field_name("tags"));
    assert!(!is_array_field_name("a[0].b"));
}

#[test]
fn test_hidden_value_for_array_field() {
    assert_eq!(
        format_hidden_value("$ids", "ids[]"),
        "{{ is_array($ids) ? implode(',', $ids) : $ids }}"
    );
}

#[test]
fn test_hidden_value_for_scalar_field() {
    assert_eq!(format_hidden_value("$id", "id"), "{{ $id }}");
    assert_eq!(format_hidden_value("'5'", "page"), "{{ 5 }}");
}

#[test]
fn test_hidden_value_empty() {
    assert_eq!(format_hidden_value("null", "ids[]"), "");
    assert_eq!(format_hidden_value("''", "id"), "");
}

//! Integration tests for the attribute resolution engine.

use std::sync::Arc;
use std::thread;

use formless::PatternCache;
use formless::attributes::{
    AttributeRule, AttributeSchema, DynamicAttributePair, Extraction, data_attributes,
    extract_dynamic_pairs, normalize_event_quotes, render_dynamic_pairs, resolve, resolve_schema,
};

const CLASS_THEN_ID: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("id", Extraction::Quoted),
]);

const FLAGS: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("disabled", Extraction::Flag),
    AttributeRule::new("required", Extraction::Flag),
]);

const SIZES: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("cols", Extraction::Numeric),
    AttributeRule::new("rows", Extraction::QuotedOrNumeric),
]);

const EXPRESSIONS: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Expression),
    AttributeRule::new("id", Extraction::Expression),
]);

const EVENTS: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("onchange", Extraction::Quoted).with_keys(&["onChange", "onchange"]),
]);

const BUTTON_LIKE: AttributeSchema = AttributeSchema::new(&[
    AttributeRule::new("class", Extraction::Quoted),
    AttributeRule::new("onclick", Extraction::Quoted),
])
.with_data_attributes()
.with_dynamic_attributes()
.with_event_quotes();

fn render(schema: &AttributeSchema, options: &str) -> String {
    resolve(schema, options, &PatternCache::new()).to_string()
}

// =============================================================================
// Schema order
// =============================================================================

#[test]
fn test_output_follows_schema_order() {
    assert_eq!(
        render(&CLASS_THEN_ID, "'id'=>'x','class'=>'y'"),
        r#" class="y" id="x""#
    );
}

#[test]
fn test_unmatched_attributes_are_omitted() {
    assert_eq!(render(&CLASS_THEN_ID, "['style' => 'color: red']"), "");
    assert_eq!(render(&CLASS_THEN_ID, "[]"), "");
    assert!(resolve(&CLASS_THEN_ID, "", &PatternCache::new()).is_empty());
}

#[test]
fn test_double_quoted_values() {
    assert_eq!(
        render(&CLASS_THEN_ID, r#"["class" => "btn btn-primary"]"#),
        r#" class="btn btn-primary""#
    );
}

#[test]
fn test_key_must_match_exactly() {
    assert_eq!(render(&CLASS_THEN_ID, "['data-id' => 'x']"), "");
}

#[test]
fn test_key_aliases() {
    assert_eq!(
        render(&EVENTS, "['onChange' => 'this.form.submit()']"),
        r#" onchange="this.form.submit()""#
    );
    assert_eq!(
        render(&EVENTS, "['onchange' => 'go()']"),
        r#" onchange="go()""#
    );
}

// =============================================================================
// Extraction kinds
// =============================================================================

#[test]
fn test_flags_render_bare() {
    assert_eq!(
        render(&FLAGS, "['required' => true, 'disabled' => 'disabled']"),
        " disabled required"
    );
    assert_eq!(render(&FLAGS, "['disabled' => '']"), " disabled");
}

#[test]
fn test_false_flag_is_omitted() {
    assert_eq!(render(&FLAGS, "['disabled' => false]"), "");
}

#[test]
fn test_flag_with_other_value_keeps_it() {
    assert_eq!(render(&FLAGS, "['required' => 'yes']"), r#" required="yes""#);
}

#[test]
fn test_numeric_and_dual_form() {
    assert_eq!(render(&SIZES, "['rows' => 5, 'cols' => 40]"), r#" cols="40" rows="5""#);
    assert_eq!(render(&SIZES, "['rows' => '5']"), r#" rows="5""#);
    assert_eq!(render(&SIZES, "['cols' => '40']"), "");
}

#[test]
fn test_expression_values() {
    assert_eq!(
        render(
            &EXPRESSIONS,
            "['id' => 'box', 'class' => $active ? 'on' : 'off']"
        ),
        r#" class="{{ $active ? 'on' : 'off' }}" id="box""#
    );
    assert_eq!(
        render(&EXPRESSIONS, "['class' => 'btn-' . $kind]"),
        r#" class="{{ 'btn-' . $kind }}""#
    );
    assert_eq!(render(&EXPRESSIONS, "['id' => 7]"), r#" id="7""#);
    assert_eq!(render(&EXPRESSIONS, "['id' => null]"), "");
}

#[test]
fn test_resolve_schema_skips_extra_passes() {
    let cache = PatternCache::new();
    let rendered = resolve_schema(
        &BUTTON_LIKE,
        "['data-id' => '1', 'class' => 'btn', $on ? 'a' : 'b' => true]",
        &cache,
    );
    assert_eq!(rendered.as_str(), r#" class="btn""#);
}

#[test]
fn test_computed_key_never_sets_schema_attribute() {
    assert_eq!(
        render(&FLAGS, "[$open ? 'data-open' : 'disabled' => 'disabled']"),
        ""
    );
    assert_eq!(
        render(&BUTTON_LIKE, "['class' => 'b', $busy ? 'data-x' : 'onclick' => 'go()']"),
        r#" class="b" {{ $busy ? 'data-x' : 'onclick' }}="{{ 'go()' }}""#
    );
}

#[test]
fn test_script_values_stay_literal() {
    assert_eq!(
        render(&EVENTS, r#"['onchange' => "$(this).closest('form').submit()"]"#),
        r#" onchange="$(this).closest('form').submit()""#
    );
    assert_eq!(
        render(&CLASS_THEN_ID, "['class' => '$ prices from 3.50.']"),
        r#" class="$ prices from 3.50.""#
    );
}

// =============================================================================
// data-* passthrough
// =============================================================================

#[test]
fn test_data_attributes_in_source_order() {
    assert_eq!(
        data_attributes("['data-id' => '5', 'class' => 'x', 'data-user' => $user->id]"),
        r#" data-id="5" data-user="{{ $user->id }}""#
    );
}

#[test]
fn test_data_attributes_precede_schema_attributes() {
    assert_eq!(
        render(&BUTTON_LIKE, "['class' => 'btn', 'data-toggle' => 'modal']"),
        r#" data-toggle="modal" class="btn""#
    );
}

// =============================================================================
// Dynamic attributes
// =============================================================================

fn pairs(options: &str) -> Vec<(String, String)> {
    extract_dynamic_pairs(options, &PatternCache::new())
        .into_iter()
        .map(|pair| (pair.key, pair.value))
        .collect()
}

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_owned(), value.to_owned())
}

#[test]
fn test_dynamic_simple_variable() {
    assert_eq!(
        pairs("['class' => 'x', $locked ? 'disabled' : 'data-open' => true]"),
        vec![pair("$locked ? 'disabled' : 'data-open'", "true")]
    );
}

#[test]
fn test_dynamic_parenthesized_condition() {
    assert_eq!(
        pairs("[($a && $b) ? 'readonly' : 'data-x' => $value]"),
        vec![pair("($a && $b) ? 'readonly' : 'data-x'", "$value")]
    );
}

#[test]
fn test_dynamic_logical_chains() {
    assert_eq!(
        pairs("[$user->isAdmin() && $edit ? 'data-admin' : 'data-user' => 1]"),
        vec![pair("$user->isAdmin() && $edit ? 'data-admin' : 'data-user'", "1")]
    );
    assert_eq!(
        pairs("[$a || $b ? 'hidden' : 'data-shown' => null]"),
        vec![pair("$a || $b ? 'hidden' : 'data-shown'", "null")]
    );
}

#[test]
fn test_dynamic_nested_ternary() {
    assert_eq!(
        pairs("[$a ? ($b ? 'x' : 'y') : 'z' => 'v']"),
        vec![pair("$a ? ($b ? 'x' : 'y') : 'z'", "'v'")]
    );
}

#[test]
fn test_literal_keys_are_not_dynamic() {
    assert!(pairs("['class' => $x ? 'a' : 'b', 'id' => 'y']").is_empty());
    assert!(pairs("[]").is_empty());
}

#[test]
fn test_dynamic_detection_order_is_preserved() {
    assert_eq!(
        pairs("[$b ? 'b' : 'c' => false, $a ? 'a' : 'c' => true]"),
        vec![
            pair("$b ? 'b' : 'c'", "false"),
            pair("$a ? 'a' : 'c'", "true"),
        ]
    );
}

#[test]
fn test_render_dynamic_pairs() {
    let rendered = render_dynamic_pairs(&[
        DynamicAttributePair {
            key: "$on ? 'checked' : 'data-off'".to_owned(),
            value: "true".to_owned(),
        },
        DynamicAttributePair {
            key: "$on ? 'title' : 'data-title'".to_owned(),
            value: "$title".to_owned(),
        },
    ]);
    assert_eq!(
        rendered,
        r#" {{ $on ? 'checked' : 'data-off' }}="true" {{ $on ? 'title' : 'data-title' }}="{{ $title }}""#
    );
}

#[test]
fn test_dynamic_pairs_follow_schema_attributes() {
    assert_eq!(
        render(&BUTTON_LIKE, "[$busy ? 'disabled' : 'data-idle' => true, 'class' => 'btn']"),
        r#" class="btn" {{ $busy ? 'disabled' : 'data-idle' }}="true""#
    );
}

// =============================================================================
// Event handler quotes
// =============================================================================

#[test]
fn test_event_quotes_are_normalized() {
    let cache = PatternCache::new();
    assert_eq!(
        normalize_event_quotes(r#" onclick="alert("hi")" class="x""#, &cache),
        r#" onclick="alert('hi')" class="x""#
    );
    assert_eq!(
        normalize_event_quotes(r#" onChange="f("a", "b")""#, &cache),
        r#" onChange="f('a', 'b')""#
    );
}

#[test]
fn test_other_attributes_keep_their_quotes() {
    let cache = PatternCache::new();
    assert_eq!(
        normalize_event_quotes(r#" title="a" class="b""#, &cache),
        r#" title="a" class="b""#
    );
}

#[test]
fn test_adjacent_handlers_are_both_normalized() {
    let cache = PatternCache::new();
    assert_eq!(
        normalize_event_quotes(r#" onclick="run("y")" onchange="pick("z")""#, &cache),
        r#" onclick="run('y')" onchange="pick('z')""#
    );
}

#[test]
fn test_data_attributes_named_like_handlers_keep_their_quotes() {
    let cache = PatternCache::new();
    assert_eq!(
        normalize_event_quotes(
            r#" data-onclick="go("x")" onclick="run("y")">"#,
            &cache
        ),
        r#" data-onclick="go("x")" onclick="run('y')">"#
    );
}

#[test]
fn test_event_quotes_in_resolve() {
    assert_eq!(
        render(&BUTTON_LIKE, r#"['onclick' => 'confirm("Sure?")']"#),
        r#" onclick="confirm('Sure?')""#
    );
}

// =============================================================================
// Pattern cache
// =============================================================================

#[test]
fn test_cache_compiles_each_pattern_once() {
    let cache = PatternCache::new();
    assert!(cache.is_empty());
    let first = cache.get(r"\d+").unwrap();
    let second = cache.get(r"\d+").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_invalid_pattern_is_none() {
    let cache = PatternCache::new();
    assert!(cache.get("(").is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_cache_shared_across_threads() {
    let cache = PatternCache::new();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for pattern in ["a+", "b+", "c+"] {
                    assert!(cache.get(pattern).is_some());
                }
            });
        }
    });
    assert_eq!(cache.len(), 3);
}

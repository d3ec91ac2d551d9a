use std::fmt;

use regex::Captures;

use crate::attributes::dynamic::{extract_dynamic_pairs, render_dynamic_pairs};
use crate::attributes::events::normalize_event_quotes;
use crate::attributes::schema::{AttributeRule, AttributeSchema, Extraction};
use crate::cache::PatternCache;
use crate::expression::{
    interpolate, is_null_like, is_number, is_quoted_literal, normalize_attribute_value,
    strip_quotes,
};
use crate::parser::{split_key_value, split_top_level, take_expression, unwrap_array};

const NUMBER: &str = r"(-?\d+(?:\.\d+)?)";
const QUOTED: &str = r#"(?:'([^']+)'|"([^"]+)")"#;

/// An attribute suffix such as ` class="btn" disabled`.
///
/// Every attribute carries its own leading space, so the suffix can be
/// appended directly after a tag's fixed attributes. Empty when nothing
/// matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedAttributes(String);

impl RenderedAttributes {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderedAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

enum Attribute {
    Pair(String),
    Flag,
}

/// Runs every pass the schema enables against `options`.
///
/// `options` is the raw options argument, with or without its enclosing
/// brackets.
pub fn resolve(schema: &AttributeSchema, options: &str, cache: &PatternCache) -> RenderedAttributes {
    let mut rendered = String::new();
    if schema.data_attributes {
        rendered.push_str(&data_attributes(options));
    }
    rendered.push_str(resolve_schema(schema, options, cache).as_str());
    if schema.dynamic_attributes {
        rendered.push_str(&render_dynamic_pairs(&extract_dynamic_pairs(options, cache)));
    }
    if schema.event_quotes {
        rendered = normalize_event_quotes(&rendered, cache);
    }
    RenderedAttributes(rendered)
}

/// Resolves only the schema's own attributes, in schema order.
///
/// Only top-level entries with a literal key are read, so an entry whose key
/// is computed (`$open ? 'a' : 'disabled' => ...`) never sets a schema
/// attribute. Attributes whose key is absent, or whose value does not have
/// the shape the rule extracts, are omitted.
pub fn resolve_schema(
    schema: &AttributeSchema,
    options: &str,
    cache: &PatternCache,
) -> RenderedAttributes {
    let options = literal_entries(options);
    let mut rendered = String::new();
    for rule in schema.rules {
        match extract(rule, &options, cache) {
            Some(Attribute::Pair(value)) => {
                rendered.push_str(&format!(" {}=\"{value}\"", rule.name));
            }
            Some(Attribute::Flag) => {
                rendered.push(' ');
                rendered.push_str(rule.name);
            }
            None => {}
        }
    }
    RenderedAttributes(rendered)
}

/// Renders every top-level `'data-*' => value` entry in source order.
///
/// Literal values are copied through, any other value is interpolated.
pub fn data_attributes(options: &str) -> String {
    split_top_level(unwrap_array(options))
        .iter()
        .filter_map(split_key_value)
        .filter(|(key, _)| is_quoted_literal(key) && strip_quotes(key).starts_with("data-"))
        .map(|(key, value)| {
            let value = if is_quoted_literal(value) {
                strip_quotes(value).to_owned()
            } else {
                interpolate(value)
            };
            format!(" {}=\"{value}\"", strip_quotes(key))
        })
        .collect()
}

/// The top-level `'key' => value` entries of an options array, rejoined.
fn literal_entries(options: &str) -> String {
    split_top_level(unwrap_array(options))
        .iter()
        .filter(|entry| split_key_value(entry).is_some_and(|(key, _)| is_quoted_literal(key)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn key_pattern(rule: &AttributeRule) -> String {
    let keys = rule
        .keys()
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    format!(r#"['"](?:{keys})['"]\s*=>\s*"#)
}

fn extract(rule: &AttributeRule, options: &str, cache: &PatternCache) -> Option<Attribute> {
    let key = key_pattern(rule);
    match rule.extraction {
        Extraction::Quoted => capture(cache, &format!("{key}{QUOTED}"), options)
            .map(|value| Attribute::Pair(normalize_attribute_value(value))),
        Extraction::Numeric => capture(cache, &format!("{key}{NUMBER}"), options)
            .map(|value| Attribute::Pair(value.to_owned())),
        Extraction::QuotedOrNumeric => {
            capture(cache, &format!(r#"{key}(?:'([^']+)'|"([^"]+)"|{NUMBER})"#), options)
                .map(|value| Attribute::Pair(normalize_attribute_value(value)))
        }
        Extraction::Expression => {
            let found = cache.get(&key)?.find(options)?;
            let raw = take_expression(&options[found.end()..]);
            if is_null_like(raw) {
                return None;
            }
            let value = if is_quoted_literal(raw) || is_number(raw) {
                normalize_attribute_value(raw)
            } else {
                interpolate(raw)
            };
            Some(Attribute::Pair(value))
        }
        Extraction::Flag => {
            let pattern = format!(r#"{key}(?:'([^']*)'|"([^"]*)"|(true|false)\b)"#);
            let re = cache.get(&pattern)?;
            let caps = re.captures(options)?;
            if let Some(boolean) = caps.get(3) {
                return (boolean.as_str() == "true").then_some(Attribute::Flag);
            }
            let value = first_group(&caps)?;
            if value.is_empty() || value == rule.name {
                Some(Attribute::Flag)
            } else {
                Some(Attribute::Pair(value.to_owned()))
            }
        }
    }
}

fn capture<'t>(cache: &PatternCache, pattern: &str, options: &'t str) -> Option<&'t str> {
    let re = cache.get(pattern)?;
    let caps = re.captures(options)?;
    first_group(&caps)
}

/// The first capture group that took part in the match.
fn first_group<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.iter().skip(1).flatten().next().map(|m| m.as_str())
}

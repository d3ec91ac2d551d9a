use crate::cache::PatternCache;
use crate::parser::{split_key_value, split_top_level, unwrap_array};

/// Key shapes recognized as conditional attribute names. Each is anchored
/// at the start of an entry and must reach the entry's `=>`.
const CONDITIONAL_KEYS: &[&str] = &[
    // $flag ? 'a' : 'b' =>, optionally $obj->method(...) ? ...
    r"^\$\w+(?:\[[^\]]*\])*(?:->[a-zA-Z_]\w*\([^)]*\))?\s*\?\s*'[^']*'\s*:\s*'[^']*'\s*=>",
    // (condition) ? 'a' : 'b' =>
    r"(?s)^\(.*?\)\s*\?\s*'[^']*'\s*:\s*'[^']*'\s*=>",
    // $flag ? (nested ternary) : 'b' =>
    r"^\$\w+(?:\[[^\]]*\])*\s*\?\s*\([^)]+\)\s*:\s*'[^']*'\s*=>",
    // $a && $b->c() ? 'a' : 'b' =>
    r"^\$\w+(?:\[[^\]]*\])*(?:->[a-zA-Z_]\w*\([^)]*\))?(?:\s*&&\s*\$\w+(?:\[[^\]]*\])*(?:->[a-zA-Z_]\w*\([^)]*\))?)*\s*\?\s*'[^']*'\s*:\s*'[^']*'\s*=>",
    // $a || $b->c() ? 'a' : 'b' =>
    r"^\$\w+(?:\[[^\]]*\])*(?:->[a-zA-Z_]\w*\([^)]*\))?(?:\s*\|\|\s*\$\w+(?:\[[^\]]*\])*(?:->[a-zA-Z_]\w*\([^)]*\))?)*\s*\?\s*'[^']*'\s*:\s*'[^']*'\s*=>",
];

/// An options entry whose attribute name is computed at render time, e.g.
/// `$locked ? 'disabled' : 'data-open' => true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicAttributePair {
    pub key: String,
    pub value: String,
}

/// Finds the conditional-key entries of an options array, in source order.
///
/// Entries with a literal key are skipped; they belong to the schema pass.
pub fn extract_dynamic_pairs(options: &str, cache: &PatternCache) -> Vec<DynamicAttributePair> {
    split_top_level(unwrap_array(options))
        .iter()
        .filter(|entry| is_conditional_key(entry, cache))
        .filter_map(split_key_value)
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .map(|(key, value)| {
            log::trace!("dynamic attribute `{key}` => `{value}`");
            DynamicAttributePair {
                key: key.to_owned(),
                value: value.to_owned(),
            }
        })
        .collect()
}

/// Renders pairs as ` {{ key }}="{{ value }}"`. The bare keywords `null`,
/// `true` and `false` are written without interpolation.
pub fn render_dynamic_pairs(pairs: &[DynamicAttributePair]) -> String {
    pairs
        .iter()
        .map(|pair| match pair.value.as_str() {
            "null" | "true" | "false" => format!(" {{{{ {} }}}}=\"{}\"", pair.key, pair.value),
            _ => format!(" {{{{ {} }}}}=\"{{{{ {} }}}}\"", pair.key, pair.value),
        })
        .collect()
}

fn is_conditional_key(entry: &str, cache: &PatternCache) -> bool {
    CONDITIONAL_KEYS
        .iter()
        .filter_map(|pattern| cache.get(pattern))
        .any(|re| re.is_match(entry))
}

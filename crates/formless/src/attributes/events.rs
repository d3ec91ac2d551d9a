use std::borrow::Cow;

use regex::Regex;

use crate::cache::PatternCache;

/// Handler attribute, its code, and the closing quote with the character
/// after it. The name must start the text or follow whitespace, so
/// `data-onclick` is not a handler.
const EVENT_VALUE: &str = r#"(?i)(?:^|\s)on(?:click|change)="(.*?)("(?:\s|>|$))"#;
const DOUBLE_QUOTED: &str = r#""([^"\\]+)""#;

/// Rewrites `"text"` to `'text'` inside `onclick` and `onchange` values.
///
/// Handler code copied from an options array often uses double quotes,
/// which would end the attribute early once written as `onclick="..."`.
/// Attribute names match case-insensitively.
pub fn normalize_event_quotes(html: &str, cache: &PatternCache) -> String {
    let (Some(event), Some(quoted)) = (cache.get(EVENT_VALUE), cache.get(DOUBLE_QUOTED)) else {
        return html.to_owned();
    };

    let mut normalized = String::with_capacity(html.len());
    let mut copied = 0;
    let mut search = 0;
    while let Some(caps) = event.captures_at(html, search) {
        let (Some(code), Some(close)) = (caps.get(1), caps.get(2)) else {
            break;
        };
        normalized.push_str(&html[copied..code.start()]);
        normalized.push_str(&single_quoted(code.as_str(), &quoted));
        // Resume right after the closing quote: the whitespace that follows
        // it may precede the next handler.
        copied = close.start();
        search = close.start() + 1;
    }
    normalized.push_str(&html[copied..]);
    normalized
}

fn single_quoted<'t>(code: &'t str, quoted: &Regex) -> Cow<'t, str> {
    let mut code = Cow::Borrowed(code);
    while quoted.is_match(&code) {
        code = Cow::Owned(quoted.replace_all(&code, "'$1'").into_owned());
    }
    code
}

use crate::parser::error::MalformedArgumentList;
use crate::parser::scan::{Scanner, is_closer, is_opener};

/// The top-level arguments of one helper call, in source order.
///
/// Position is significant: construct rules read the field name, value,
/// checked state and options argument by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    args: Vec<String>,
    malformed: Option<MalformedArgumentList>,
}

impl ArgumentList {
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Returns the trimmed argument at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// The scanner state left open at end of input, if any.
    pub fn malformed(&self) -> Option<&MalformedArgumentList> {
        self.malformed.as_ref()
    }
}

/// Splits `text` on commas that sit outside every bracket pair and string.
///
/// Each argument is trimmed. A trailing remainder that is only whitespace is
/// dropped, so `"a, b,"` yields two arguments and `""` yields none.
/// Unterminated strings and unbalanced brackets are treated as implicitly
/// closed at end of input; the best-effort split is returned and the problem
/// is logged and recorded on the list.
pub fn split_top_level(text: &str) -> ArgumentList {
    let mut args = Vec::new();
    let mut scanner = Scanner::default();
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        if scanner.feed(ch) && ch == ',' && scanner.depth() == 0 {
            args.push(text[start..i].trim().to_owned());
            start = i + 1;
        }
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        args.push(rest.to_owned());
    }

    let malformed = scanner.finish();
    if let Some(problem) = &malformed {
        log::warn!("{problem} in argument list `{}`", text.trim());
    }

    ArgumentList { args, malformed }
}

/// Returns the prefix of `text` that ends at the closer matching its first
/// opener, e.g. `"[1, [2]], $x"` gives `"[1, [2]]"`.
///
/// Returns `None` when no opener is found before a stray closer or when the
/// opener is never closed.
pub fn take_balanced(text: &str) -> Option<&str> {
    let mut scanner = Scanner::default();
    let mut opened = false;

    for (i, ch) in text.char_indices() {
        if !scanner.feed(ch) {
            continue;
        }
        if is_opener(ch) {
            opened = true;
        } else if is_closer(ch) {
            if !opened {
                return None;
            }
            if scanner.depth() == 0 {
                return Some(&text[..i + ch.len_utf8()]);
            }
        }
    }
    None
}

/// Returns the expression at the start of `text`, ending before the next
/// top-level comma or before a closer that belongs to an enclosing bracket.
pub fn take_expression(text: &str) -> &str {
    let mut scanner = Scanner::default();
    for (i, ch) in text.char_indices() {
        if scanner.feed(ch) && ((ch == ',' && scanner.depth() == 0) || scanner.depth() < 0) {
            return text[..i].trim();
        }
    }
    text.trim()
}

/// Splits one options entry at its first top-level `=>`.
///
/// Both halves are trimmed. Returns `None` for positional entries.
pub fn split_key_value(entry: &str) -> Option<(&str, &str)> {
    let mut scanner = Scanner::default();
    let mut chars = entry.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        let code = scanner.feed(ch);
        if code && ch == '=' && scanner.depth() == 0 && matches!(chars.peek(), Some((_, '>'))) {
            return Some((entry[..i].trim(), entry[i + 2..].trim()));
        }
    }
    None
}

/// Strips one enclosing `[ ... ]` pair when it spans the whole text.
///
/// `"['a' => 1]"` becomes `"'a' => 1"`, while `"[1] + [2]"` is returned
/// trimmed but otherwise unchanged.
pub fn unwrap_array(text: &str) -> &str {
    let trimmed = text.trim();
    let spans_whole = trimmed.starts_with('[')
        && take_balanced(trimmed).is_some_and(|array| array.len() == trimmed.len());
    if spans_whole {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

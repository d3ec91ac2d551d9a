use crate::parser::error::MalformedArgumentList;

/// Character-at-a-time state shared by every balanced scan.
///
/// A single combined depth counter covers `()`, `[]` and `{}`. Escapes are
/// only honored inside strings, and a quote of the other kind inside a
/// string is ordinary text.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Scanner {
    depth: isize,
    quote: Option<char>,
    escaped: bool,
}

impl Scanner {
    /// Advances over `ch`. Returns `true` when `ch` is code, i.e. neither
    /// part of a string literal nor one of its quote characters.
    pub(crate) fn feed(&mut self, ch: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        if let Some(quote) = self.quote {
            if ch == '\\' {
                self.escaped = true;
            } else if ch == quote {
                self.quote = None;
            }
            return false;
        }
        match ch {
            '\'' | '"' => {
                self.quote = Some(ch);
                false
            }
            '(' | '[' | '{' => {
                self.depth += 1;
                true
            }
            ')' | ']' | '}' => {
                self.depth -= 1;
                true
            }
            _ => true,
        }
    }

    /// Bracket depth after the last character fed.
    pub(crate) fn depth(&self) -> isize {
        self.depth
    }

    /// Whether the scanner is currently inside a string literal.
    pub(crate) fn in_string(&self) -> bool {
        self.quote.is_some()
    }

    /// Describes whatever state is still open at end of input.
    pub(crate) fn finish(&self) -> Option<MalformedArgumentList> {
        if let Some(quote) = self.quote {
            Some(MalformedArgumentList::UnterminatedString { quote })
        } else if self.depth != 0 {
            Some(MalformedArgumentList::UnbalancedDelimiters { depth: self.depth })
        } else {
            None
        }
    }
}

pub(crate) fn is_opener(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

pub(crate) fn is_closer(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

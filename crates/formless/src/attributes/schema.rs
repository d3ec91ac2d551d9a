use std::slice;

/// How an attribute's value is located after its `'key' =>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// A non-empty string literal.
    Quoted,
    /// A bare number, e.g. `'cols' => 40`.
    Numeric,
    /// Either a string literal or a bare number, e.g. `'rows' => '5'` and
    /// `'rows' => 5`.
    QuotedOrNumeric,
    /// Any balanced expression up to the next entry. Literals are unquoted,
    /// everything else is interpolated.
    Expression,
    /// A boolean attribute. A literal equal to the attribute name, an empty
    /// literal or `true` renders a bare flag; `false` omits the attribute.
    Flag,
}

/// One attribute a construct reads from its options array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRule {
    /// Attribute name written to the output.
    pub name: &'static str,
    /// Option keys accepted for this attribute. Empty means just `name`.
    pub keys: &'static [&'static str],
    pub extraction: Extraction,
}

impl AttributeRule {
    pub const fn new(name: &'static str, extraction: Extraction) -> Self {
        Self {
            name,
            keys: &[],
            extraction,
        }
    }

    /// Accept several spellings of the option key, e.g. `onChange` and
    /// `onchange`.
    pub const fn with_keys(self, keys: &'static [&'static str]) -> Self {
        Self { keys, ..self }
    }

    /// The option keys this rule matches.
    pub fn keys(&self) -> &[&'static str] {
        if self.keys.is_empty() {
            slice::from_ref(&self.name)
        } else {
            self.keys
        }
    }
}

/// The ordered attribute table of one construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub rules: &'static [AttributeRule],
    /// Pass literal `data-*` keys through, ahead of the schema attributes.
    pub data_attributes: bool,
    /// Append entries whose key is a conditional expression.
    pub dynamic_attributes: bool,
    /// Rewrite double-quoted strings inside `onclick`/`onchange` values.
    pub event_quotes: bool,
}

impl AttributeSchema {
    pub const fn new(rules: &'static [AttributeRule]) -> Self {
        Self {
            rules,
            data_attributes: false,
            dynamic_attributes: false,
            event_quotes: false,
        }
    }

    pub const fn with_data_attributes(self) -> Self {
        Self { data_attributes: true, ..self }
    }

    pub const fn with_dynamic_attributes(self) -> Self {
        Self { dynamic_attributes: true, ..self }
    }

    pub const fn with_event_quotes(self) -> Self {
        Self { event_quotes: true, ..self }
    }
}

//! Shared construct tables used by both the converter and the CLI.
//!
//! This crate centralizes helper method name/alias resolution and the fixed
//! rewrite order so that the dispatcher and the diagnostics never drift.

use std::fmt;

/// Canonical helper constructs, one per `Form::method(...)` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Construct {
    Open,
    Close,
    Hidden,
    Textarea,
    Label,
    Text,
    Input,
    Number,
    Select,
    Checkbox,
    Radio,
    Email,
    Password,
    Url,
    Tel,
    Search,
    Date,
    Time,
    Datetime,
    Range,
    Color,
    File,
    Submit,
    Button,
}

/// The order in which constructs are rewritten within one document.
///
/// Later constructs never see text produced by earlier ones because every
/// rewrite removes the facade prefix it matched.
pub const DISPATCH_ORDER: &[Construct] = &[
    Construct::Open,
    Construct::Close,
    Construct::Hidden,
    Construct::Textarea,
    Construct::Label,
    Construct::Text,
    Construct::Input,
    Construct::Number,
    Construct::Select,
    Construct::Checkbox,
    Construct::Radio,
    Construct::Email,
    Construct::Password,
    Construct::Url,
    Construct::Tel,
    Construct::Search,
    Construct::Date,
    Construct::Time,
    Construct::Datetime,
    Construct::Range,
    Construct::Color,
    Construct::File,
    Construct::Submit,
    Construct::Button,
];

impl Construct {
    /// The canonical helper method name (`Form::<name>(...)`).
    pub fn method_name(self) -> &'static str {
        match self {
            Construct::Open => "open",
            Construct::Close => "close",
            Construct::Hidden => "hidden",
            Construct::Textarea => "textarea",
            Construct::Label => "label",
            Construct::Text => "text",
            Construct::Input => "input",
            Construct::Number => "number",
            Construct::Select => "select",
            Construct::Checkbox => "checkbox",
            Construct::Radio => "radio",
            Construct::Email => "email",
            Construct::Password => "password",
            Construct::Url => "url",
            Construct::Tel => "tel",
            Construct::Search => "search",
            Construct::Date => "date",
            Construct::Time => "time",
            Construct::Datetime => "datetime",
            Construct::Range => "range",
            Construct::Color => "color",
            Construct::File => "file",
            Construct::Submit => "submit",
            Construct::Button => "button",
        }
    }

    /// Every method name that resolves to this construct, canonical first.
    pub fn method_names(self) -> Vec<&'static str> {
        ACCEPTED_NAMES
            .iter()
            .copied()
            .filter(|name| canonicalize_alias(name) == self.method_name())
            .collect()
    }

    /// The `type` attribute emitted for constructs rendered as `<input>`.
    ///
    /// Returns `None` for constructs that are not a plain input or whose type
    /// comes from an argument (`input`).
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Construct::Hidden => Some("hidden"),
            Construct::Text => Some("text"),
            Construct::Number => Some("number"),
            Construct::Checkbox => Some("checkbox"),
            Construct::Radio => Some("radio"),
            Construct::Email => Some("email"),
            Construct::Password => Some("password"),
            Construct::Url => Some("url"),
            Construct::Tel => Some("tel"),
            Construct::Search => Some("search"),
            Construct::Date => Some("date"),
            Construct::Time => Some("time"),
            Construct::Datetime => Some("datetime-local"),
            Construct::Range => Some("range"),
            Construct::Color => Some("color"),
            Construct::File => Some("file"),
            Construct::Open
            | Construct::Close
            | Construct::Textarea
            | Construct::Label
            | Construct::Input
            | Construct::Select
            | Construct::Submit
            | Construct::Button => None,
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Resolve a helper method name to its construct.
///
/// Resolution is exact (method names are case-sensitive in the host
/// language's call syntax as written in templates), with aliases mapped to
/// their canonical construct.
pub fn resolve_construct(method: &str) -> Option<Construct> {
    let canonical = canonicalize_alias(method);
    DISPATCH_ORDER
        .iter()
        .copied()
        .find(|construct| construct.method_name() == canonical)
}

/// Accepted helper method names, including aliases.
///
/// Used for diagnostics about unsupported calls.
pub fn accepted_method_names() -> &'static [&'static str] {
    ACCEPTED_NAMES
}

fn canonicalize_alias(name: &str) -> &str {
    match name {
        "datetimeLocal" => "datetime",
        "telephone" => "tel",
        other => other,
    }
}

const ACCEPTED_NAMES: &[&str] = &[
    "open",
    "close",
    "hidden",
    "textarea",
    "label",
    "text",
    "input",
    "number",
    "select",
    "checkbox",
    "radio",
    "email",
    "password",
    "url",
    "tel",
    "telephone",
    "search",
    "date",
    "time",
    "datetime",
    "datetimeLocal",
    "range",
    "color",
    "file",
    "submit",
    "button",
];

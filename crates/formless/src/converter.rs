//! Whole-document rewriting.

use std::collections::BTreeMap;

use bon::Builder;
use formless_constructs::{Construct, DISPATCH_ORDER};
use regex::Captures;

use crate::cache::PatternCache;
use crate::parser::split_top_level;
use crate::rules::{self, RuleContext};

/// Facade name used when none is configured.
pub const DEFAULT_FACADE: &str = "Form";

/// The two Blade output delimiters a helper call may sit in.
#[derive(Debug, Clone, Copy)]
enum Delimiter {
    /// `{!! ... !!}`
    Raw,
    /// `{{ ... }}`
    Escaped,
}

impl Delimiter {
    const ALL: [Self; 2] = [Self::Raw, Self::Escaped];

    fn call_pattern(self, facade: &str, methods: &str) -> String {
        let (open, close) = match self {
            Self::Raw => (r"\{!!", r"!!\}"),
            Self::Escaped => (r"\{\{", r"\}\}"),
        };
        format!(r"(?s){open}\s*{facade}::(?:{methods})\(\s*(.*?)\s*\)\s*{close}")
    }
}

/// The result of converting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    /// Number of calls rewritten, per construct. Constructs with no rewrite
    /// are absent.
    pub rewrites: BTreeMap<Construct, usize>,
}

impl Conversion {
    pub fn total_rewrites(&self) -> usize {
        self.rewrites.values().sum()
    }
}

/// Rewrites every recognized helper call in a document into markup.
///
/// Constructs are processed in [`DISPATCH_ORDER`], raw delimiters before
/// escaped ones. A `Converter` holds the compiled pattern cache and can be
/// shared between threads converting different documents.
///
/// # Example
///
/// ```
/// use formless::Converter;
///
/// let converter = Converter::new();
/// let html = converter.convert("{!! Form::text('email') !!}");
/// assert_eq!(html, r#"<input type="text" name="email" value="">"#);
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Converter {
    /// Name of the helper facade, `Form` in `Form::text(...)`.
    #[builder(default = DEFAULT_FACADE.to_owned())]
    facade: String,

    #[builder(skip)]
    cache: PatternCache,
}

impl Default for Converter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Converter {
    /// A converter for the `Form` facade.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facade(&self) -> &str {
        &self.facade
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    pub fn convert(&self, text: &str) -> String {
        self.convert_with_stats(text).output
    }

    /// Converts `text`, counting the rewrites made for each construct.
    ///
    /// Calls a rule declines to convert are left exactly as written.
    pub fn convert_with_stats(&self, text: &str) -> Conversion {
        let ctx = RuleContext::new(&self.cache);
        let facade = regex::escape(&self.facade);
        let mut output = text.to_owned();
        let mut rewrites = BTreeMap::new();

        for &construct in DISPATCH_ORDER {
            let methods = construct
                .method_names()
                .iter()
                .map(|name| regex::escape(name))
                .collect::<Vec<_>>()
                .join("|");

            for delimiter in Delimiter::ALL {
                let Some(re) = self.cache.get(&delimiter.call_pattern(&facade, &methods)) else {
                    continue;
                };
                let mut count = 0;
                let replaced = re.replace_all(&output, |caps: &Captures<'_>| {
                    let args = split_top_level(&caps[1]);
                    if let Some(markup) = rules::render(construct, &args, &ctx) {
                        log::debug!("rewrote {}::{construct} call", self.facade);
                        count += 1;
                        markup
                    } else {
                        log::debug!("left {}::{construct} call unchanged: {}", self.facade, &caps[0]);
                        caps[0].to_owned()
                    }
                });
                if count > 0 {
                    output = replaced.into_owned();
                    *rewrites.entry(construct).or_insert(0) += count;
                }
            }
        }

        Conversion { output, rewrites }
    }
}

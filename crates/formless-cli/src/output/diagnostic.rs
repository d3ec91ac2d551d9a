//! Miette diagnostic for facade calls the converter left in place.
//!
//! Some fields are only read by the miette derive, which rustc cannot see,
//! hence the `unused_assignments` exception.
#![allow(unused_assignments)]

use formless::RemainingCall;
use formless_constructs::accepted_method_names;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A warning pointing at one facade call that is still in a template.
#[derive(Debug, Error, Diagnostic)]
#[error("{facade}::{method} was not converted")]
#[diagnostic(code(formless::remaining), severity(Warning))]
pub struct RemainingCallDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{reason}")]
    span: SourceSpan,

    facade: String,

    method: String,

    reason: &'static str,

    #[help]
    help: Option<String>,
}

impl RemainingCallDiagnostic {
    /// Create a diagnostic for `call`, whose offset points into `source`.
    pub fn new(call: &RemainingCall, source: &str, facade: &str) -> Self {
        let (reason, help) = match call.construct {
            Some(construct) => (
                "arguments not recognized",
                Some(format!(
                    "{facade}::{construct} is supported, but this call's arguments have a \
                     shape that is not rewritten; convert it by hand"
                )),
            ),
            None if call.method.is_empty() => ("not a helper call", None),
            None => (
                "unsupported helper",
                Some(format!(
                    "supported helpers are: {}",
                    accepted_method_names().join(", ")
                )),
            ),
        };

        // Clamp to the content so miette never reads out of bounds.
        let offset = call.offset.min(source.len());
        let length = (facade.len() + 2 + call.method.len()).min(source.len() - offset);

        RemainingCallDiagnostic {
            src: NamedSource::new(call.path.display().to_string(), source.to_owned()),
            span: (offset, length).into(),
            facade: facade.to_owned(),
            method: call.method.clone(),
            reason,
            help,
        }
    }
}

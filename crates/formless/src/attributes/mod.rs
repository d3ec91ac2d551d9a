//! Attribute resolution for a helper's options array.
//!
//! Each construct declares an [`AttributeSchema`]: the attributes it reads,
//! in the order they are written, plus which extra passes it runs. Resolving
//! a schema against the raw options text yields [`RenderedAttributes`], a
//! suffix such as ` class="btn" id="save" disabled` ready to be placed after
//! a tag's fixed attributes.
//!
//! Output order is always data-* passthrough, then schema order, then
//! dynamic pairs. The order of keys in the options array never matters.

mod dynamic;
mod events;
mod resolve;
mod schema;

pub use dynamic::{DynamicAttributePair, extract_dynamic_pairs, render_dynamic_pairs};
pub use events::normalize_event_quotes;
pub use resolve::{RenderedAttributes, data_attributes, resolve, resolve_schema};
pub use schema::{AttributeRule, AttributeSchema, Extraction};

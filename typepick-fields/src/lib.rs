//! Content type selector field
//!
//! `typepick-fields` renders a single configurable selection field over a
//! registry of selectable items and turns submitted form data back into a
//! stored value. It knows nothing about where values are persisted; hosts
//! hand it the value they loaded and store whatever `parse` returns.
//!
//! # Architecture
//!
//! - **Normalizer**: `normalize` coerces absent, scalar, comma-joined or list
//!   values into a canonical id list
//! - **Renderer**: `render` filters the registry by the allow-list and marks
//!   selected items per variant; `render_html` turns that into markup
//! - **Parser**: `parse` applies the variant's cardinality to a submission,
//!   `decode_submission` pulls it out of a urlencoded body
//! - **Registry seam**: `ItemRegistry` is implemented by the host;
//!   `StaticRegistry` covers fixed lists and YAML files

pub mod error;
pub mod field;
pub mod form;
pub mod markup;
pub mod normalize;
pub mod parse;
pub mod registry;
pub mod render;
pub mod types;

pub use error::{FieldsError, Result};
pub use field::{FieldSettings, FieldTypeInfo, SelectorField, POST_TYPE_SELECTOR};
pub use form::decode_submission;
pub use markup::render_html;
pub use normalize::normalize;
pub use parse::parse;
pub use registry::{filter_items, ItemRegistry, StaticRegistry};
pub use render::{build_widget, render, Widget, WidgetOption, MULTI_SUFFIX};
pub use types::{AllowList, CanonicalList, Item, StoredValue, Variant};

//! The selector field: settings plus an item registry.
//!
//! `SelectorField` holds read-only configuration and a registry handle. Hosts
//! call `render` with the value they loaded and `parse` with what the form
//! posted; neither call mutates the field.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::normalize;
use crate::parse::parse;
use crate::registry::ItemRegistry;
use crate::render::{build_widget, Widget};
use crate::types::{AllowList, CanonicalList, StoredValue, Variant};

/// Static description of the field type, for hosts that list field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldTypeInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
}

pub const POST_TYPE_SELECTOR: FieldTypeInfo = FieldTypeInfo {
    name: "post_type_selector",
    label: "Post Type Selector",
    category: "relational",
};

/// Per-field configuration chosen by an administrator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Raw allow-list; empty means every registry item is offered.
    #[serde(alias = "post_type")]
    pub allow_list: StoredValue,
    #[serde(alias = "select_type")]
    pub variant: Variant,
    /// CSS class placed on the rendered inputs.
    pub class: String,
}

impl FieldSettings {
    pub fn new(allow_list: impl Into<StoredValue>, variant: Variant) -> Self {
        Self {
            allow_list: allow_list.into(),
            variant,
            class: String::new(),
        }
    }

    pub fn effective_allow_list(&self) -> AllowList {
        AllowList::from_config(&self.allow_list)
    }
}

/// A configured selector bound to an item registry.
pub struct SelectorField<R: ItemRegistry> {
    settings: FieldSettings,
    registry: R,
}

impl<R: ItemRegistry> SelectorField<R> {
    pub fn new(settings: FieldSettings, registry: R) -> Self {
        Self { settings, registry }
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn variant(&self) -> Variant {
        self.settings.variant
    }

    /// Describe the widget for `stored` under this field's settings.
    pub fn render(&self, stored: &StoredValue, field_id: &str, field_name: &str) -> Widget {
        let allow = self.settings.effective_allow_list();
        let items = self.registry.list(allow.ids());
        let refs: Vec<_> = items.iter().collect();
        debug!(
            variant = %self.settings.variant,
            options = refs.len(),
            field = field_name,
            "rendering selector"
        );
        build_widget(&refs, self.settings.variant, stored, field_id, field_name)
            .with_class(self.settings.class.clone())
    }

    /// The value to store for a submission.
    pub fn parse(&self, submitted: StoredValue) -> StoredValue {
        parse(self.settings.variant, submitted)
    }

    pub fn normalize(&self, input: &StoredValue) -> CanonicalList {
        normalize(input)
    }
}

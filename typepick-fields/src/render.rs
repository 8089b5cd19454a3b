//! Selection rendering: filter the registry, mark selected items, describe the widget.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::registry::filter_items;
use crate::types::{AllowList, Item, StoredValue, Variant};

/// Suffix that makes the host form layer collect an input as a list.
pub const MULTI_SUFFIX: &str = "[]";

/// One selectable entry in a rendered widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetOption {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// Renderable description of a selector, keyed by its variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    pub variant: Variant,
    pub field_id: String,
    pub field_name: String,
    /// Form input name; carries the multi suffix for checkbox groups.
    pub input_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,
    pub options: Vec<WidgetOption>,
}

impl Widget {
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Number of form inputs the widget produces.
    pub fn input_count(&self) -> usize {
        match self.variant {
            Variant::SingleSelect => 1,
            Variant::RadioGroup | Variant::CheckboxGroup => self.options.len(),
        }
    }

    /// Item id to selected flag, in registry order.
    pub fn selection_state(&self) -> IndexMap<String, bool> {
        self.options
            .iter()
            .map(|o| (o.id.clone(), o.selected))
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id.as_str())
            .collect()
    }
}

/// Render a selector over `registry`.
///
/// `allow_list` is the raw configured value; when blank (including `0` and
/// `"0"`) every registry item is offered. Unknown ids in it simply match nothing.
pub fn render(
    registry: &[Item],
    allow_list: &StoredValue,
    variant: Variant,
    stored: &StoredValue,
    field_id: &str,
    field_name: &str,
) -> Widget {
    let allow = AllowList::from_config(allow_list);
    let items = filter_items(registry, allow.ids());
    trace!(
        registry = registry.len(),
        offered = items.len(),
        "filtered registry by allow-list"
    );
    build_widget(&items, variant, stored, field_id, field_name)
}

/// Build a widget from items that have already been filtered.
pub fn build_widget(
    items: &[&Item],
    variant: Variant,
    stored: &StoredValue,
    field_id: &str,
    field_name: &str,
) -> Widget {
    let selected = selection_flags(items, variant, stored);
    let options = items
        .iter()
        .zip(selected)
        .map(|(item, selected)| WidgetOption {
            id: item.id.clone(),
            label: item.display_name.clone(),
            selected,
        })
        .collect();

    let input_name = if variant.is_multiple() {
        format!("{field_name}{MULTI_SUFFIX}")
    } else {
        field_name.to_string()
    };

    Widget {
        variant,
        field_id: field_id.to_string(),
        field_name: field_name.to_string(),
        input_name,
        class: String::new(),
        options,
    }
}

/// Per-item selected flags, parallel to `items`.
///
/// Single-cardinality variants compare the raw stored scalar against each id
/// and mark only the first match. Checkbox groups require the stored value to
/// already be a list; it is not normalized here.
fn selection_flags(items: &[&Item], variant: Variant, stored: &StoredValue) -> Vec<bool> {
    match variant {
        Variant::SingleSelect | Variant::RadioGroup => {
            let mut flags = vec![false; items.len()];
            if let Some(key) = stored.scalar_key() {
                if let Some(pos) = items.iter().position(|item| item.id == *key) {
                    flags[pos] = true;
                }
            }
            flags
        }
        Variant::CheckboxGroup => {
            if stored.is_blank() {
                return vec![false; items.len()];
            }
            let Some(values) = stored.as_list() else {
                debug!(?stored, "checkbox value is not a list, nothing selected");
                return vec![false; items.len()];
            };
            let checked: HashSet<&str> = values.iter().map(String::as_str).collect();
            items
                .iter()
                .map(|item| checked.contains(item.id.as_str()))
                .collect()
        }
    }
}

//! Core value types for the selector field.
//!
//! `StoredValue` models whatever the form boundary hands us: nothing, a bare
//! scalar, a comma-joined string or a list. Everything serializes through
//! `serde_json::Value` so the same shapes load from JSON, YAML or figment.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::error::FieldsError;

/// Ordered list of string ids. Duplicates allowed; never absent.
pub type CanonicalList = Vec<String>;

/// A selectable entry from the item registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub display_name: String,
    #[serde(default = "default_public")]
    pub public: bool,
}

fn default_public() -> bool {
    true
}

impl Item {
    /// A public item.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            public: true,
        }
    }

    /// Mark the item as hidden from public listings.
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }
}

/// How the selector is presented, fixed per field configuration.
///
/// Stored settings use the numeric codes `0`, `1` and `2`; names are accepted
/// too, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "VariantRepr")]
pub enum Variant {
    SingleSelect,
    RadioGroup,
    #[default]
    CheckboxGroup,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::SingleSelect,
        Variant::RadioGroup,
        Variant::CheckboxGroup,
    ];

    /// Setting code used by stored field configuration.
    pub fn code(self) -> u8 {
        match self {
            Variant::SingleSelect => 0,
            Variant::RadioGroup => 1,
            Variant::CheckboxGroup => 2,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Variant::SingleSelect),
            1 => Some(Variant::RadioGroup),
            2 => Some(Variant::CheckboxGroup),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::SingleSelect => "select",
            Variant::RadioGroup => "radio",
            Variant::CheckboxGroup => "checkboxes",
        }
    }

    /// Whether the variant stores zero or more ids rather than at most one.
    pub fn is_multiple(self) -> bool {
        matches!(self, Variant::CheckboxGroup)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u64>() {
            return Variant::from_code(code).ok_or_else(|| FieldsError::UnknownVariant {
                value: s.to_string(),
            });
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "select" | "single-select" | "single_select" => Ok(Variant::SingleSelect),
            "radio" | "radio-group" | "radio_group" => Ok(Variant::RadioGroup),
            "checkbox" | "checkboxes" | "checkbox-group" | "checkbox_group" => {
                Ok(Variant::CheckboxGroup)
            }
            _ => Err(FieldsError::UnknownVariant {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VariantRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<VariantRepr> for Variant {
    type Error = String;

    fn try_from(repr: VariantRepr) -> Result<Self, Self::Error> {
        match repr {
            VariantRepr::Code(code) => {
                Variant::from_code(code).ok_or_else(|| format!("unknown selector variant: {code}"))
            }
            VariantRepr::Name(name) => name.parse().map_err(|e: FieldsError| e.to_string()),
        }
    }
}

/// A field value as read from, or handed back to, the form boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum StoredValue {
    #[default]
    Absent,
    Text(String),
    Number(Number),
    Bool(bool),
    List(Vec<String>),
}

impl StoredValue {
    pub fn text(s: impl Into<String>) -> Self {
        StoredValue::Text(s.into())
    }

    pub fn list<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StoredValue::List(ids.into_iter().map(Into::into).collect())
    }

    /// Empty and not numeric: absent, `""`, `false` or an empty list.
    ///
    /// Numbers are never empty, so `0` and `"0"` count as values.
    pub fn is_empty(&self) -> bool {
        match self {
            StoredValue::Absent => true,
            StoredValue::Text(s) => s.is_empty(),
            StoredValue::Number(_) => false,
            StoredValue::Bool(b) => !b,
            StoredValue::List(items) => items.is_empty(),
        }
    }

    /// Blank in the settings sense: everything `is_empty` covers, plus the
    /// numeric zeroes `0`, `0.0` and `"0"`.
    ///
    /// A blank allow-list offers every item.
    pub fn is_blank(&self) -> bool {
        match self {
            StoredValue::Number(n) => n.as_f64() == Some(0.0),
            StoredValue::Text(s) => s.is_empty() || s == "0",
            other => other.is_empty(),
        }
    }

    /// The string a single-cardinality value is matched on.
    ///
    /// Lists and absent values have no key and therefore match nothing.
    pub fn scalar_key(&self) -> Option<Cow<'_, str>> {
        match self {
            StoredValue::Absent | StoredValue::List(_) => None,
            StoredValue::Text(s) => Some(Cow::Borrowed(s)),
            StoredValue::Number(n) => Some(Cow::Owned(n.to_string())),
            StoredValue::Bool(b) => Some(Cow::Borrowed(if *b { "1" } else { "0" })),
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            StoredValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// String form of a list element. Nested structures keep their JSON text.
fn element_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<Value> for StoredValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => StoredValue::Absent,
            Value::Bool(b) => StoredValue::Bool(b),
            Value::Number(n) => StoredValue::Number(n),
            Value::String(s) => StoredValue::Text(s),
            Value::Array(items) => StoredValue::List(items.iter().map(element_string).collect()),
            Value::Object(map) => StoredValue::List(map.values().map(element_string).collect()),
        }
    }
}

impl From<StoredValue> for Value {
    fn from(value: StoredValue) -> Self {
        match value {
            StoredValue::Absent => Value::Null,
            StoredValue::Text(s) => Value::String(s),
            StoredValue::Number(n) => Value::Number(n),
            StoredValue::Bool(b) => Value::Bool(b),
            StoredValue::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        }
    }
}

impl From<&str> for StoredValue {
    fn from(s: &str) -> Self {
        StoredValue::Text(s.to_string())
    }
}

impl From<i64> for StoredValue {
    fn from(n: i64) -> Self {
        StoredValue::Number(n.into())
    }
}

impl From<Vec<String>> for StoredValue {
    fn from(items: Vec<String>) -> Self {
        StoredValue::List(items)
    }
}

/// The effective allow-list after configuration has been read.
///
/// `All` stands in for every registry id without materializing them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowList {
    #[default]
    All,
    Only(CanonicalList),
}

impl AllowList {
    /// Build from the raw configured value: blank means unrestricted.
    pub fn from_config(raw: &StoredValue) -> Self {
        if raw.is_blank() {
            AllowList::All
        } else {
            AllowList::Only(crate::normalize::normalize(raw))
        }
    }

    pub fn allows(&self, id: &str) -> bool {
        match self {
            AllowList::All => true,
            AllowList::Only(ids) => ids.iter().any(|allowed| allowed == id),
        }
    }

    /// The explicit id filter, if any, for handing to a registry.
    pub fn ids(&self) -> Option<&[String]> {
        match self {
            AllowList::All => None,
            AllowList::Only(ids) => Some(ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn variant_codes_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_code(variant.code() as u64), Some(variant));
        }
        assert_eq!(Variant::from_code(3), None);
    }

    #[test]
    fn variant_parses_names_and_codes() {
        assert_eq!("select".parse::<Variant>().unwrap(), Variant::SingleSelect);
        assert_eq!("Radio".parse::<Variant>().unwrap(), Variant::RadioGroup);
        assert_eq!("CHECKBOXES".parse::<Variant>().unwrap(), Variant::CheckboxGroup);
        assert_eq!("1".parse::<Variant>().unwrap(), Variant::RadioGroup);
        assert!("dropdown".parse::<Variant>().is_err());
        assert!("7".parse::<Variant>().is_err());
    }

    #[test]
    fn variant_deserializes_from_code_or_name() {
        let v: Variant = serde_json::from_value(json!(0)).unwrap();
        assert_eq!(v, Variant::SingleSelect);
        let v: Variant = serde_yaml::from_str("radio").unwrap();
        assert_eq!(v, Variant::RadioGroup);
        assert!(serde_json::from_value::<Variant>(json!(9)).is_err());
    }

    #[test]
    fn variant_serializes_as_name() {
        assert_eq!(
            serde_json::to_value(Variant::CheckboxGroup).unwrap(),
            json!("checkboxes")
        );
    }

    #[test]
    fn default_variant_is_checkboxes() {
        assert_eq!(Variant::default(), Variant::CheckboxGroup);
        assert!(Variant::CheckboxGroup.is_multiple());
        assert!(!Variant::RadioGroup.is_multiple());
    }

    #[test]
    fn stored_value_from_json_shapes() {
        assert_eq!(StoredValue::from(json!(null)), StoredValue::Absent);
        assert_eq!(StoredValue::from(json!("post")), StoredValue::text("post"));
        assert_eq!(StoredValue::from(json!(5)), StoredValue::from(5i64));
        assert_eq!(
            StoredValue::from(json!(["post", 3, true])),
            StoredValue::list(["post", "3", "1"])
        );
    }

    #[test]
    fn stored_value_object_contributes_values() {
        let value = StoredValue::from(json!({"a": "post", "b": "page"}));
        assert_eq!(value, StoredValue::list(["post", "page"]));
    }

    #[test]
    fn stored_value_emptiness() {
        assert!(StoredValue::Absent.is_empty());
        assert!(StoredValue::text("").is_empty());
        assert!(StoredValue::Bool(false).is_empty());
        assert!(StoredValue::List(vec![]).is_empty());
        assert!(!StoredValue::from(0i64).is_empty());
        assert!(!StoredValue::text("0").is_empty());
        assert!(!StoredValue::list([""]).is_empty());
    }

    #[test]
    fn stored_value_blankness_counts_zeroes() {
        assert!(StoredValue::Absent.is_blank());
        assert!(StoredValue::Bool(false).is_blank());
        assert!(StoredValue::from(0i64).is_blank());
        assert!(StoredValue::from(json!(0.0)).is_blank());
        assert!(StoredValue::text("0").is_blank());
        assert!(!StoredValue::text("00").is_blank());
        assert!(!StoredValue::text("0.0").is_blank());
        assert!(!StoredValue::from(7i64).is_blank());
        assert!(!StoredValue::list(["0"]).is_blank());
    }

    #[test]
    fn stored_value_yaml_round_trip() {
        let value = StoredValue::list(["post", "page"]);
        let yaml = serde_yaml::to_string(&value).unwrap();
        let parsed: StoredValue = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value, parsed);
    }

    #[test]
    fn scalar_key_forms() {
        assert_eq!(StoredValue::text("page").scalar_key().as_deref(), Some("page"));
        assert_eq!(StoredValue::from(12i64).scalar_key().as_deref(), Some("12"));
        assert_eq!(StoredValue::Absent.scalar_key(), None);
        assert_eq!(StoredValue::list(["page"]).scalar_key(), None);
    }

    #[test]
    fn allow_list_from_config() {
        assert_eq!(AllowList::from_config(&StoredValue::Absent), AllowList::All);
        assert_eq!(AllowList::from_config(&StoredValue::text("")), AllowList::All);
        assert_eq!(
            AllowList::from_config(&StoredValue::text("post,page")),
            AllowList::Only(vec!["post".into(), "page".into()])
        );
        let only = AllowList::from_config(&StoredValue::list(["post"]));
        assert!(only.allows("post"));
        assert!(!only.allows("page"));
        assert!(AllowList::All.allows("anything"));
        assert_eq!(AllowList::All.ids(), None);
    }

    #[test]
    fn allow_list_zero_is_unrestricted() {
        assert_eq!(AllowList::from_config(&StoredValue::text("0")), AllowList::All);
        assert_eq!(AllowList::from_config(&StoredValue::from(0i64)), AllowList::All);
        assert_eq!(
            AllowList::from_config(&StoredValue::from(3i64)),
            AllowList::Only(vec!["3".into()])
        );
    }

    #[test]
    fn item_yaml_defaults_public() {
        let item: Item = serde_yaml::from_str("id: post\ndisplay_name: Posts\n").unwrap();
        assert_eq!(item, Item::new("post", "Posts"));
        assert!(!Item::new("nav", "Menus").private().public);
    }
}

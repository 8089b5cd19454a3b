//! Value coercion into a canonical id list.

use crate::types::{CanonicalList, StoredValue};

/// Coerce any stored shape into an ordered list of ids.
///
/// First match wins:
/// 1. a list is returned as-is;
/// 2. an empty, non-numeric value (absent, `""`, `false`) gives `[]`;
/// 3. text is split on `,` with no trimming and empty segments kept;
/// 4. any other scalar becomes a one-element list of its string form.
///
/// `"a,,b"` therefore yields `["a", "", "b"]`. Stored values written by
/// earlier versions depend on this, so segments are never cleaned up.
pub fn normalize(input: &StoredValue) -> CanonicalList {
    match input {
        StoredValue::List(items) => items.clone(),
        value if value.is_empty() => Vec::new(),
        StoredValue::Text(s) => s.split(',').map(str::to_owned).collect(),
        StoredValue::Number(n) => vec![n.to_string()],
        StoredValue::Bool(_) => vec!["1".to_string()],
        StoredValue::Absent => Vec::new(),
    }
}

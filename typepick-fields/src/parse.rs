//! Submission parsing: turn posted form data back into a stored value.

use crate::normalize::normalize;
use crate::types::{StoredValue, Variant};

/// Rebuild the value to store from what the form submitted.
///
/// Single-cardinality variants keep the submitted value as-is, so nothing
/// submitted stays absent. Checkbox groups always store a canonical list.
pub fn parse(variant: Variant, submitted: StoredValue) -> StoredValue {
    match variant {
        Variant::SingleSelect | Variant::RadioGroup => submitted,
        Variant::CheckboxGroup => match submitted {
            StoredValue::List(items) => StoredValue::List(items),
            other => StoredValue::List(normalize(&other)),
        },
    }
}

//! Decoding submitted form bodies.
//!
//! Hosts post `application/x-www-form-urlencoded` data. A plain `name=v`
//! pair is a single value; `name[]=v` pairs are collected into a list, the
//! convention the checkbox group's input name relies on.

use url::form_urlencoded;

use crate::render::MULTI_SUFFIX;
use crate::types::StoredValue;

/// Extract the submitted value for `field_name` from a urlencoded body.
///
/// List pairs win over a plain pair; with neither the value is absent.
/// Repeated plain pairs keep the last one. Bytes that do not decode to
/// UTF-8 become U+FFFD.
pub fn decode_submission(body: &str, field_name: &str) -> StoredValue {
    let multi_name = format!("{field_name}{MULTI_SUFFIX}");
    let mut single = None;
    let mut list: Option<Vec<String>> = None;

    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        if key == multi_name {
            list.get_or_insert_with(Vec::new).push(value.into_owned());
        } else if key == field_name {
            single = Some(value.into_owned());
        }
    }

    match (list, single) {
        (Some(items), _) => StoredValue::List(items),
        (None, Some(value)) => StoredValue::Text(value),
        (None, None) => StoredValue::Absent,
    }
}

//! Inspecting the fields of document records.

use log::trace;
use log::warn;
use serde_json::Value;

use crate::record::RawRecord;
use crate::record::RecordType;

const PATH_DELIMITER: &str = ".";

/// Returns the dot-joined path of every leaf of the first document point.
///
/// Only the first record is inspected, and only if it holds documents.
/// Objects and arrays are descended into (array elements are addressed by
/// their index), any other value is a leaf. With `only_numeric` set, leaves
/// that are not numbers are skipped.
pub fn discover_field_names(data_list: &[RawRecord], only_numeric: bool) -> Vec<String> {
    let Some(first_record) = data_list.first() else {
        return Vec::new();
    };

    if first_record.record_type != RecordType::Docs {
        return Vec::new();
    }

    let Some(first_point) = first_record.points.first() else {
        warn!(
            "the `{}` docs record has no points to discover fields from",
            first_record.name
        );
        return Vec::new();
    };

    let document = first_point.to_json();
    let mut fields: Vec<String> = Vec::new();
    select_fields(&document, &mut Vec::new(), only_numeric, &mut fields);

    trace!("discovered {} fields in `{}`", fields.len(), first_record.name);

    fields
}

fn select_fields(
    value: &Value,
    parent_key: &mut Vec<String>,
    only_numeric: bool,
    fields: &mut Vec<String>,
) {
    let children: Vec<(String, &Value)> = match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.to_owned(), v)).collect(),
        Value::Array(items) => items.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => return,
    };

    for (key, child) in children {
        match child {
            Value::Object(_) | Value::Array(_) => {
                parent_key.push(key);
                select_fields(child, parent_key, only_numeric, fields);
                parent_key.pop();
            }
            Value::Number(_) => fields.push(join_path(parent_key, &key)),
            Value::Null | Value::Bool(_) | Value::String(_) if !only_numeric => {
                fields.push(join_path(parent_key, &key))
            }
            Value::Null | Value::Bool(_) | Value::String(_) => {}
        }
    }
}

fn join_path(parent_key: &[String], key: &str) -> String {
    let mut parts: Vec<&str> = parent_key.iter().map(String::as_str).collect();
    parts.push(key);
    parts.join(PATH_DELIMITER)
}

/// Walks a dot-separated `path` into `value`.
///
/// Returns `None` as soon as a segment is missing or holds a falsy value
/// (`null`, `false`, `0` or an empty string). Array elements are addressed
/// by their index.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_DELIMITER).try_fold(value, |current, segment| {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
        }?;

        truthy(next).then_some(next)
    })
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

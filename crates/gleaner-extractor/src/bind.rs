//! Bind a parsed JSON value onto a field schema

use gleaner_domain::{FieldKind, FieldSchema, FieldValue, Record};
use serde_json::Value;
use tracing::warn;

/// Map a generic JSON value onto the target schema
///
/// Binding never fails: the record starts from the schema's defaults
/// and every absent or mistyped field keeps its default, so the result
/// may consist entirely of defaults.
pub(crate) fn bind(value: &Value, schema: &FieldSchema) -> Record {
    let mut record = Record::defaults(schema);

    let object = match value.as_object() {
        Some(object) => object,
        None => {
            warn!(
                "expected a JSON object for '{}', got {}",
                schema.name,
                kind_name(value)
            );
            return record;
        }
    };

    for spec in schema.fields {
        if let Some(raw) = object.get(spec.key) {
            if let Some(bound) = bind_field(raw, &spec.kind) {
                record.set(spec.key, bound);
            }
        }
    }
    record
}

/// Bind one field value, or `None` to keep the declared default
fn bind_field(raw: &Value, kind: &FieldKind) -> Option<FieldValue> {
    match *kind {
        FieldKind::Text { default, required } => {
            let text = raw.as_str()?.trim();
            if text.is_empty() && required {
                return Some(FieldValue::Text(default.to_string()));
            }
            Some(FieldValue::Text(text.to_string()))
        }
        FieldKind::BoundedInt { min, max, .. } => {
            // Fractional scores truncate toward zero before clamping.
            let number = raw
                .as_i64()
                .or_else(|| raw.as_f64().map(|float| float as i64))?;
            Some(FieldValue::Integer(number.clamp(min, max)))
        }
        FieldKind::TextList => Some(FieldValue::TextList(bind_text_list(raw))),
        FieldKind::ItemList { item } => Some(FieldValue::ItemList(bind_item_list(raw, item))),
    }
}

/// Normalize a list of strings
///
/// A present-but-null value binds to an empty list, not a missing one.
/// Elements are trimmed, blanks dropped, and order preserved.
fn bind_text_list(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(elements) => elements
            .iter()
            .filter_map(|element| element.as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Bind each object element of a list against the nested item schema
fn bind_item_list(raw: &Value, item: &FieldSchema) -> Vec<Record> {
    let elements = match raw {
        Value::Array(elements) => elements,
        _ => return Vec::new(),
    };

    let mut records = Vec::with_capacity(elements.len());
    for (idx, element) in elements.iter().enumerate() {
        if element.is_object() {
            records.push(bind(element, item));
        } else {
            warn!(
                "skipping element {} of '{}' list: expected object, got {}",
                idx,
                item.name,
                kind_name(element)
            );
        }
    }
    records
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Record module - the populated output of a binding pass

use crate::schema::{FieldKind, FieldSchema};

/// A single bound field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Scalar string
    Text(String),

    /// Bounded integer
    Integer(i64),

    /// Ordered list of strings
    TextList(Vec<String>),

    /// Ordered list of sub-records
    ItemList(Vec<Record>),
}

/// A populated record conforming to a `FieldSchema`
///
/// Records hold every declared field, in declaration order, and are
/// constructed from a schema's defaults before any recovered values are
/// set. List fields are always present (possibly empty), so callers
/// never see a missing or null list.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<(&'static str, FieldValue)>,
}

impl Record {
    /// Build a record holding every field's declared default
    pub fn defaults(schema: &FieldSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|spec| {
                let value = match spec.kind {
                    FieldKind::Text { default, .. } => FieldValue::Text(default.to_string()),
                    FieldKind::BoundedInt { default, .. } => FieldValue::Integer(default),
                    FieldKind::TextList => FieldValue::TextList(Vec::new()),
                    FieldKind::ItemList { .. } => FieldValue::ItemList(Vec::new()),
                };
                (spec.key, value)
            })
            .collect();
        Self { values }
    }

    /// Replace the value of a declared field
    ///
    /// Keys not declared by the schema the record was built from are
    /// ignored; a record never grows fields its schema does not name.
    pub fn set(&mut self, key: &str, value: FieldValue) {
        if let Some(slot) = self.values.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        }
    }

    /// Get a field value by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    /// Get a text field by key
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Get an integer field by key
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(FieldValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get a string-list field by key
    pub fn text_list(&self, key: &str) -> Option<&[String]> {
        match self.get(key) {
            Some(FieldValue::TextList(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Get an item-list field by key
    pub fn items(&self, key: &str) -> Option<&[Record]> {
        match self.get(key) {
            Some(FieldValue::ItemList(records)) => Some(records.as_slice()),
            _ => None,
        }
    }

    /// Iterate over all fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn test_defaults_cover_every_field() {
        let record = Record::defaults(&schema::RESUME_FIELDS);
        assert_eq!(record.len(), schema::RESUME_FIELDS.fields.len());
        assert_eq!(record.text("name"), Some(""));
        assert_eq!(record.text_list("skills"), Some(&[][..]));
    }

    #[test]
    fn test_evaluation_defaults() {
        let record = Record::defaults(&schema::EVALUATION);
        assert_eq!(record.integer("score"), Some(6));
        assert!(!record.text("feedback").unwrap().is_empty());
        assert!(!record.text("suggestions").unwrap().is_empty());
    }

    #[test]
    fn test_set_replaces_declared_field() {
        let mut record = Record::defaults(&schema::EVALUATION);
        record.set("score", FieldValue::Integer(9));
        assert_eq!(record.integer("score"), Some(9));
    }

    #[test]
    fn test_set_ignores_undeclared_key() {
        let mut record = Record::defaults(&schema::EVALUATION);
        record.set("verdict", FieldValue::Text("hired".to_string()));
        assert_eq!(record.len(), schema::EVALUATION.fields.len());
        assert!(record.get("verdict").is_none());
    }

    #[test]
    fn test_typed_accessor_rejects_wrong_kind() {
        let record = Record::defaults(&schema::EVALUATION);
        assert!(record.text("score").is_none());
        assert!(record.integer("feedback").is_none());
    }

    #[test]
    fn test_fields_iterate_in_declaration_order() {
        let record = Record::defaults(&schema::JD_FIELDS);
        let keys: Vec<_> = record.fields().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["title", "company", "description", "requirements"]);
    }
}

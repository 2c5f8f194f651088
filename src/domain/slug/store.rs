// src/domain/slug/store.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::fmt;

/// A single field value as stored by a backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Null,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

/// An ordered list of field/value equality constraints, combined with
/// AND. The typed replacement for an open-ended where-map: stores see
/// exactly which columns a resource constrains, in which order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPredicate {
    constraints: Vec<(String, FieldValue)>,
}

impl QueryPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.constraints.push((field.into(), value.into()));
        self
    }

    pub fn constraints(&self) -> &[(String, FieldValue)] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// True when `fields` satisfies every constraint. Null constraints
    /// match only stored nulls.
    pub fn matches(&self, record: &Record) -> bool {
        self.constraints.iter().all(|(field, expected)| {
            record
                .get(field)
                .is_some_and(|actual| actual == expected)
        })
    }
}

/// A keyed row as returned by a backing store: ordered field/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Text content of a field; `None` for absent, null, or non-text fields.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }
}

/// A keyed store supporting predicate-based lookups. Any table or
/// collection of entities carrying an already-slugified value can be
/// exposed to the directory through this trait.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn count(&self, predicate: &QueryPredicate) -> DomainResult<u64>;
    async fn find_one(&self, predicate: &QueryPredicate) -> DomainResult<Option<Record>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_keeps_order_and_matches() {
        let predicate = QueryPredicate::new()
            .eq("slug", "about-us")
            .eq("locale", "en");
        let fields: Vec<_> = predicate
            .constraints()
            .iter()
            .map(|(f, _)| f.as_str())
            .collect();
        assert_eq!(fields, ["slug", "locale"]);

        let row = Record::new()
            .field("slug", "about-us")
            .field("locale", "en")
            .field("resource_id", FieldValue::Null);
        assert!(predicate.matches(&row));

        let other = Record::new().field("slug", "about-us").field("locale", "de");
        assert!(!predicate.matches(&other));
    }

    #[test]
    fn record_text_skips_nulls() {
        let row = Record::new()
            .field("resource_key", "blog")
            .field("resource_id", FieldValue::Null);
        assert_eq!(row.text("resource_key"), Some("blog"));
        assert_eq!(row.text("resource_id"), None);
        assert_eq!(row.text("missing"), None);
    }
}

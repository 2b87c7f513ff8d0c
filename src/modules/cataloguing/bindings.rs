//! Binding code → label table
//!
//! The bundled table is parsed once into process-wide read-only state and
//! never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::DomainError;

const BUNDLED_TABLE: &str = include_str!("../../../data/bindings.json");

static BINDINGS: Lazy<BindingTable> = Lazy::new(|| {
    BindingTable::from_json(BUNDLED_TABLE).unwrap_or_else(|e| {
        tracing::error!("Bundled binding table is unreadable: {}", e);
        BindingTable::default()
    })
});

#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    labels: HashMap<String, String>,
}

impl BindingTable {
    /// The bundled table, loaded on first use
    pub fn global() -> &'static BindingTable {
        &BINDINGS
    }

    /// Parse a `{"CODE": "label"}` JSON object
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| DomainError::Validation(format!("Invalid binding table: {}", e)))?;

        Ok(Self {
            labels: raw
                .into_iter()
                .map(|(code, label)| (code.trim().to_uppercase(), label))
                .collect(),
        })
    }

    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.labels
            .get(&code.trim().to_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_loads() {
        let table = BindingTable::global();
        assert!(!table.is_empty());
        assert_eq!(table.lookup("GEB"), Some("gebunden"));
        assert_eq!(table.lookup(" kt "), Some("kartoniert"));
        assert_eq!(table.lookup("XYZ"), None);
    }

    #[test]
    fn custom_table_replaces_bundled_one() {
        let table = BindingTable::from_json(r#"{"geb": "Hardcover"}"#).unwrap();
        assert_eq!(table.lookup("GEB"), Some("Hardcover"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn malformed_table_is_rejected() {
        let err = BindingTable::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source field codes as delivered by the book-trade web service
pub mod fields {
    pub const EAN: &str = "EAN";
    pub const ISBN: &str = "ISBN";
    pub const TITLE: &str = "Titel";
    pub const SUBTITLE: &str = "Utitel";
    pub const DESCRIPTION: &str = "Text1";
    pub const RETAIL_PRICE: &str = "PreisEurD";
    pub const RELEASE_YEAR: &str = "Erschjahr";
    pub const AGE: &str = "Alter";
    pub const PHYSICAL: &str = "Abb";
    pub const BINDING: &str = "Einband";
    pub const SEGMENT: &str = "Sortimentskennzeichen";
    pub const PRODUCT_GROUP: &str = "Warengruppe";
    pub const AUTHOR_TITLE: &str = "AutorSachtitel";
    pub const AUTHORS: &str = "IndexAutor";
    pub const PARTICIPANTS: &str = "Mitarb";
    pub const KEYWORDS: &str = "IndexSchlagw";
    pub const PUBLISHER: &str = "Verlag";
}

/// One raw field: either a single string or an ordered list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Single(s.to_string())
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        RawField::Single(s)
    }
}

impl From<Vec<&str>> for RawField {
    fn from(v: Vec<&str>) -> Self {
        RawField::Multiple(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for RawField {
    fn from(v: Vec<String>) -> Self {
        RawField::Multiple(v)
    }
}

/// Flat field-code → value mapping for one catalog item.
///
/// Absent keys are legal and common; nothing about the record is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, RawField>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for fixtures
    pub fn with(mut self, code: &str, value: impl Into<RawField>) -> Self {
        self.fields.insert(code.to_string(), value.into());
        self
    }

    pub fn get(&self, code: &str) -> Option<&RawField> {
        self.fields.get(code)
    }

    /// First scalar value of a field, trimmed; `None` when absent or blank
    pub fn text(&self, code: &str) -> Option<&str> {
        let raw = match self.fields.get(code)? {
            RawField::Single(s) => s.as_str(),
            RawField::Multiple(list) => list.first()?.as_str(),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.fields.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawField>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! Canonical export mapping
//!
//! An ordered field-name → value mapping. `as_array = false` and
//! `as_array = true` exports of the same product share keys and key order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExportValue {
    Text(String),
    List(Vec<String>),
}

impl ExportValue {
    /// Render a value either as a list or as text joined with `delimiter`
    pub fn render(value: &Value, as_array: bool, delimiter: &str) -> Self {
        if as_array {
            ExportValue::List(value.to_array())
        } else {
            ExportValue::Text(value.join(delimiter))
        }
    }

    pub fn as_text(&self, delimiter: &str) -> String {
        match self {
            ExportValue::Text(s) => s.clone(),
            ExportValue::List(list) => list.join(delimiter),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Export {
    entries: Vec<(&'static str, ExportValue)>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key; inherited keys are never reordered or replaced
    pub(crate) fn push(&mut self, key: &'static str, value: ExportValue) {
        debug_assert!(
            !self.entries.iter().any(|(k, _)| *k == key),
            "duplicate export key {}",
            key
        );
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&ExportValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ExportValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Export {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

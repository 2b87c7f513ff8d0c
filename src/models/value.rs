//! Uniform wrapper for scalar-or-list fields
//!
//! Every product field is consumed through the same accessors, whatever its
//! original cardinality. There is no null state: absence and an empty list
//! both read as the empty string / empty sequence. An empty list still
//! serializes as `[]`, an absent field as `""`.

use serde::{Serialize, Serializer};
use std::fmt;

use super::record::RawField;

/// Line break token used when multi-valued display fields render as text
pub const LINE_BREAK: &str = "\n";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Empty,
    Single(String),
    List(Vec<String>),
}

impl Value {
    /// Build from an optional raw field; blank scalars and blank list entries are dropped
    pub fn of(raw: Option<&RawField>) -> Self {
        match raw {
            None => Value::Empty,
            Some(RawField::Single(s)) => Value::from(s.as_str()),
            Some(RawField::Multiple(list)) => Value::from(list.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as text, joining lists with `delimiter`
    pub fn join(&self, delimiter: &str) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Single(s) => s.clone(),
            Value::List(list) => list.join(delimiter),
        }
    }

    /// Ordered sequence view; a scalar becomes a one-element sequence
    pub fn to_array(&self) -> Vec<String> {
        match self {
            Value::Empty => Vec::new(),
            Value::Single(s) => vec![s.clone()],
            Value::List(list) => list.clone(),
        }
    }

    pub fn first(&self) -> Option<&str> {
        match self {
            Value::Empty => None,
            Value::Single(s) => Some(s),
            Value::List(list) => list.first().map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Value::Empty => 0,
            Value::Single(_) => 1,
            Value::List(list) => list.len(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() {
            Value::Empty
        } else {
            Value::Single(s.to_string())
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        if s.trim().is_empty() {
            Value::Empty
        } else {
            Value::Single(s)
        }
    }
}

impl From<Vec<String>> for Value {
    fn from(mut list: Vec<String>) -> Self {
        list.retain(|entry| !entry.trim().is_empty());
        Value::List(list)
    }
}

impl From<Option<String>> for Value {
    fn from(opt: Option<String>) -> Self {
        opt.map(Value::from).unwrap_or_default()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(LINE_BREAK))
    }
}

// Empty serializes as "" so consumers never see null
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Empty => serializer.serialize_str(""),
            Value::Single(s) => serializer.serialize_str(s),
            Value::List(list) => list.serialize(serializer),
        }
    }
}

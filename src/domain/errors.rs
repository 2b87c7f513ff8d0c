//! Domain error types
//!
//! Only the collaborators (remote fetch, cover download, cache I/O, export
//! writers) produce these. Classification and field extraction are total and
//! never fail.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Record or cover not found upstream
    NotFound(String),
    /// Invalid configuration or caller input
    Validation(String),
    /// External service error (network, HTTP status, payload)
    External(String),
    /// File system error
    Io(String),
    /// Generic internal error
    Internal(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(id) => write!(f, "Record not found: {}", id),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::External(msg) => write!(f, "External service error: {}", msg),
            DomainError::Io(msg) => write!(f, "I/O error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::External(e.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Internal(format!("JSON error: {}", e))
    }
}

impl From<csv::Error> for DomainError {
    fn from(e: csv::Error) -> Self {
        DomainError::Io(format!("CSV error: {}", e))
    }
}

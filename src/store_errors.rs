//! # Oil Store Error Types Module
//!
//! This module defines custom error types used by oil catalog loading.
//! The recipe model itself raises no errors; only the catalog plumbing can
//! fail, and it fails here.

/// Custom error types for oil catalog operations
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Catalog file read errors
    Read(String),
    /// Catalog JSON parse errors
    Parse(String),
    /// Duplicate oil id within a catalog
    DuplicateId(u32),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Read(msg) => write!(f, "Catalog read error: {msg}"),
            StoreError::Parse(msg) => write!(f, "Catalog parse error: {msg}"),
            StoreError::DuplicateId(id) => write!(f, "Duplicate oil id in catalog: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Read(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err.to_string())
    }
}

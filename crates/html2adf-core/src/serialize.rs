//! ADF JSON serialization
//!
//! The model derives serde, so these helpers are thin wrappers that pin the
//! output format to `serde_json`.

use crate::ast::Document;

/// Serialize a document to compact ADF JSON
pub fn to_json(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string(doc)
}

/// Serialize a document to indented ADF JSON
pub fn to_json_pretty(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Convert a document to a `serde_json::Value` tree
pub fn to_value(doc: &Document) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(doc)
}

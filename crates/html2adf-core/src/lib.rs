//! html2adf-core - ADF document model and serialization
//!
//! This crate provides the data structures of the Atlassian Document Format
//! (ADF) produced by `html2adf`, together with JSON serialization helpers.
//! It knows nothing about HTML; any producer can build a [`Document`] by hand.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parse──▶ ┌───────────┐
//!                        │           │
//!                        │  ADF tree │ ──▶ JSON String
//! CDP Node Tree ────────▶│           │
//!                        └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use html2adf_core::{to_json, Block, Document, Inline, Mark};
//!
//! let doc = Document::new(vec![
//!     Block::heading(1, vec![Inline::plain("Hello World")]),
//!     Block::paragraph(vec![
//!         Inline::plain("This is "),
//!         Inline::text("bold", vec![Mark::Strong]),
//!         Inline::plain(" text."),
//!     ]),
//! ]);
//!
//! let json = to_json(&doc).unwrap();
//! assert!(json.contains(r#""type":"doc""#));
//! ```

mod ast;
mod serialize;

pub use ast::{Block, Document, HeadingAttrs, Inline, LinkAttrs, ListItem, Mark, ADF_VERSION};
pub use serialize::{to_json, to_json_pretty, to_value};

//! # html2adf
//!
//! Convert HTML fragments and DOM nodes to the Atlassian Document Format (ADF).
//!
//! ## Design
//!
//! The converter works on a CDP-style DOM Node structure rather than on HTML
//! text. This design allows:
//!
//! - **Zero parsing overhead**: When DOM is already available (e.g., from CDP/chromiumoxide)
//! - **Parser agnostic**: Any HTML parser can convert to the Node structure
//! - **Smaller binaries**: The bundled parser sits behind the `html` feature
//!
//! Formatting elements (`strong`, `em`, `a`, ...) become marks that are
//! inherited by every text run beneath them, outermost first. Lists nest to
//! whatever depth the source has; the only limit is
//! [`ConvertOptions::max_depth`], which turns pathological input into a
//! [`Html2AdfError::NestingTooDeep`] error instead of a stack overflow.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use html2adf::{AdfService, Block, Node};
//!
//! let service = AdfService::new();
//!
//! let mut body = Node::document_fragment();
//! body.add_child(Node::element("h1").with_child(Node::text("Hello World")));
//!
//! let doc = service.convert(&body).unwrap();
//! assert!(matches!(doc.content[0], Block::Heading { .. }));
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let doc = html2adf::html_to_adf("<p>Hello <strong>world</strong></p>").unwrap();
//! let json = html2adf::to_json(&doc).unwrap();
//! assert!(json.contains(r#""type":"strong""#));
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
mod marks;
pub mod node;
mod service;
mod utilities;

pub use html2adf_core::{
    to_json, to_json_pretty, to_value, Block, Document, HeadingAttrs, Inline, LinkAttrs,
    ListItem, Mark, ADF_VERSION,
};

#[cfg(feature = "html")]
pub use html::{parse_html, parse_html_with_limit};
pub use marks::resolve_mark;
pub use node::{Node, NodeType};
pub use service::{AdfService, ConvertOptions, DEFAULT_MAX_DEPTH};
pub use utilities::{filter_meaningful, heading_level};

/// Error type for html2adf operations
#[derive(Debug, thiserror::Error)]
pub enum Html2AdfError {
    #[error("Nesting too deep: depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Html2AdfError>;

/// Parse an HTML fragment and convert it with default options.
#[cfg(feature = "html")]
pub fn html_to_adf(html: &str) -> Result<Document> {
    AdfService::new().convert_html(html)
}

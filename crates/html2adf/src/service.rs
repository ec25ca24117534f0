//! AdfService - the main entry point for HTML/Node to ADF conversion.

use serde::Deserialize;

use crate::convert::convert;
use crate::node::Node;
use crate::{Document, Result};

/// Default limit on element nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for AdfService
///
/// Deserializable so hosts can load it from their own config files; missing
/// keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Maximum nesting depth of the input tree; deeper input is rejected
    pub max_depth: usize,

    /// `href` given to links whose anchor has no `href` attribute
    pub default_href: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            default_href: String::new(),
        }
    }
}

/// The main service for converting HTML to ADF
#[derive(Debug, Clone, Default)]
pub struct AdfService {
    options: ConvertOptions,
}

impl AdfService {
    /// Create a new AdfService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an AdfService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a DOM Node tree to an ADF document.
    ///
    /// The node's children are treated as the document body, unless the
    /// node is a full document, in which case its `BODY` element is used.
    pub fn convert(&self, node: &Node) -> Result<Document> {
        convert(node, &self.options)
    }

    /// Parse an HTML fragment and convert it to an ADF document
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<Document> {
        let node = crate::html::parse_html_with_limit(html, self.options.max_depth)?;
        self.convert(&node)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}

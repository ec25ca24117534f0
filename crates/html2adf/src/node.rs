//! CDP-style DOM Node structure for HTML to ADF conversion.
//!
//! This module provides a DOM node structure that matches the Chrome DevTools Protocol
//! DOM.Node structure. Any parser (html5ever, CDP, etc.) can convert their output to
//! this structure to use html2adf. CDP JSON deserializes into it directly.

use serde::Deserialize;

use crate::{Html2AdfError, Result};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u32")]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Doctype node (nodeType = 10)
    DocumentType = 10,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
    /// Any other nodeType (CDATA, processing instructions, ...)
    Other,
}

impl From<u32> for NodeType {
    fn from(value: u32) -> Self {
        match value {
            1 => NodeType::Element,
            3 => NodeType::Text,
            8 => NodeType::Comment,
            9 => NodeType::Document,
            10 => NodeType::DocumentType,
            11 => NodeType::DocumentFragment,
            _ => NodeType::Other,
        }
    }
}

/// A DOM node following the CDP DOM.Node structure.
///
/// Fields CDP sends that the converter does not need (`nodeId`,
/// `backendNodeId`, `localName`, ...) are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text nodes
    #[serde(default)]
    pub node_value: Option<String>,

    /// Attributes as flat array [name, value, name, value, ...] (CDP style)
    /// Only present for element nodes
    #[serde(default)]
    pub attributes: Option<Vec<String>>,

    /// Child nodes
    #[serde(default)]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_uppercase(),
            node_value: None,
            attributes: Some(Vec::new()),
            children: Some(Vec::new()),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let flat_attrs: Vec<String> = attrs
            .into_iter()
            .flat_map(|(k, v)| [k.to_string(), v.to_string()])
            .collect();

        Self {
            attributes: Some(flat_attrs),
            ..Self::element(tag_name)
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            attributes: None,
            children: Some(Vec::new()),
        }
    }

    /// Parse a node tree from CDP `DOM.Node` JSON (as returned by `DOM.getDocument`)
    pub fn from_cdp_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Html2AdfError::InvalidInput(e.to_string()))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (uppercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_uppercase()
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        let attrs = self.attributes.as_ref()?;

        // CDP stores attributes as flat array: [name, value, name, value, ...]
        attrs
            .chunks_exact(2)
            .find(|pair| pair[0].eq_ignore_ascii_case(name))
            .map(|pair| pair[1].as_str())
    }

    /// Child nodes as a slice
    pub fn child_nodes(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.child_nodes().iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_text() {
                out.push_str(node.node_value.as_deref().unwrap_or(""));
            } else {
                stack.extend(node.child_nodes().iter().rev());
            }
        }

        out
    }

    /// Nesting depth of the subtree rooted here (a leaf has depth 1).
    ///
    /// Walks with an explicit stack so it is safe on trees too deep to recurse.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];

        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.child_nodes().iter().map(|c| (c, depth + 1)));
        }

        max
    }

    /// The node whose children form the document body.
    ///
    /// For a full document (a document node, or an `HTML` element with a
    /// `BODY` child) this is the `BODY` element; otherwise the node itself.
    pub fn body(&self) -> &Node {
        let html = match self.node_type {
            NodeType::Document | NodeType::DocumentFragment => {
                self.element_children().find(|c| c.tag_name() == "HTML")
            }
            NodeType::Element if self.tag_name() == "HTML" => Some(self),
            _ => None,
        };

        html.and_then(|h| h.element_children().find(|c| c.tag_name() == "BODY"))
            .unwrap_or(self)
    }
}

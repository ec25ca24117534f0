//! HTML parsing support.
//!
//! This module provides functionality to parse HTML strings and convert them
//! to the CDP-style Node structure consumed by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::service::DEFAULT_MAX_DEPTH;
use crate::{Html2AdfError, Result};

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the fragment's `<html>` element; its children are
/// the top-level elements of the fragment.
///
/// # Example
///
/// ```rust
/// use html2adf::{parse_html, AdfService};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>").unwrap();
///
/// let doc = AdfService::new().convert(&node).unwrap();
/// assert_eq!(doc.content.len(), 1);
/// ```
pub fn parse_html(html: &str) -> Result<Node> {
    parse_html_with_limit(html, DEFAULT_MAX_DEPTH)
}

/// Parse an HTML fragment, rejecting trees nested deeper than `max_depth`.
pub fn parse_html_with_limit(html: &str, max_depth: usize) -> Result<Node> {
    let document = Html::parse_fragment(html);
    let root = document.root_element();

    let depth = element_depth(root);
    if depth > max_depth {
        return Err(Html2AdfError::NestingTooDeep {
            depth,
            limit: max_depth,
        });
    }

    Ok(scraper_to_node(root))
}

/// Depth of the parsed tree, counting text and comment leaves the way
/// [`Node::depth`] does once they are copied over.
fn element_depth(root: ElementRef) -> usize {
    let mut max = 0;
    let mut stack = vec![(root, 1usize)];

    while let Some((element, depth)) = stack.pop() {
        max = max.max(depth);
        let has_leaf = element
            .children()
            .any(|child| child.value().is_text() || child.value().is_comment());
        if has_leaf {
            max = max.max(depth + 1);
        }
        stack.extend(
            element
                .children()
                .filter_map(ElementRef::wrap)
                .map(|child| (child, depth + 1)),
        );
    }

    max
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    // Collect attributes
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    // Process children
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            _ => {}
        }
    }

    node
}

//! Convert a Node tree to an ADF document
//!
//! Top-level body children are dispatched to block constructors. Inline
//! content is produced by a recursive walk that carries the marks inherited
//! from formatting ancestors; lists recurse into nested lists.

use std::borrow::Cow;

use log::{debug, trace, warn};

use crate::marks::resolve_mark;
use crate::node::{Node, NodeType};
use crate::service::ConvertOptions;
use crate::utilities::{filter_meaningful, heading_level};
use crate::{Block, Document, Html2AdfError, Inline, ListItem, Mark, Result};

/// Convert a Node tree to an ADF Document
pub fn convert(node: &Node, options: &ConvertOptions) -> Result<Document> {
    let body = node.body();

    let depth = body.depth();
    if depth > options.max_depth {
        warn!(
            "rejecting input: nesting depth {} exceeds limit {}",
            depth, options.max_depth
        );
        return Err(Html2AdfError::NestingTooDeep {
            depth,
            limit: options.max_depth,
        });
    }

    // Stray text and comments directly under the body are ignored
    let blocks: Vec<Block> = body
        .element_children()
        .filter_map(|child| convert_block(child, options))
        .collect();

    debug!("converted document with {} top-level blocks", blocks.len());
    Ok(Document::new(blocks))
}

/// Which list block a list element produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    /// List kind of a nested list child; only `UL` and `OL` nest
    fn of(node: &Node) -> Option<Self> {
        if !node.is_element() {
            return None;
        }
        match node.tag_name().as_str() {
            "UL" => Some(ListKind::Bullet),
            "OL" => Some(ListKind::Ordered),
            _ => None,
        }
    }

    fn block(self, items: Vec<ListItem>) -> Block {
        match self {
            ListKind::Bullet => Block::bullet_list(items),
            ListKind::Ordered => Block::ordered_list(items),
        }
    }
}

/// Convert a body-level element to a Block
fn convert_block(node: &Node, options: &ConvertOptions) -> Option<Block> {
    let tag = node.tag_name();

    match tag.as_str() {
        "P" => Some(Block::paragraph(collect_inlines(node, options))),

        "UL" => Some(handle_list(node, ListKind::Bullet, options)),

        "OL" => Some(handle_list(node, ListKind::Ordered, options)),

        // Definition lists flatten to bullets: terms and definitions alike
        "DL" => Some(handle_list(node, ListKind::Bullet, options)),

        "BLOCKQUOTE" => Some(Block::blockquote(collect_inlines(node, options))),

        other => match heading_level(other) {
            Some(level) => Some(Block::heading(level, collect_inlines(node, options))),
            None => fallback_paragraph(node, options),
        },
    }
}

/// Wrap an unrecognized element's inline content in a paragraph, or drop it
/// when nothing meaningful remains.
fn fallback_paragraph(node: &Node, options: &ConvertOptions) -> Option<Block> {
    let inlines = filter_meaningful(process_inline(node, &[], options));

    if inlines.is_empty() {
        trace!("dropping <{}> without inline content", node.tag_name());
        None
    } else {
        Some(Block::paragraph(inlines))
    }
}

/// Convert a list element; every element child is an item
fn handle_list(list: &Node, kind: ListKind, options: &ConvertOptions) -> Block {
    let items = list
        .element_children()
        .map(|item| convert_list_item(item, options))
        .collect();

    kind.block(items)
}

/// A list item is its inline content as a paragraph, followed by any
/// nested lists in source order.
fn convert_list_item(item: &Node, options: &ConvertOptions) -> ListItem {
    let mut inlines = Vec::new();
    let mut nested = Vec::new();

    for child in item.children() {
        match ListKind::of(child) {
            Some(kind) => nested.push(handle_list(child, kind, options)),
            None => inlines.extend(process_inline(child, &[], options)),
        }
    }

    let mut content = Vec::with_capacity(nested.len() + 1);
    content.push(Block::paragraph(filter_meaningful(inlines)));
    content.extend(nested);
    ListItem::new(content)
}

/// Collect the filtered inline content of a node's children
fn collect_inlines(node: &Node, options: &ConvertOptions) -> Vec<Inline> {
    let inlines = node
        .children()
        .flat_map(|child| process_inline(child, &[], options))
        .collect();

    filter_meaningful(inlines)
}

/// Flatten an inline subtree into text runs and hard breaks.
///
/// `inherited` is never modified: an element that adds a mark hands its
/// children a fresh sequence, so sibling subtrees cannot see each other's
/// marks.
fn process_inline(node: &Node, inherited: &[Mark], options: &ConvertOptions) -> Vec<Inline> {
    match node.node_type {
        NodeType::Text => {
            let text = node.node_value.clone().unwrap_or_default();
            vec![Inline::text(text, inherited.to_vec())]
        }

        NodeType::Element if node.tag_name() == "BR" => vec![Inline::HardBreak],

        NodeType::Element | NodeType::Document | NodeType::DocumentFragment => {
            let marks: Cow<'_, [Mark]> = match resolve_mark(node, options) {
                Some(mark) => {
                    let mut marks = Vec::with_capacity(inherited.len() + 1);
                    marks.extend_from_slice(inherited);
                    marks.push(mark);
                    Cow::Owned(marks)
                }
                None => Cow::Borrowed(inherited),
            };

            if node.child_nodes().is_empty() {
                return vec![Inline::text(node.text_content(), marks.into_owned())];
            }

            node.children()
                .flat_map(|child| process_inline(child, &marks, options))
                .collect()
        }

        NodeType::Comment | NodeType::DocumentType | NodeType::Other => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, children: Vec<Node>) -> Node {
        children
            .into_iter()
            .fold(Node::element(tag), |node, child| node.with_child(child))
    }

    fn text(s: &str) -> Node {
        Node::text(s)
    }

    fn body(children: Vec<Node>) -> Node {
        children
            .into_iter()
            .fold(Node::document_fragment(), |node, child| node.with_child(child))
    }

    fn convert_default(node: &Node) -> Document {
        convert(node, &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn test_paragraph() {
        let doc = convert_default(&body(vec![el("p", vec![text("Hello World")])]));
        assert_eq!(doc.content, vec![Block::paragraph(vec![Inline::plain("Hello World")])]);
    }

    #[test]
    fn test_heading_levels() {
        let doc = convert_default(&body(vec![
            el("h1", vec![text("One")]),
            el("h6", vec![text("Six")]),
        ]));
        assert_eq!(
            doc.content,
            vec![
                Block::heading(1, vec![Inline::plain("One")]),
                Block::heading(6, vec![Inline::plain("Six")]),
            ]
        );
    }

    #[test]
    fn test_mark_accumulation_order() {
        let doc = convert_default(&body(vec![el(
            "p",
            vec![el("strong", vec![el("em", vec![text("x")])])],
        )]));
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Inline::text("x", vec![Mark::Strong, Mark::Em])])]
        );
    }

    #[test]
    fn test_marks_do_not_leak_to_siblings() {
        let doc = convert_default(&body(vec![el(
            "p",
            vec![
                el("b", vec![el("i", vec![text("a")]), text("b")]),
                el("u", vec![text("c")]),
                text("d"),
            ],
        )]));
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![
                Inline::text("a", vec![Mark::Strong, Mark::Em]),
                Inline::text("b", vec![Mark::Strong]),
                Inline::text("c", vec![Mark::Underline]),
                Inline::plain("d"),
            ])]
        );
    }

    #[test]
    fn test_code_composes_with_other_marks() {
        let doc = convert_default(&body(vec![el(
            "p",
            vec![el("strong", vec![el("code", vec![text("x")])])],
        )]));
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Inline::text("x", vec![Mark::Strong, Mark::Code])])]
        );
    }

    #[test]
    fn test_hard_break_drops_marks() {
        let doc = convert_default(&body(vec![el(
            "p",
            vec![el("em", vec![text("a"), el("br", vec![]), text("b")])],
        )]));
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![
                Inline::text("a", vec![Mark::Em]),
                Inline::HardBreak,
                Inline::text("b", vec![Mark::Em]),
            ])]
        );
    }

    #[test]
    fn test_childless_element_is_filtered() {
        let doc = convert_default(&body(vec![el("p", vec![text("a"), el("strong", vec![])])]));
        assert_eq!(doc.content, vec![Block::paragraph(vec![Inline::plain("a")])]);
    }

    #[test]
    fn test_whitespace_filtering_keeps_newline() {
        let doc = convert_default(&body(vec![el(
            "p",
            vec![text("  "), text("\n"), el("span", vec![text(" \t")]), text("x")],
        )]));
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Inline::plain("\n"), Inline::plain("x")])]
        );
    }

    #[test]
    fn test_empty_paragraph_is_kept() {
        let doc = convert_default(&body(vec![el("p", vec![text("   ")])]));
        assert_eq!(doc.content, vec![Block::paragraph(vec![])]);
    }

    #[test]
    fn test_blockquote() {
        let doc = convert_default(&body(vec![el(
            "blockquote",
            vec![el("p", vec![text("Quote "), el("i", vec![text("me")])])],
        )]));
        assert_eq!(
            doc.content,
            vec![Block::blockquote(vec![
                Inline::plain("Quote "),
                Inline::text("me", vec![Mark::Em]),
            ])]
        );
    }

    #[test]
    fn test_nested_list() {
        let list = el(
            "ul",
            vec![el(
                "li",
                vec![
                    text("A"),
                    el("ol", vec![el("li", vec![text("B")])]),
                    text("tail"),
                    el("ul", vec![el("li", vec![text("C")])]),
                ],
            )],
        );
        let doc = convert_default(&body(vec![list]));
        assert_eq!(
            doc.content,
            vec![Block::bullet_list(vec![ListItem::new(vec![
                Block::paragraph(vec![Inline::plain("A"), Inline::plain("tail")]),
                Block::ordered_list(vec![ListItem::from_inlines(vec![Inline::plain("B")])]),
                Block::bullet_list(vec![ListItem::from_inlines(vec![Inline::plain("C")])]),
            ])])]
        );
    }

    #[test]
    fn test_list_ignores_whitespace_between_items() {
        let list = el(
            "ol",
            vec![
                text("\n  "),
                el("li", vec![text("One")]),
                text("\n  "),
                el("li", vec![text("Two")]),
            ],
        );
        let doc = convert_default(&body(vec![list]));
        assert_eq!(
            doc.content,
            vec![Block::ordered_list(vec![
                ListItem::from_inlines(vec![Inline::plain("One")]),
                ListItem::from_inlines(vec![Inline::plain("Two")]),
            ])]
        );
    }

    #[test]
    fn test_list_item_with_only_sublist_has_empty_paragraph() {
        let list = el("ul", vec![el("li", vec![el("ul", vec![el("li", vec![text("x")])])])]);
        let doc = convert_default(&body(vec![list]));
        assert_eq!(
            doc.content,
            vec![Block::bullet_list(vec![ListItem::new(vec![
                Block::paragraph(vec![]),
                Block::bullet_list(vec![ListItem::from_inlines(vec![Inline::plain("x")])]),
            ])])]
        );
    }

    #[test]
    fn test_definition_list() {
        let dl = el(
            "dl",
            vec![el("dt", vec![text("Term")]), el("dd", vec![el("b", vec![text("Def")])])],
        );
        let doc = convert_default(&body(vec![dl]));
        assert_eq!(
            doc.content,
            vec![Block::bullet_list(vec![
                ListItem::from_inlines(vec![Inline::plain("Term")]),
                ListItem::from_inlines(vec![Inline::text("Def", vec![Mark::Strong])]),
            ])]
        );
    }

    #[test]
    fn test_fallback_paragraph_keeps_own_mark() {
        let a = Node::element_with_attrs("a", vec![("href", "http://x")]).with_child(text("text"));
        let doc = convert_default(&body(vec![a]));
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Inline::text(
                "text",
                vec![Mark::link("http://x", "text")]
            )])]
        );
    }

    #[test]
    fn test_unknown_empty_element_dropped() {
        let doc = convert_default(&body(vec![
            el("div", vec![text("  ")]),
            el("hr", vec![]),
            el("span", vec![text("kept")]),
        ]));
        assert_eq!(doc.content, vec![Block::paragraph(vec![Inline::plain("kept")])]);
    }

    #[test]
    fn test_body_level_text_and_comments_ignored() {
        let doc = convert_default(&body(vec![
            text("stray"),
            Node::comment("note"),
            el("p", vec![text("a"), Node::comment("inline note")]),
        ]));
        assert_eq!(doc.content, vec![Block::paragraph(vec![Inline::plain("a")])]);
    }

    #[test]
    fn test_full_document_uses_body() {
        let html = el(
            "html",
            vec![
                el("head", vec![el("title", vec![text("Ignored")])]),
                el("body", vec![el("p", vec![text("Body")])]),
            ],
        );
        let doc = convert_default(&html);
        assert_eq!(doc.content, vec![Block::paragraph(vec![Inline::plain("Body")])]);
    }

    #[test]
    fn test_depth_limit_counts_inline_nesting() {
        let mut inner = text("x");
        for _ in 0..10 {
            inner = el("span", vec![inner]);
        }
        let root = body(vec![el("p", vec![inner])]);
        let options = ConvertOptions {
            max_depth: 8,
            ..Default::default()
        };

        let err = convert(&root, &options).unwrap_err();
        assert!(matches!(err, Html2AdfError::NestingTooDeep { depth: 13, limit: 8 }));
    }
}

//! Tag-to-mark resolution.
//!
//! A static table maps uppercase tag names to mark constructors. Each element
//! contributes at most one mark.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::node::Node;
use crate::service::ConvertOptions;
use crate::Mark;

/// Builds the mark for a matched element
type MarkFn = fn(&Node, &ConvertOptions) -> Mark;

static MARK_TABLE: Lazy<IndexMap<&'static str, MarkFn>> = Lazy::new(|| {
    let mut table: IndexMap<&'static str, MarkFn> = IndexMap::new();
    table.insert("CODE", |_, _| Mark::Code);
    table.insert("STRONG", |_, _| Mark::Strong);
    table.insert("B", |_, _| Mark::Strong);
    table.insert("DEL", |_, _| Mark::Strike);
    table.insert("EM", |_, _| Mark::Em);
    table.insert("I", |_, _| Mark::Em);
    table.insert("U", |_, _| Mark::Underline);
    table.insert("A", link_mark);
    table
});

fn link_mark(node: &Node, options: &ConvertOptions) -> Mark {
    let href = node.attr("href").unwrap_or(&options.default_href);
    Mark::link(href, node.text_content())
}

/// Resolve the mark an element contributes to its descendants, if any.
pub fn resolve_mark(node: &Node, options: &ConvertOptions) -> Option<Mark> {
    if !node.is_element() {
        return None;
    }

    MARK_TABLE
        .get(node.tag_name().as_str())
        .map(|make| make(node, options))
}

//! ADF Abstract Syntax Tree
//!
//! This module defines the nodes of an ADF document. Every node serializes
//! with an internal `type` tag, so the derived serde output is the ADF JSON
//! shape itself.

use serde::{Deserialize, Serialize};

/// Version written into every document root
pub const ADF_VERSION: u32 = 1;

/// Root document container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "doc")]
pub struct Document {
    pub version: u32,
    pub content: Vec<Block>,
}

impl Document {
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            version: ADF_VERSION,
            content,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// A block-level ADF node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Paragraph containing inline content
    Paragraph { content: Vec<Inline> },

    /// Heading with level (1-6) and inline content
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Inline>,
    },

    /// Unordered list
    BulletList { content: Vec<ListItem> },

    /// Ordered list
    OrderedList { content: Vec<ListItem> },

    /// Block quote; always wraps a single paragraph
    Blockquote { content: Vec<Block> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

impl Block {
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Build a heading. Levels outside 1..=6 are clamped into range.
    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Block::Heading {
            attrs: HeadingAttrs {
                level: level.clamp(1, 6),
            },
            content,
        }
    }

    pub fn bullet_list(items: Vec<ListItem>) -> Self {
        Block::BulletList { content: items }
    }

    pub fn ordered_list(items: Vec<ListItem>) -> Self {
        Block::OrderedList { content: items }
    }

    /// Build a blockquote holding one paragraph of `content`
    pub fn blockquote(content: Vec<Inline>) -> Self {
        Block::Blockquote {
            content: vec![Block::paragraph(content)],
        }
    }

    /// Check if this block is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Block::BulletList { .. } | Block::OrderedList { .. })
    }

    /// Items of a list block, `None` for every other block
    pub fn list_items(&self) -> Option<&[ListItem]> {
        match self {
            Block::BulletList { content } | Block::OrderedList { content } => Some(content),
            _ => None,
        }
    }

    /// Inline content of a paragraph or heading
    pub fn inlines(&self) -> Option<&[Inline]> {
        match self {
            Block::Paragraph { content } | Block::Heading { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// A list item: a leading paragraph followed by nested lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "listItem")]
pub struct ListItem {
    pub content: Vec<Block>,
}

impl ListItem {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            content: vec![Block::paragraph(inlines)],
        }
    }

    /// Nested lists following the leading paragraph
    pub fn nested_lists(&self) -> impl Iterator<Item = &Block> {
        self.content.iter().filter(|b| b.is_list())
    }
}

/// An inline ADF node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    /// A run of text with its formatting marks, outermost first
    Text { text: String, marks: Vec<Mark> },

    /// Hard line break
    HardBreak,
}

impl Inline {
    pub fn text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Inline::Text {
            text: text.into(),
            marks,
        }
    }

    /// Text without marks
    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(text, Vec::new())
    }

    /// Whether this node survives whitespace filtering.
    ///
    /// Whitespace-only text is dropped, except a bare `"\n"`. Hard breaks are
    /// always kept.
    pub fn is_meaningful(&self) -> bool {
        match self {
            Inline::Text { text, .. } => text == "\n" || !text.trim().is_empty(),
            Inline::HardBreak => true,
        }
    }

    pub fn marks(&self) -> &[Mark] {
        match self {
            Inline::Text { marks, .. } => marks,
            Inline::HardBreak => &[],
        }
    }
}

/// A formatting annotation on a text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Code,
    Strong,
    Strike,
    Em,
    Underline,
    Link { attrs: LinkAttrs },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
    pub title: String,
}

impl Mark {
    pub fn link(href: impl Into<String>, title: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs {
                href: href.into(),
                title: title.into(),
            },
        }
    }
}

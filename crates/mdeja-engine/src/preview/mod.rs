//! # Preview Assembly
//!
//! Derives what a reader sees from a [`Document`]: a lazy sequence of
//! [`RenderNode`]s and a flat outline.
//!
//! - The first node is always a synthetic level-1 heading for the document
//!   title, anchored at [`TITLE_ANCHOR`]
//! - Every other node mirrors one block, in document order
//! - Text fields are tokenized; code content never is
//! - Assembly reads the document and never changes it, so the same document
//!   always yields the same nodes
//!
//! [`html::render`] turns the nodes into static markup.

pub mod html;
pub mod node;
pub mod outline;
pub mod paragraphs;

pub use node::{ListEntry, RenderNode};
pub use outline::OutlineEntry;

use crate::inline::tokenize;
use crate::models::{Block, BlockId, BlockKind, Document};

/// Anchor id of the synthetic title heading.
pub const TITLE_ANCHOR: &str = "preview-doc-title";

/// Display text for a heading block with no content.
pub const UNTITLED_HEADING: &str = "(untitled heading)";

/// Anchor id shared by a block's render node and its outline entry.
pub fn block_anchor(id: BlockId) -> String {
    format!("preview-block-{id}")
}

/// A read-only view of a title and its blocks.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    title: &'a str,
    blocks: &'a [Block],
}

impl<'a> Preview<'a> {
    pub fn new(title: &'a str, blocks: &'a [Block]) -> Self {
        Self { title, blocks }
    }

    pub fn of(document: &'a Document) -> Self {
        Self::new(document.title(), document.blocks())
    }

    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Render nodes, assembled one block at a time as the iterator advances.
    pub fn nodes(&self) -> RenderNodes<'a> {
        RenderNodes {
            title: Some(title_node(self.title)),
            blocks: self.blocks.iter(),
            pending: Vec::new().into_iter(),
        }
    }

    /// Title entry first, then one entry per heading block, in order.
    pub fn outline(&self) -> Vec<OutlineEntry<'a>> {
        let headings = self.blocks.iter().filter_map(|block| match &block.kind {
            BlockKind::Heading { content, level } => Some(OutlineEntry {
                id: block_anchor(block.id),
                text: heading_text(content),
                level: level.get(),
            }),
            _ => None,
        });

        std::iter::once(OutlineEntry {
            id: TITLE_ANCHOR.to_string(),
            text: self.title,
            level: 1,
        })
        .chain(headings)
        .collect()
    }
}

/// Lazy iterator over the render nodes of a [`Preview`].
#[derive(Debug)]
pub struct RenderNodes<'a> {
    title: Option<RenderNode<'a>>,
    blocks: std::slice::Iter<'a, Block>,
    /// Remaining nodes of a block that produced more than one.
    pending: std::vec::IntoIter<RenderNode<'a>>,
}

impl<'a> Iterator for RenderNodes<'a> {
    type Item = RenderNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(title) = self.title.take() {
            return Some(title);
        }
        if let Some(node) = self.pending.next() {
            return Some(node);
        }
        let block = self.blocks.next()?;
        let mut nodes = block_nodes(block).into_iter();
        let first = nodes.next();
        self.pending = nodes;
        // Every block yields at least one node.
        first
    }
}

fn title_node(title: &str) -> RenderNode<'_> {
    RenderNode::Heading {
        key: TITLE_ANCHOR.to_string(),
        anchor: TITLE_ANCHOR.to_string(),
        level: 1,
        children: tokenize(title),
    }
}

fn heading_text(content: &str) -> &str {
    if content.is_empty() {
        UNTITLED_HEADING
    } else {
        content
    }
}

fn block_nodes(block: &Block) -> Vec<RenderNode<'_>> {
    let anchor = block_anchor(block.id);
    match &block.kind {
        BlockKind::Heading { content, level } => vec![RenderNode::Heading {
            key: anchor.clone(),
            anchor,
            level: level.get(),
            children: tokenize(heading_text(content)),
        }],
        BlockKind::Paragraph { content } => {
            let paragraphs = paragraphs::split_paragraphs(content);
            let single = paragraphs.len() == 1;
            paragraphs
                .into_iter()
                .enumerate()
                .map(|(i, children)| RenderNode::Paragraph {
                    key: if single {
                        anchor.clone()
                    } else {
                        format!("{anchor}-p{i}")
                    },
                    children,
                })
                .collect()
        }
        BlockKind::Blockquote { content } => vec![RenderNode::BlockQuote {
            key: anchor.clone(),
            anchor,
            paragraphs: paragraphs::split_paragraphs(content),
        }],
        BlockKind::OrderedList { items } | BlockKind::UnorderedList { items } => {
            vec![RenderNode::List {
                ordered: matches!(block.kind, BlockKind::OrderedList { .. }),
                items: items
                    .iter()
                    .map(|item| ListEntry {
                        key: format!("{anchor}-item-{}", item.id),
                        children: tokenize(&item.content),
                    })
                    .collect(),
                key: anchor,
            }]
        }
        BlockKind::HorizontalRule => vec![RenderNode::Rule { key: anchor }],
        BlockKind::Code { content, language } => vec![RenderNode::Code {
            key: anchor.clone(),
            anchor,
            language,
            text: content,
        }],
        BlockKind::Unsupported { type_name, .. } => vec![RenderNode::Unsupported {
            key: anchor,
            type_name,
        }],
    }
}

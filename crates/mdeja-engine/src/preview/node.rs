use serde::Serialize;

use crate::inline::InlineNode;

/// One visual element of the preview, independent of any UI framework.
///
/// Text is borrowed from the document being previewed. `key` is unique and
/// stable within one assembly; `anchor` is the in-page navigation target
/// shared with the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum RenderNode<'a> {
    Heading {
        key: String,
        anchor: String,
        level: u8,
        children: Vec<InlineNode<'a>>,
    },
    Paragraph {
        key: String,
        children: Vec<InlineNode<'a>>,
    },
    /// A quote container holding one or more sub-paragraphs.
    BlockQuote {
        key: String,
        anchor: String,
        paragraphs: Vec<Vec<InlineNode<'a>>>,
    },
    List {
        key: String,
        ordered: bool,
        items: Vec<ListEntry<'a>>,
    },
    Rule {
        key: String,
    },
    /// Verbatim code; `text` is never tokenized.
    Code {
        key: String,
        anchor: String,
        language: &'a str,
        text: &'a str,
    },
    /// A block whose type this build does not know how to render.
    Unsupported {
        key: String,
        type_name: &'a str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry<'a> {
    pub key: String,
    pub children: Vec<InlineNode<'a>>,
}

impl RenderNode<'_> {
    pub fn key(&self) -> &str {
        match self {
            RenderNode::Heading { key, .. }
            | RenderNode::Paragraph { key, .. }
            | RenderNode::BlockQuote { key, .. }
            | RenderNode::List { key, .. }
            | RenderNode::Rule { key }
            | RenderNode::Code { key, .. }
            | RenderNode::Unsupported { key, .. } => key,
        }
    }

    /// Navigation anchor, for the node kinds that carry one.
    pub fn anchor(&self) -> Option<&str> {
        match self {
            RenderNode::Heading { anchor, .. }
            | RenderNode::BlockQuote { anchor, .. }
            | RenderNode::Code { anchor, .. } => Some(anchor),
            _ => None,
        }
    }
}

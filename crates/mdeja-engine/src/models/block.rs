use std::fmt;
use std::str::FromStr;

use crate::models::{BlockId, ItemId};

/// Heading level, always within `1..=6`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Returns `None` when `level` is outside `1..=6`.
    pub fn new(level: i64) -> Option<Self> {
        u8::try_from(level)
            .ok()
            .filter(|l| (Self::MIN..=Self::MAX).contains(l))
            .map(Self)
    }

    /// Clamps any integer into `1..=6`.
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The block types a caller may create.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockType {
    Heading,
    Paragraph,
    Blockquote,
    OrderedList,
    UnorderedList,
    HorizontalRule,
    Code,
}

impl BlockType {
    pub const ALL: [BlockType; 7] = [
        BlockType::Heading,
        BlockType::Paragraph,
        BlockType::Blockquote,
        BlockType::Code,
        BlockType::OrderedList,
        BlockType::UnorderedList,
        BlockType::HorizontalRule,
    ];

    /// Name used in saved documents.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Paragraph => "paragraph",
            BlockType::Blockquote => "blockquote",
            BlockType::OrderedList => "orderedList",
            BlockType::UnorderedList => "unorderedList",
            BlockType::HorizontalRule => "horizontalRule",
            BlockType::Code => "code",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type: {0:?}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// One entry of an ordered or unordered list block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: ItemId,
    pub content: String,
}

impl ListItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            content: content.into(),
        }
    }
}

/// Kind-specific block data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading {
        content: String,
        level: HeadingLevel,
    },
    /// May hold blank-line separated sub-paragraphs.
    Paragraph {
        content: String,
    },
    Blockquote {
        content: String,
    },
    OrderedList {
        items: Vec<ListItem>,
    },
    UnorderedList {
        items: Vec<ListItem>,
    },
    HorizontalRule,
    Code {
        content: String,
        language: String,
    },
    /// A type name this version does not know, kept from an imported document
    /// together with its other fields so a re-save writes them back unchanged.
    Unsupported {
        type_name: String,
        fields: serde_json::Map<String, serde_json::Value>,
    },
}

impl BlockKind {
    /// Default content for a freshly inserted block.
    pub fn empty(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Heading => BlockKind::Heading {
                content: String::new(),
                level: HeadingLevel::default(),
            },
            BlockType::Paragraph => BlockKind::Paragraph {
                content: String::new(),
            },
            BlockType::Blockquote => BlockKind::Blockquote {
                content: String::new(),
            },
            BlockType::OrderedList => BlockKind::OrderedList { items: Vec::new() },
            BlockType::UnorderedList => BlockKind::UnorderedList { items: Vec::new() },
            BlockType::HorizontalRule => BlockKind::HorizontalRule,
            BlockType::Code => BlockKind::Code {
                content: String::new(),
                language: String::new(),
            },
        }
    }

    pub fn unsupported(type_name: impl Into<String>) -> Self {
        BlockKind::Unsupported {
            type_name: type_name.into(),
            fields: serde_json::Map::new(),
        }
    }

    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            BlockKind::Heading { .. } => Some(BlockType::Heading),
            BlockKind::Paragraph { .. } => Some(BlockType::Paragraph),
            BlockKind::Blockquote { .. } => Some(BlockType::Blockquote),
            BlockKind::OrderedList { .. } => Some(BlockType::OrderedList),
            BlockKind::UnorderedList { .. } => Some(BlockType::UnorderedList),
            BlockKind::HorizontalRule => Some(BlockType::HorizontalRule),
            BlockKind::Code { .. } => Some(BlockType::Code),
            BlockKind::Unsupported { .. } => None,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            BlockKind::Unsupported { type_name, .. } => type_name,
            known => known.block_type().map_or("", BlockType::name),
        }
    }

    /// Text content for kinds that carry one.
    pub fn content(&self) -> Option<&str> {
        match self {
            BlockKind::Heading { content, .. }
            | BlockKind::Paragraph { content }
            | BlockKind::Blockquote { content }
            | BlockKind::Code { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[ListItem]> {
        match self {
            BlockKind::OrderedList { items } | BlockKind::UnorderedList { items } => Some(items),
            _ => None,
        }
    }

    pub(crate) fn items_mut(&mut self) -> Option<&mut Vec<ListItem>> {
        match self {
            BlockKind::OrderedList { items } | BlockKind::UnorderedList { items } => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        self.items().is_some()
    }
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
}

impl Block {
    /// Creates a block of `block_type` with default content and a fresh id.
    pub fn new(block_type: BlockType) -> Self {
        Self::with_kind(BlockKind::empty(block_type))
    }

    pub fn with_kind(kind: BlockKind) -> Self {
        Self {
            id: BlockId::generate(),
            kind,
        }
    }

    pub fn heading(level: HeadingLevel, content: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Heading {
            content: content.into(),
            level,
        })
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Paragraph {
            content: content.into(),
        })
    }

    pub fn items(&self) -> Option<&[ListItem]> {
        self.kind.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(1, Some(1))]
    #[case(6, Some(6))]
    #[case(7, None)]
    #[case(-3, None)]
    #[case(300, None)]
    fn heading_level_new_is_strict(#[case] input: i64, #[case] expected: Option<u8>) {
        assert_eq!(HeadingLevel::new(input).map(HeadingLevel::get), expected);
    }

    #[rstest]
    #[case(-10, 1)]
    #[case(0, 1)]
    #[case(4, 4)]
    #[case(9, 6)]
    #[case(i64::MAX, 6)]
    fn heading_level_clamps(#[case] input: i64, #[case] expected: u8) {
        assert_eq!(HeadingLevel::clamped(input).get(), expected);
    }

    #[test]
    fn block_type_names_round_trip() {
        for t in BlockType::ALL {
            assert_eq!(t.name().parse::<BlockType>(), Ok(t));
        }
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        assert_eq!(
            "table".parse::<BlockType>(),
            Err(UnknownBlockType("table".to_string()))
        );
    }

    #[test]
    fn new_blocks_get_default_content() {
        let heading = Block::new(BlockType::Heading);
        assert_eq!(
            heading.kind,
            BlockKind::Heading {
                content: String::new(),
                level: HeadingLevel::default()
            }
        );

        let list = Block::new(BlockType::UnorderedList);
        assert_eq!(list.items(), Some(&[][..]));
        assert!(list.kind.is_list());

        let rule = Block::new(BlockType::HorizontalRule);
        assert_eq!(rule.kind.content(), None);
        assert_eq!(rule.kind.type_name(), "horizontalRule");
    }

    #[test]
    fn unsupported_keeps_its_type_name() {
        let kind = BlockKind::unsupported("table");
        assert_eq!(kind.type_name(), "table");
        assert_eq!(kind.block_type(), None);
    }
}

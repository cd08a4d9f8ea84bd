//! Wire shape of a saved document.
//!
//! Deserializing goes through these records so a payload is validated as a
//! whole before any [`Document`] exists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{
    Block, BlockId, BlockKind, BlockType, Document, HeadingLevel, ImportError, ItemId, ListItem,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<BlockRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BlockId>,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemRecord>>,
    /// Fields no known block type uses. Kept only for unsupported blocks.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub content: String,
}

impl TryFrom<BlockRecord> for Block {
    type Error = ImportError;

    fn try_from(record: BlockRecord) -> Result<Self, Self::Error> {
        let BlockRecord {
            id,
            block_type,
            content,
            level,
            language,
            items,
            extra,
        } = record;
        let id = id.unwrap_or_else(BlockId::generate);

        let Ok(known) = BlockType::from_str(&block_type) else {
            log::warn!("keeping block {id} of unknown type {block_type:?} as unsupported");
            let mut fields = extra;
            if let Some(content) = content {
                fields.insert("content".into(), content.into());
            }
            if let Some(level) = level {
                fields.insert("level".into(), level.into());
            }
            if let Some(language) = language {
                fields.insert("language".into(), language.into());
            }
            if let Some(items) = items {
                fields.insert(
                    "items".into(),
                    items.into_iter().map(ItemRecord::into_value).collect(),
                );
            }
            return Ok(Block {
                id,
                kind: BlockKind::Unsupported {
                    type_name: block_type,
                    fields,
                },
            });
        };

        let content = content.unwrap_or_default();
        let items = items
            .unwrap_or_default()
            .into_iter()
            .map(ListItem::from)
            .collect();

        let kind = match known {
            BlockType::Heading => {
                let raw = level.ok_or(ImportError::MissingHeadingLevel { block: id })?;
                let level = HeadingLevel::new(raw)
                    .ok_or(ImportError::HeadingLevelOutOfRange { block: id, level: raw })?;
                BlockKind::Heading { content, level }
            }
            BlockType::Paragraph => BlockKind::Paragraph { content },
            BlockType::Blockquote => BlockKind::Blockquote { content },
            BlockType::OrderedList => BlockKind::OrderedList { items },
            BlockType::UnorderedList => BlockKind::UnorderedList { items },
            BlockType::HorizontalRule => BlockKind::HorizontalRule,
            BlockType::Code => BlockKind::Code {
                content,
                language: language.unwrap_or_default(),
            },
        };

        Ok(Block { id, kind })
    }
}

impl ItemRecord {
    fn into_value(self) -> Value {
        let mut object = Map::new();
        if let Some(id) = self.id {
            object.insert("id".into(), id.to_string().into());
        }
        object.insert("content".into(), self.content.into());
        Value::Object(object)
    }
}

impl From<ItemRecord> for ListItem {
    fn from(record: ItemRecord) -> Self {
        ListItem {
            id: record.id.unwrap_or_else(ItemId::generate),
            content: record.content,
        }
    }
}

impl TryFrom<DocumentRecord> for Document {
    type Error = ImportError;

    fn try_from(record: DocumentRecord) -> Result<Self, Self::Error> {
        let blocks = record
            .blocks
            .into_iter()
            .map(Block::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Document::from_parts(record.title, blocks)
    }
}

impl From<&Block> for BlockRecord {
    fn from(block: &Block) -> Self {
        let mut record = BlockRecord {
            id: Some(block.id),
            block_type: block.kind.type_name().to_string(),
            ..BlockRecord::default()
        };
        match &block.kind {
            BlockKind::Heading { content, level } => {
                record.content = Some(content.clone());
                record.level = Some(i64::from(level.get()));
            }
            BlockKind::Paragraph { content } | BlockKind::Blockquote { content } => {
                record.content = Some(content.clone());
            }
            BlockKind::OrderedList { items } | BlockKind::UnorderedList { items } => {
                record.items = Some(
                    items
                        .iter()
                        .map(|item| ItemRecord {
                            id: Some(item.id),
                            content: item.content.clone(),
                        })
                        .collect(),
                );
            }
            BlockKind::Code { content, language } => {
                record.content = Some(content.clone());
                record.language = Some(language.clone());
            }
            BlockKind::HorizontalRule => {}
            BlockKind::Unsupported { fields, .. } => record.extra = fields.clone(),
        }
        record
    }
}

impl From<Document> for DocumentRecord {
    fn from(doc: Document) -> Self {
        DocumentRecord {
            blocks: doc.blocks().iter().map(BlockRecord::from).collect(),
            title: doc.title().to_string(),
        }
    }
}

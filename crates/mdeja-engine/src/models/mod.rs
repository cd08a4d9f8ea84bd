pub mod block;
pub mod document;
pub mod ids;
pub mod record;

pub use block::{Block, BlockKind, BlockType, HeadingLevel, ListItem, UnknownBlockType};
pub use document::{Document, ImportError};
pub use ids::{BlockId, ItemId};

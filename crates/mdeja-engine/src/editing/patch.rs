use crate::models::{BlockId, ItemId};

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BlockInserted(BlockId),
    ItemInserted { block: BlockId, item: ItemId },
    Updated,
    Deleted,
    Moved,
    TitleChanged,
    /// Valid request with nothing to do (a boundary move, an update with no
    /// applicable fields).
    Unchanged,
    /// The referenced block or item does not exist; nothing changed.
    NotFound(Missing),
}

/// The reference that could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Block(BlockId),
    Item { block: BlockId, item: ItemId },
}

impl Outcome {
    /// Whether the document was modified.
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged | Outcome::NotFound(_))
    }
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub outcome: Outcome,
    pub version: u64,
}

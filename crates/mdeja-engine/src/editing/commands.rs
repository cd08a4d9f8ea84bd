use std::fmt;
use std::str::FromStr;

use crate::models::{BlockId, BlockType, ItemId};

/// Direction for move commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(format!("expected \"up\" or \"down\", got {other:?}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// Partial block fields to merge. Fields that do not apply to the target
/// block's kind are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockUpdate {
    pub content: Option<String>,
    /// Clamped into `1..=6` when applied.
    pub level: Option<i64>,
    pub language: Option<String>,
}

impl BlockUpdate {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn level(level: i64) -> Self {
        Self {
            level: Some(level),
            ..Self::default()
        }
    }

    pub fn language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.level.is_none() && self.language.is_none()
    }
}

/// Commands that can be applied to the document
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    SetTitle {
        title: String,
    },
    /// Insert after block index `after`; `None` (or the last index) appends.
    InsertBlock {
        after: Option<usize>,
        block_type: BlockType,
    },
    UpdateBlock {
        id: BlockId,
        update: BlockUpdate,
    },
    DeleteBlock {
        id: BlockId,
    },
    MoveBlock {
        id: BlockId,
        direction: Direction,
    },
    /// Insert after item index `after` of the list; `None` appends.
    InsertListItem {
        block: BlockId,
        after: Option<usize>,
    },
    UpdateListItem {
        block: BlockId,
        item: ItemId,
        content: String,
    },
    DeleteListItem {
        block: BlockId,
        item: ItemId,
    },
    MoveListItem {
        block: BlockId,
        item: ItemId,
        direction: Direction,
    },
}

/// Index at which to insert when placing after `after` in a sequence of `len`.
pub(crate) fn insertion_index(after: Option<usize>, len: usize) -> usize {
    after.map_or(len, |i| i.saturating_add(1).min(len))
}

/// Swaps `index` with its neighbour. Returns false at either boundary.
pub(crate) fn swap_neighbour<T>(items: &mut [T], index: usize, direction: Direction) -> bool {
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1).filter(|&t| t < items.len()),
    };
    match target {
        Some(target) => {
            items.swap(index, target);
            true
        }
        None => false,
    }
}

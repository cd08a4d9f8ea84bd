//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use mdeja_engine::{BlockId, BlockType, Direction, Document, ExportFormat, ItemId};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "mdeja",
    version,
    about = "Edit block-structured documents from the shell",
    after_help = "Blocks and items are addressed by position (0-based) or by id.\n\
                  Relative document paths resolve against `documents_path` in the config.\n\n\
                  Examples:\n  \
                  mdeja new notes.json --title \"Weekly notes\"\n  \
                  mdeja add notes.json heading --level 2 --content Intro\n  \
                  mdeja item add notes.json 1 --content \"first point\"\n  \
                  mdeja export notes.json --format html"
)]
pub struct Cli {
    /// Use this config file instead of ~/.config/mdeja/config.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty document
    New {
        document: PathBuf,
        #[arg(short, long, default_value = "")]
        title: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the blocks of a document
    Show {
        document: PathBuf,
        /// Print the rendered preview markup instead
        #[arg(long)]
        html: bool,
    },

    /// Print the table of contents
    Outline {
        document: PathBuf,
        #[arg(long)]
        json: bool,
    },

    /// Insert a block
    Add {
        document: PathBuf,
        /// Block type name, e.g. `heading` or `orderedList`
        block_type: BlockType,
        /// Insert after this position (appends when omitted)
        #[arg(short, long)]
        after: Option<usize>,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update fields of a block
    Set {
        document: PathBuf,
        block: BlockRef,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change the document title
    Title { document: PathBuf, title: String },

    /// Delete a block
    Delete { document: PathBuf, block: BlockRef },

    /// Move a block one position up or down
    Move {
        document: PathBuf,
        block: BlockRef,
        direction: Direction,
    },

    /// Edit the items of a list block
    #[command(subcommand)]
    Item(ItemCommand),

    /// Validate a saved document and replace the target with it
    Import {
        document: PathBuf,
        source: PathBuf,
    },

    /// Write the document out as a standalone file
    Export {
        document: PathBuf,
        #[arg(short, long, default_value = "html")]
        format: ExportFormat,
        /// Output path (defaults to a name derived from the title, next to the document)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommand {
    /// Insert an item
    Add {
        document: PathBuf,
        block: BlockRef,
        #[arg(short, long)]
        after: Option<usize>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Replace the content of an item
    Set {
        document: PathBuf,
        block: BlockRef,
        item: ItemRef,
        content: String,
    },
    /// Delete an item
    Delete {
        document: PathBuf,
        block: BlockRef,
        item: ItemRef,
    },
    /// Move an item one position up or down
    Move {
        document: PathBuf,
        block: BlockRef,
        item: ItemRef,
        direction: Direction,
    },
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub content: Option<String>,
    /// Heading level, clamped to 1..=6
    #[arg(long, allow_negative_numbers = true)]
    pub level: Option<i64>,
    /// Code block language
    #[arg(long)]
    pub language: Option<String>,
}

/// A block addressed by position or id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRef {
    Index(usize),
    Id(BlockId),
}

impl FromStr for BlockRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse() {
            return Ok(BlockRef::Index(index));
        }
        s.parse()
            .map(BlockRef::Id)
            .map_err(|_| format!("expected a block position or id, got {s:?}"))
    }
}

impl BlockRef {
    /// Resolves positions against `document`. Ids are passed through
    /// unchecked; unknown ids surface as a not-found outcome.
    pub fn resolve(self, document: &Document) -> anyhow::Result<BlockId> {
        match self {
            BlockRef::Id(id) => Ok(id),
            BlockRef::Index(index) => document
                .blocks()
                .get(index)
                .map(|block| block.id)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "no block at position {index} (document has {})",
                        document.len()
                    )
                }),
        }
    }
}

/// A list item addressed by position or id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    Index(usize),
    Id(ItemId),
}

impl FromStr for ItemRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse() {
            return Ok(ItemRef::Index(index));
        }
        s.parse()
            .map(ItemRef::Id)
            .map_err(|_| format!("expected an item position or id, got {s:?}"))
    }
}

impl ItemRef {
    pub fn resolve(self, document: &Document, block: BlockId) -> anyhow::Result<ItemId> {
        match self {
            ItemRef::Id(id) => Ok(id),
            ItemRef::Index(index) => document
                .block(block)
                .and_then(|b| b.items())
                .and_then(|items| items.get(index))
                .map(|item| item.id)
                .ok_or_else(|| anyhow::anyhow!("no list item at position {index}")),
        }
    }
}

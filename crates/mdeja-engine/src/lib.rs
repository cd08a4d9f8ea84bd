pub mod editing;
pub mod export;
pub mod inline;
pub mod io;
pub mod models;
pub mod preview;

// Re-export key types for easier usage
pub use editing::{BlockUpdate, Cmd, Direction, EditError, Editor, Outcome, Patch};
pub use export::{ExportFormat, ExportOptions, HtmlExporter};
pub use io::{DocumentStore, FileStore, IoError, MemoryStore};
pub use models::{Block, BlockId, BlockKind, BlockType, Document, ImportError, ItemId, ListItem};
pub use preview::{OutlineEntry, Preview, RenderNode};

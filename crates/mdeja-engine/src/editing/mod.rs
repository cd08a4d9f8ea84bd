/*!
 * # Editing Core
 *
 * Structural mutation of a [`Document`](crate::models::Document).
 *
 * ## Command-Based Editing
 * - Every change is a **`Cmd`** applied through [`Editor::apply`]
 * - Applying returns a **`Patch`** describing what happened and the new version
 * - Named methods (`insert_block`, `move_list_item`, ...) are thin wrappers
 *
 * ## Outcomes vs Errors
 * - An unknown block or item id is not an error: the command is a no-op and
 *   the patch carries `Outcome::NotFound`
 * - Moving past either end is `Outcome::Unchanged`
 * - Structurally invalid requests (an unknown block type name, list
 *   operations on a non-list block) are rejected with [`EditError`] and leave
 *   the document untouched
 *
 * ## Focus Token
 * Inserting a list item records the new item id so a front end can move
 * keyboard focus there once. It lives on the [`Editor`], never in the
 * document, and is cleared by [`Editor::take_focus`].
 *
 * ## Usage Pattern
 *
 * ```rust
 * use mdeja_engine::editing::{Direction, Editor, Outcome};
 * use mdeja_engine::models::BlockType;
 *
 * let mut editor = Editor::new("Notes");
 * let patch = editor.insert_block(None, BlockType::UnorderedList).unwrap();
 * let Outcome::BlockInserted(list) = patch.outcome else { unreachable!() };
 *
 * editor.insert_list_item(list, None).unwrap();
 * assert!(editor.take_focus().is_some());
 *
 * let top = editor.move_block(list, Direction::Up).unwrap();
 * assert_eq!(top.outcome, Outcome::Unchanged);
 * ```
 */

pub mod commands;
pub mod editor;
pub mod patch;

pub use commands::{BlockUpdate, Cmd, Direction};
pub use editor::Editor;
pub use patch::{Missing, Outcome, Patch};

use crate::models::{BlockId, UnknownBlockType};

/// Structurally invalid edit requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    UnknownBlockType(#[from] UnknownBlockType),
    #[error("Block {block} is a {type_name} block, not a list")]
    NotAList { block: BlockId, type_name: String },
}

//! # Inline Tokenizing
//!
//! Cursor-based tokenizing of the restricted inline markup allowed inside
//! block text: links, code spans, strong emphasis and emphasis.
//!
//! ## Architecture
//!
//! Tokenizing runs over a single text field (a heading, one sub-paragraph of a
//! paragraph or quote, or one list item). It is not line-bounded: a construct
//! may open on one line and close on the next.
//!
//! At each character position the sub-matchers are tried in a fixed order and
//! the first success wins:
//!
//! 1. link `[text](url)`
//! 2. code span `` `text` ``
//! 3. strong `**text**`
//! 4. emphasis `*text*`
//!
//! If none matches the cursor advances one character and the character stays
//! part of the surrounding text run.
//!
//! ## Non-nesting
//!
//! Inner text is captured verbatim and never re-scanned, so `**[x](y)**` is a
//! single strong node whose text is `[x](y)`.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum borrowed from the input
//! - **`kinds`**: inline kinds owning their delimiter constants
//! - **`cursor`**: `Cursor` for char-boundary-safe scanning
//! - **`parser`**: `tokenize()` entry point with `try_*` sub-matchers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::InlineNode;

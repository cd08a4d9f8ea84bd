//! # Inline Kinds
//!
//! Each inline kind owns its syntax delimiters. The parser refers to these
//! constants; it never hardcodes `[`, `` ` `` or `*`.
//!
//! - **`Link`**: `OPEN = b'['`, `MIDDLE = b"]("`, `CLOSE = b')'`
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`Strong`**: `DELIM = b"**"`
//! - **`Emphasis`**: `DELIM = b'*'`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;

//! # Document Export
//!
//! Packages a document for use outside the editor.
//!
//! - `html.rs` - standalone HTML page around the rendered preview
//! - `options.rs` - page chrome settings and export formats
//! - `filename.rs` - file names derived from the document title

pub mod filename;
pub mod html;
pub mod options;

pub use filename::{file_name, file_stem};
pub use html::HtmlExporter;
pub use options::{ExportFormat, ExportOptions};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File formats a document can be written out as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The editor's own saved-data shape
    #[default]
    Json,
    /// Standalone page with inline styles
    Html,
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Json, ExportFormat::Html, ExportFormat::Markdown]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" | "htm" => Ok(ExportFormat::Html),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Text and layout settings for the exported page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// `lang` attribute of the page
    pub lang: String,
    /// Used for the page and synthetic heading when the document title is empty
    pub fallback_title: String,
    /// Heading shown in the page header
    pub page_heading: String,
    pub close_label: String,
    pub nav_heading: String,
    pub page_top_label: String,
    /// Scroll offset in pixels below which the page-top button is hidden
    pub scroll_threshold: u32,
    /// Left margin per outline level below level 2
    pub nav_indent_px: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            fallback_title: "Preview".to_string(),
            page_heading: "Preview".to_string(),
            close_label: "Close".to_string(),
            nav_heading: "Contents".to_string(),
            page_top_label: "Back to top".to_string(),
            scroll_threshold: 100,
            nav_indent_px: 15,
        }
    }
}

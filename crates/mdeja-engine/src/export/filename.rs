use regex::Regex;
use std::sync::LazyLock;

use super::options::ExportFormat;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\s]").expect("disallowed-character pattern is valid")
});
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Stem used when the title leaves nothing usable.
pub const DEFAULT_STEM: &str = "document";

/// Derives a file stem from a document title.
///
/// Keeps ASCII letters, digits, `_` and whitespace, then turns each run of
/// whitespace into a single `_`.
pub fn file_stem(title: &str) -> String {
    let kept = DISALLOWED.replace_all(title, "");
    let stem = WHITESPACE_RUN.replace_all(&kept, "_");
    if stem.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        stem.into_owned()
    }
}

pub fn file_name(title: &str, format: ExportFormat) -> String {
    format!("{}.{}", file_stem(title), format.extension())
}

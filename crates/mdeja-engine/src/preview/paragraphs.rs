use regex::Regex;
use std::sync::LazyLock;

use crate::inline::{InlineNode, tokenize};

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern is valid"));

/// Splits block content on blank-line runs and tokenizes each part.
///
/// Whitespace-only parts are dropped, but the result always holds at least
/// one paragraph so an empty block still occupies a visible slot. When every
/// part is blank: a single part is kept as-is, several parts collapse into
/// one empty paragraph.
pub fn split_paragraphs(content: &str) -> Vec<Vec<InlineNode<'_>>> {
    let parts: Vec<&str> = PARAGRAPH_BREAK.split(content).collect();
    let retained: Vec<Vec<InlineNode<'_>>> = parts
        .iter()
        .filter(|part| !part.trim().is_empty())
        .map(|part| tokenize(part))
        .collect();

    if !retained.is_empty() {
        return retained;
    }
    match parts.as_slice() {
        [sole] => vec![tokenize(sole)],
        _ => vec![Vec::new()],
    }
}

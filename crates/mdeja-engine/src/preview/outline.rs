use serde::Serialize;

/// One table-of-contents entry.
///
/// `text` is the raw heading content, markup delimiters included. `id`
/// matches the anchor of the corresponding heading render node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry<'a> {
    pub id: String,
    pub text: &'a str,
    pub level: u8,
}

impl OutlineEntry<'_> {
    /// Navigation depth below the top two levels, as rendered by the export
    /// nav: levels 1 and 2 sit flush.
    pub fn indent_depth(&self) -> u32 {
        u32::from(self.level.saturating_sub(2))
    }
}

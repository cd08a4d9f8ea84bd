use serde::Serialize;

/// A tokenized inline node borrowing its text from the tokenized string.
///
/// Markup variants hold the captured inner text without delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InlineNode<'a> {
    /// Plain text between constructs, preserved verbatim.
    Text { text: &'a str },
    /// `[text](url)`
    Link { text: &'a str, url: &'a str },
    /// `` `text` `` - a raw zone, nothing inside is interpreted.
    Code { text: &'a str },
    /// `**text**`
    Strong { text: &'a str },
    /// `*text*`
    Emphasis { text: &'a str },
}

impl<'a> InlineNode<'a> {
    /// The literal text this node displays (link text for links).
    pub fn text(&self) -> &'a str {
        match *self {
            InlineNode::Text { text }
            | InlineNode::Link { text, .. }
            | InlineNode::Code { text }
            | InlineNode::Strong { text }
            | InlineNode::Emphasis { text } => text,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InlineNode::Text { .. })
    }
}

/// Concatenates the display text of all nodes, dropping markup delimiters.
pub fn plain_text(nodes: &[InlineNode<'_>]) -> String {
    nodes.iter().map(InlineNode::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_link_is_link_text() {
        let node = InlineNode::Link {
            text: "docs",
            url: "https://example.com",
        };
        assert_eq!(node.text(), "docs");
        assert!(!node.is_text());
    }

    #[test]
    fn plain_text_joins_in_order() {
        let nodes = [
            InlineNode::Text { text: "a " },
            InlineNode::Strong { text: "b" },
            InlineNode::Text { text: " c" },
        ];
        assert_eq!(plain_text(&nodes), "a b c");
    }
}

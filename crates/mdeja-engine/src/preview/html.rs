//! Static markup for render nodes.
//!
//! Every text node and attribute value is escaped here; callers can embed
//! the output without further escaping.

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use super::node::RenderNode;
use crate::inline::InlineNode;

/// URL schemes that are replaced by `#` in link targets.
const BLOCKED_SCHEMES: [&str; 2] = ["javascript:", "vbscript:"];

/// Renders nodes to markup, one top-level element per line.
pub fn render<'a>(nodes: impl IntoIterator<Item = RenderNode<'a>>) -> String {
    let mut out = String::new();
    for node in nodes {
        if !out.is_empty() {
            out.push('\n');
        }
        render_node(&node, &mut out);
    }
    out
}

pub fn render_node(node: &RenderNode<'_>, out: &mut String) {
    match node {
        RenderNode::Heading {
            anchor,
            level,
            children,
            ..
        } => {
            out.push_str(&format!("<h{level} id=\""));
            encode_double_quoted_attribute_to_string(anchor, out);
            out.push_str("\">");
            render_inline(children, out);
            out.push_str(&format!("</h{level}>"));
        }
        RenderNode::Paragraph { children, .. } => {
            out.push_str("<p>");
            render_inline(children, out);
            out.push_str("</p>");
        }
        RenderNode::BlockQuote {
            anchor, paragraphs, ..
        } => {
            out.push_str("<blockquote id=\"");
            encode_double_quoted_attribute_to_string(anchor, out);
            out.push_str("\">");
            for paragraph in paragraphs {
                out.push_str("<p>");
                render_inline(paragraph, out);
                out.push_str("</p>");
            }
            out.push_str("</blockquote>");
        }
        RenderNode::List { ordered, items, .. } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for item in items {
                out.push_str("<li>");
                render_inline(&item.children, out);
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        RenderNode::Rule { .. } => out.push_str("<hr>"),
        RenderNode::Code {
            anchor,
            language,
            text,
            ..
        } => {
            out.push_str("<pre id=\"");
            encode_double_quoted_attribute_to_string(anchor, out);
            out.push_str("\"><code");
            if !language.is_empty() {
                out.push_str(" class=\"language-");
                encode_double_quoted_attribute_to_string(language, out);
                out.push('"');
            }
            out.push('>');
            encode_text_to_string(text, out);
            out.push_str("</code></pre>");
        }
        RenderNode::Unsupported { type_name, .. } => {
            out.push_str("<p>Unsupported block type: ");
            encode_text_to_string(type_name, out);
            out.push_str("</p>");
        }
    }
}

pub fn render_inline(nodes: &[InlineNode<'_>], out: &mut String) {
    for node in nodes {
        match *node {
            InlineNode::Text { text } => {
                encode_text_to_string(text, out);
            }
            InlineNode::Link { text, url } => {
                out.push_str("<a href=\"");
                encode_double_quoted_attribute_to_string(safe_href(url), out);
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                encode_text_to_string(text, out);
                out.push_str("</a>");
            }
            InlineNode::Code { text } => wrap("code", text, out),
            InlineNode::Strong { text } => wrap("strong", text, out),
            InlineNode::Emphasis { text } => wrap("em", text, out),
        }
    }
}

fn wrap(tag: &str, text: &str, out: &mut String) {
    out.push_str(&format!("<{tag}>"));
    encode_text_to_string(text, out);
    out.push_str(&format!("</{tag}>"));
}

/// Link target with script schemes neutralized.
///
/// Browsers ignore embedded whitespace and control characters when reading
/// a scheme, so those are stripped before comparing.
fn safe_href(url: &str) -> &str {
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|s| scheme.starts_with(s)) {
        log::debug!("neutralized link target {url:?}");
        "#"
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, BlockKind, Document, HeadingLevel};
    use crate::preview::Preview;
    use insta::assert_snapshot;
    use rstest::rstest;

    fn inline(s: &str) -> String {
        let mut out = String::new();
        render_inline(&crate::inline::tokenize(s), &mut out);
        out
    }

    #[test]
    fn inline_markup() {
        assert_snapshot!(
            inline("a **b** *c* `d` [e](https://f.example)"),
            @r#"a <strong>b</strong> <em>c</em> <code>d</code> <a href="https://f.example" target="_blank" rel="noopener noreferrer">e</a>"#
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_snapshot!(
            inline("<script>alert(1)</script> & `<b>`"),
            @"&lt;script&gt;alert(1)&lt;/script&gt; &amp; <code>&lt;b&gt;</code>"
        );
    }

    #[test]
    fn link_attribute_is_escaped() {
        assert_snapshot!(
            inline(r#"[x](a"onmouseover="b)"#),
            @r#"<a href="a&quot;onmouseover=&quot;b" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[rstest]
    #[case("javascript:alert(1)")]
    #[case("JavaScript:alert(1)")]
    #[case(" javascript:alert(1)")]
    #[case("java\tscript:alert(1)")]
    #[case("vbscript:msgbox")]
    fn script_links_are_neutralized(#[case] url: &str) {
        assert_eq!(safe_href(url), "#");
    }

    #[rstest]
    #[case("https://example.com")]
    #[case("#preview-doc-title")]
    #[case("notes/javascript:guide")]
    fn ordinary_links_are_kept(#[case] url: &str) {
        assert_eq!(safe_href(url), url);
    }

    #[test]
    fn renders_every_block_kind() {
        let heading = Block::heading(HeadingLevel::new(2).unwrap(), "Intro");
        let code = Block::with_kind(BlockKind::Code {
            content: "if a < b {}".into(),
            language: "rust".into(),
        });
        let plain_code = Block::with_kind(BlockKind::Code {
            content: "*x*".into(),
            language: String::new(),
        });
        let ids = (heading.id, code.id, plain_code.id);
        let doc = Document::from_parts("T", vec![heading, code, plain_code]).unwrap();

        let html = render(Preview::of(&doc).nodes());
        let expected = [
            r#"<h1 id="preview-doc-title">T</h1>"#.to_string(),
            format!(r#"<h2 id="preview-block-{}">Intro</h2>"#, ids.0),
            format!(
                r#"<pre id="preview-block-{}"><code class="language-rust">if a &lt; b {{}}</code></pre>"#,
                ids.1
            ),
            format!(r#"<pre id="preview-block-{}"><code>*x*</code></pre>"#, ids.2),
        ]
        .join("\n");
        assert_eq!(html, expected);
    }

    #[test]
    fn renders_quotes_lists_rules_and_unknown_blocks() {
        let quote = Block::with_kind(BlockKind::Blockquote {
            content: "a\n\nb".into(),
        });
        let anchor = crate::preview::block_anchor(quote.id);
        let doc = Document::from_parts(
            "T",
            vec![
                quote,
                Block::with_kind(BlockKind::UnorderedList {
                    items: vec![crate::models::ListItem::new("x")],
                }),
                Block::with_kind(BlockKind::HorizontalRule),
                Block::with_kind(BlockKind::unsupported("<table>")),
            ],
        )
        .unwrap();

        let html = render(Preview::of(&doc).nodes().skip(1));
        assert_eq!(
            html,
            format!(
                "<blockquote id=\"{anchor}\"><p>a</p><p>b</p></blockquote>\n\
                 <ul><li>x</li></ul>\n\
                 <hr>\n\
                 <p>Unsupported block type: &lt;table&gt;</p>"
            )
        );
    }

    #[test]
    fn empty_paragraph_renders_empty_container() {
        let doc = Document::from_parts("T", vec![Block::paragraph("")]).unwrap();
        assert_snapshot!(render(Preview::of(&doc).nodes().skip(1)), @"<p></p>");
    }
}

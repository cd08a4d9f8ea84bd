//! Standalone HTML page generation.
//!
//! The page is self-contained: styles and the page-top script are inlined,
//! nothing is fetched. Block content comes from [`preview::html::render`],
//! which escapes its own text; the chrome escapes every value it inserts.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::options::ExportOptions;
use crate::models::Document;
use crate::preview::{self, OutlineEntry, Preview};

const PAGE_CSS: &str = r#"
:root{font-family:"Noto Sans JP","Segoe UI",sans-serif;line-height:1.5}
*,::after,::before{box-sizing:border-box}
body{margin:0;color:#1a1a1c;background-color:#f8f8fb}
a{color:#0024ce;text-underline-offset:2px}
p{margin-bottom:1rem}ul,ol{padding-left:2rem;margin-bottom:1rem}li{margin-bottom:.4rem}
hr{border:0;border-top:2px solid #0000be;margin:2rem 0}
pre{background-color:#f7f7f7;border:1px solid #ddd;padding:1rem;overflow-x:auto;border-radius:3px}
code{font-family:"SFMono-Regular",Consolas,Menlo,monospace;font-size:.9rem}
code:not(pre>code){background-color:#f0f0f0;padding:.2rem .4rem;border-radius:3px}
blockquote{border-left:4px solid #e0e0e0;padding:1rem 1.5rem;margin:1.5rem 0;background-color:#e8e8eb}
blockquote p:last-child{margin-bottom:0}
#header{background-color:#e8e8eb;border-bottom:1px solid #ccc}
header{max-width:80ch;padding:8px 24px;margin:0 auto;display:flex;justify-content:space-between;align-items:center}
header h2{margin:0;font-size:1.4rem}
nav{padding:15px;background-color:#f1f1f4;border-bottom:1px solid #eee}
nav h3{margin:0 0 10px;font-size:1.2rem}
nav ul{list-style-type:none;padding-left:8px;margin:0}nav ul li{margin:1rem 0}
main h1,main h2,main h3{margin-top:3rem;font-weight:500;letter-spacing:.04em}
main h2{border-bottom:1px solid #0000be}
main h3,main h4{padding-left:10px;border-left:4px solid #0000be}
#contents{max-width:80ch;padding:0 24px;margin:0 auto}
#pageTop{position:fixed;right:24px;bottom:24px;width:56px;height:56px;border:1px solid #0028b5;border-radius:50%;background-color:#fff;color:#0028b5;cursor:pointer}
#pageTop[hidden]{visibility:hidden}
@media print{#header,footer{display:none!important}}
"#;

/// Builds standalone HTML pages from documents.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    options: ExportOptions,
}

impl HtmlExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Renders `document` as a complete page.
    ///
    /// An empty title is replaced by the configured fallback title, both in
    /// the page `<title>` and in the synthetic heading.
    pub fn export(&self, document: &Document) -> String {
        let title = match document.title() {
            "" => self.options.fallback_title.as_str(),
            title => title,
        };
        let preview = Preview::new(title, document.blocks());
        let nav = self.nav(&preview.outline());
        let main = preview::html::render(preview.nodes());
        log::debug!(
            "exported {:?} ({} blocks) as html",
            title,
            document.len()
        );

        let o = &self.options;
        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{css}</style>
</head>
<body>
  <div id="header" tabindex="-1">
    <header>
      <h2>{page_heading}</h2>
      <button type="button" onclick="window.close()">{close_label}</button>
    </header>
  </div>
  <div id="contents">
    <nav>
      <h3>{nav_heading}</h3>
      {nav}
    </nav>
    <main>
{main}
    </main>
  </div>
  <footer>
    <button type="button" id="pageTop" aria-label="{page_top_label}">&#8593;</button>
    <script>{script}</script>
  </footer>
</body>
</html>
"#,
            lang = encode_double_quoted_attribute(&o.lang),
            title = encode_text(title),
            css = PAGE_CSS,
            page_heading = encode_text(&o.page_heading),
            close_label = encode_text(&o.close_label),
            nav_heading = encode_text(&o.nav_heading),
            page_top_label = encode_double_quoted_attribute(&o.page_top_label),
            script = page_top_script(o.scroll_threshold),
        )
    }

    fn nav(&self, outline: &[OutlineEntry<'_>]) -> String {
        let entries: String = outline
            .iter()
            .map(|entry| {
                format!(
                    r##"<li style="margin-left: {indent}px;"><a href="#{id}">{text}</a></li>"##,
                    indent = entry.indent_depth() * self.options.nav_indent_px,
                    id = encode_double_quoted_attribute(&entry.id),
                    text = encode_text(entry.text),
                )
            })
            .collect();
        format!("<ul>{entries}</ul>")
    }
}

/// Script that scrolls back up on click and hides the button near the top.
fn page_top_script(threshold: u32) -> String {
    format!(
        r#"
const pageTop = document.getElementById("pageTop");
pageTop.addEventListener("click", () => {{
  window.scroll({{ top: 0, behavior: "smooth" }});
  setTimeout(() => document.getElementById("header").focus(), 1000);
}});
const syncPageTop = () => {{ pageTop.hidden = window.scrollY <= {threshold}; }};
syncPageTop();
window.addEventListener("scroll", syncPageTop);
"#
    )
}

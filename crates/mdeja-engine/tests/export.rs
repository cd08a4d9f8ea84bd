use mdeja_engine::export::{ExportFormat, HtmlExporter, file_name};
use mdeja_engine::io::{DocumentStore, FileStore};
use mdeja_engine::models::Document;
use tempfile::TempDir;

const SAVED: &str = r#"{
  "title": "Release <notes> & plans",
  "blocks": [
    { "type": "heading", "level": 2, "content": "Done" },
    { "type": "unorderedList", "items": [
      { "content": "[site](https://example.com)" },
      { "content": "[bad](javascript:alert(1))" }
    ] },
    { "type": "heading", "level": 3, "content": "Next *up*" },
    { "type": "horizontalRule" }
  ]
}"#;

#[test]
fn saved_document_exports_to_standalone_page() {
    let temp = TempDir::new().unwrap();
    let doc = Document::from_json(SAVED).unwrap();
    let mut store = FileStore::new(temp.path().join("notes.json"));
    store.save(&doc).unwrap();

    let loaded = store.load().unwrap();
    let html = HtmlExporter::default().export(&loaded);
    let target = temp
        .path()
        .join(file_name(loaded.title(), ExportFormat::Html));
    std::fs::write(&target, &html).unwrap();

    assert!(target.ends_with("Release_notes_plans.html"));
    assert!(html.contains("<title>Release &lt;notes&gt; &amp; plans</title>"));
    assert!(html.contains(r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">site</a>"#));
    assert!(html.contains(r##"<a href="#" target="_blank" rel="noopener noreferrer">bad</a>"##));
    assert!(!html.contains("javascript:alert"));
    // Nav shows raw heading text, main content shows rendered markup.
    assert!(html.contains(">Next *up*</a></li>"));
    assert!(html.contains(">Next <em>up</em></h3>"));
    assert!(html.contains("<hr>"));
}

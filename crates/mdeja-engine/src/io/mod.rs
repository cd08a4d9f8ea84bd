use crate::models::{Document, ImportError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid document: {0}")]
    Import(#[from] ImportError),
    #[error("Nothing has been saved yet")]
    NothingSaved,
}

/// Where a document is persisted between sessions.
///
/// The engine never reads storage on its own; callers load a document,
/// hand it to an [`Editor`](crate::editing::Editor), and save it back.
pub trait DocumentStore {
    fn load(&self) -> Result<Document, IoError>;
    fn save(&mut self, document: &Document) -> Result<(), IoError>;
}

/// Read and validate a saved document
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path)?;
    Ok(Document::from_json(&json)?)
}

/// Write a document as pretty-printed JSON
pub fn write_document(path: &Path, document: &Document) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = document.to_json_pretty()?;
    fs::write(path, json)?;
    log::debug!("saved {:?} to {}", document.title(), path.display());
    Ok(())
}

/// A document stored as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document, IoError> {
        read_document(&self.path)
    }

    fn save(&mut self, document: &Document) -> Result<(), IoError> {
        write_document(&self.path, document)
    }
}

/// Keeps the serialized document in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved JSON, if any.
    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Document, IoError> {
        let json = self.json.as_deref().ok_or(IoError::NothingSaved)?;
        Ok(Document::from_json(json)?)
    }

    fn save(&mut self, document: &Document) -> Result<(), IoError> {
        self.json = Some(document.to_json_pretty()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, BlockKind, ListItem};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Document {
        Document::from_parts(
            "Saved",
            vec![
                Block::paragraph("hello"),
                Block::with_kind(BlockKind::OrderedList {
                    items: vec![ListItem::new("one")],
                }),
            ],
        )
        .unwrap()
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("doc.json");
        let mut store = FileStore::new(&path);

        assert!(!store.exists());
        store.save(&sample()).unwrap();
        assert!(store.exists());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn reload_preserves_ids() {
        let temp = TempDir::new().unwrap();
        let doc = sample();
        let mut store = FileStore::new(temp.path().join("doc.json"));
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.json");
        match FileStore::new(&path).load() {
            Err(IoError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_file_is_import_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FileStore::new(&path).load(),
            Err(IoError::Import(ImportError::Json(_)))
        ));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.load(), Err(IoError::NothingSaved)));

        let doc = sample();
        store.save(&doc).unwrap();
        assert!(store.json().unwrap().contains("\"orderedList\""));
        assert_eq!(store.load().unwrap(), doc);
    }
}

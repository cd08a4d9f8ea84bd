use crate::editing::commands::{insertion_index, swap_neighbour};
use crate::editing::{BlockUpdate, Cmd, Direction, EditError, Missing, Outcome, Patch};
use crate::models::{
    Block, BlockId, BlockKind, BlockType, Document, HeadingLevel, ImportError, ItemId, ListItem,
};

/// The live editing session: one document plus transient editor state.
///
/// The editor is the single writer of its document. Readers borrow the
/// document through [`Editor::document`] and derive previews from it.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    document: Document,
    /// List item that most recently asked for input focus.
    focused_item: Option<ItemId>,
    /// Incremented on every state-changing command (enables change detection)
    version: u64,
}

impl Editor {
    /// Starts a session on a fresh, empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_document(Document::new(title))
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            focused_item: None,
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn focused_item(&self) -> Option<ItemId> {
        self.focused_item
    }

    /// Returns and clears the focus token.
    pub fn take_focus(&mut self) -> Option<ItemId> {
        self.focused_item.take()
    }

    /// Replaces the whole document with a fresh empty one.
    pub fn new_document(&mut self, title: impl Into<String>) {
        self.replace_document(Document::new(title));
    }

    /// Replaces the whole document. `Document` values are valid by
    /// construction, so this cannot fail.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.focused_item = None;
        self.version += 1;
        log::debug!(
            "document replaced ({} blocks), version {}",
            self.document.len(),
            self.version
        );
    }

    /// Parses and validates `json` before swapping it in. On error the
    /// current document, focus and version are untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let document = Document::from_json(json).inspect_err(|e| {
            log::warn!("import rejected: {e}");
        })?;
        self.replace_document(document);
        Ok(())
    }

    /// Applies a command to the document.
    ///
    /// Errors leave the document unchanged. Unknown ids are reported through
    /// `Outcome::NotFound` rather than as errors.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let outcome = self.execute(cmd)?;
        match outcome {
            Outcome::NotFound(missing) => log::warn!("edit target not found: {missing:?}"),
            ref o if o.changed() => {
                self.version += 1;
                log::debug!("applied {o:?}, version {}", self.version);
            }
            _ => {}
        }
        Ok(Patch {
            outcome,
            version: self.version,
        })
    }

    fn execute(&mut self, cmd: Cmd) -> Result<Outcome, EditError> {
        match cmd {
            Cmd::SetTitle { title } => {
                self.document.set_title(title);
                Ok(Outcome::TitleChanged)
            }
            Cmd::InsertBlock { after, block_type } => {
                let block = Block::new(block_type);
                let id = block.id;
                let blocks = self.document.blocks_mut();
                let at = insertion_index(after, blocks.len());
                blocks.insert(at, block);
                Ok(Outcome::BlockInserted(id))
            }
            Cmd::UpdateBlock { id, update } => Ok(self.update_block_fields(id, update)),
            Cmd::DeleteBlock { id } => {
                let Some(index) = self.document.position(id) else {
                    return Ok(Outcome::NotFound(Missing::Block(id)));
                };
                let removed = self.document.blocks_mut().remove(index);
                if let (Some(focus), Some(items)) = (self.focused_item, removed.items())
                    && items.iter().any(|item| item.id == focus)
                {
                    self.focused_item = None;
                }
                Ok(Outcome::Deleted)
            }
            Cmd::MoveBlock { id, direction } => {
                let Some(index) = self.document.position(id) else {
                    return Ok(Outcome::NotFound(Missing::Block(id)));
                };
                if swap_neighbour(self.document.blocks_mut(), index, direction) {
                    Ok(Outcome::Moved)
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
            Cmd::InsertListItem { block, after } => {
                let Some(items) = self.list_items_mut(block)? else {
                    return Ok(Outcome::NotFound(Missing::Block(block)));
                };
                let item = ListItem::new(String::new());
                let id = item.id;
                let at = insertion_index(after, items.len());
                items.insert(at, item);
                self.focused_item = Some(id);
                Ok(Outcome::ItemInserted { block, item: id })
            }
            Cmd::UpdateListItem {
                block,
                item,
                content,
            } => {
                let Some(items) = self.list_items_mut(block)? else {
                    return Ok(Outcome::NotFound(Missing::Block(block)));
                };
                match items.iter_mut().find(|i| i.id == item) {
                    Some(target) => {
                        target.content = content;
                        Ok(Outcome::Updated)
                    }
                    None => Ok(Outcome::NotFound(Missing::Item { block, item })),
                }
            }
            Cmd::DeleteListItem { block, item } => {
                let Some(items) = self.list_items_mut(block)? else {
                    return Ok(Outcome::NotFound(Missing::Block(block)));
                };
                let Some(index) = items.iter().position(|i| i.id == item) else {
                    return Ok(Outcome::NotFound(Missing::Item { block, item }));
                };
                items.remove(index);
                if self.focused_item == Some(item) {
                    self.focused_item = None;
                }
                Ok(Outcome::Deleted)
            }
            Cmd::MoveListItem {
                block,
                item,
                direction,
            } => {
                let Some(items) = self.list_items_mut(block)? else {
                    return Ok(Outcome::NotFound(Missing::Block(block)));
                };
                let Some(index) = items.iter().position(|i| i.id == item) else {
                    return Ok(Outcome::NotFound(Missing::Item { block, item }));
                };
                if swap_neighbour(items, index, direction) {
                    Ok(Outcome::Moved)
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
        }
    }

    fn update_block_fields(&mut self, id: BlockId, update: BlockUpdate) -> Outcome {
        let Some(block) = self.document.blocks_mut().iter_mut().find(|b| b.id == id) else {
            return Outcome::NotFound(Missing::Block(id));
        };

        let mut applied = false;
        match &mut block.kind {
            BlockKind::Heading { content, level } => {
                if let Some(new_content) = update.content {
                    *content = new_content;
                    applied = true;
                }
                if let Some(new_level) = update.level {
                    *level = HeadingLevel::clamped(new_level);
                    applied = true;
                }
            }
            BlockKind::Paragraph { content } | BlockKind::Blockquote { content } => {
                if let Some(new_content) = update.content {
                    *content = new_content;
                    applied = true;
                }
            }
            BlockKind::Code { content, language } => {
                if let Some(new_content) = update.content {
                    *content = new_content;
                    applied = true;
                }
                if let Some(new_language) = update.language {
                    *language = new_language;
                    applied = true;
                }
            }
            BlockKind::OrderedList { .. }
            | BlockKind::UnorderedList { .. }
            | BlockKind::HorizontalRule
            | BlockKind::Unsupported { .. } => {}
        }

        if applied {
            Outcome::Updated
        } else {
            Outcome::Unchanged
        }
    }

    /// Items of list block `id`; `Ok(None)` when no such block exists.
    fn list_items_mut(&mut self, id: BlockId) -> Result<Option<&mut Vec<ListItem>>, EditError> {
        let Some(block) = self.document.blocks_mut().iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        let type_name = block.kind.type_name().to_string();
        match block.kind.items_mut() {
            Some(items) => Ok(Some(items)),
            None => Err(EditError::NotAList {
                block: id,
                type_name,
            }),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<Patch, EditError> {
        self.apply(Cmd::SetTitle {
            title: title.into(),
        })
    }

    pub fn insert_block(
        &mut self,
        after: Option<usize>,
        block_type: BlockType,
    ) -> Result<Patch, EditError> {
        self.apply(Cmd::InsertBlock { after, block_type })
    }

    /// Like [`Editor::insert_block`], taking a saved-document type name such
    /// as `"orderedList"`.
    pub fn insert_block_named(
        &mut self,
        after: Option<usize>,
        type_name: &str,
    ) -> Result<Patch, EditError> {
        let block_type = type_name.parse::<BlockType>()?;
        self.insert_block(after, block_type)
    }

    pub fn update_block(&mut self, id: BlockId, update: BlockUpdate) -> Result<Patch, EditError> {
        self.apply(Cmd::UpdateBlock { id, update })
    }

    pub fn delete_block(&mut self, id: BlockId) -> Result<Patch, EditError> {
        self.apply(Cmd::DeleteBlock { id })
    }

    pub fn move_block(&mut self, id: BlockId, direction: Direction) -> Result<Patch, EditError> {
        self.apply(Cmd::MoveBlock { id, direction })
    }

    pub fn insert_list_item(
        &mut self,
        block: BlockId,
        after: Option<usize>,
    ) -> Result<Patch, EditError> {
        self.apply(Cmd::InsertListItem { block, after })
    }

    pub fn update_list_item(
        &mut self,
        block: BlockId,
        item: ItemId,
        content: impl Into<String>,
    ) -> Result<Patch, EditError> {
        self.apply(Cmd::UpdateListItem {
            block,
            item,
            content: content.into(),
        })
    }

    pub fn delete_list_item(&mut self, block: BlockId, item: ItemId) -> Result<Patch, EditError> {
        self.apply(Cmd::DeleteListItem { block, item })
    }

    pub fn move_list_item(
        &mut self,
        block: BlockId,
        item: ItemId,
        direction: Direction,
    ) -> Result<Patch, EditError> {
        self.apply(Cmd::MoveListItem {
            block,
            item,
            direction,
        })
    }
}

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use mdeja_config::Config;
use mdeja_engine::editing::Missing;
use mdeja_engine::export::{self, ExportFormat, HtmlExporter};
use mdeja_engine::io::{DocumentStore, FileStore};
use mdeja_engine::preview::{self, Preview};
use mdeja_engine::{BlockKind, BlockUpdate, Document, Editor, Outcome, Patch};
use std::path::{Path, PathBuf};

use cli::{Cli, Command, FieldArgs, ItemCommand};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    run(cli.command, &config)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_else(|| {
        log::debug!("no config file found, resolving documents from the working directory");
        Config::new(".")
    }))
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::New {
            document,
            title,
            force,
        } => {
            let mut store = FileStore::new(config.resolve_document(&document));
            if store.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    store.path().display()
                );
            }
            store
                .save(&Document::new(title))
                .with_context(|| format!("Failed to create {}", store.path().display()))?;
            log::info!("created {}", store.path().display());
            Ok(())
        }
        Command::Show { document, html } => {
            let (_, doc) = open(config, &document)?;
            if html {
                println!("{}", preview::html::render(Preview::of(&doc).nodes()));
            } else {
                print!("{}", describe(&doc));
            }
            Ok(())
        }
        Command::Outline { document, json } => {
            let (_, doc) = open(config, &document)?;
            let outline = Preview::of(&doc).outline();
            if json {
                println!("{}", serde_json::to_string_pretty(&outline)?);
            } else {
                for entry in outline {
                    let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
                    println!("{indent}{} (#{})", entry.text, entry.id);
                }
            }
            Ok(())
        }
        Command::Add {
            document,
            block_type,
            after,
            fields,
        } => edit(config, &document, |editor| {
            let patch = editor.insert_block(after, block_type)?;
            if let Outcome::BlockInserted(id) = patch.outcome {
                println!("{id}");
                let update = block_update(fields);
                if !update.is_empty() {
                    return Ok(editor.update_block(id, update)?);
                }
            }
            Ok(patch)
        }),
        Command::Set {
            document,
            block,
            fields,
        } => edit(config, &document, |editor| {
            let id = block.resolve(editor.document())?;
            Ok(editor.update_block(id, block_update(fields))?)
        }),
        Command::Title { document, title } => {
            edit(config, &document, |editor| Ok(editor.set_title(title)?))
        }
        Command::Delete { document, block } => edit(config, &document, |editor| {
            let id = block.resolve(editor.document())?;
            Ok(editor.delete_block(id)?)
        }),
        Command::Move {
            document,
            block,
            direction,
        } => edit(config, &document, |editor| {
            let id = block.resolve(editor.document())?;
            Ok(editor.move_block(id, direction)?)
        }),
        Command::Item(command) => run_item(command, config),
        Command::Import { document, source } => {
            let json = std::fs::read_to_string(&source)
                .with_context(|| format!("Failed to read {}", source.display()))?;
            let mut store = FileStore::new(config.resolve_document(&document));
            let mut editor = match store.load() {
                Ok(doc) => Editor::with_document(doc),
                Err(mdeja_engine::IoError::NotFound(_)) => Editor::default(),
                Err(e) => return Err(e.into()),
            };
            editor
                .import_json(&json)
                .with_context(|| format!("Rejected {}", source.display()))?;
            store.save(editor.document())?;
            log::info!(
                "imported {} blocks into {}",
                editor.document().len(),
                store.path().display()
            );
            Ok(())
        }
        Command::Export {
            document,
            format,
            out,
        } => {
            let (store, doc) = open(config, &document)?;
            let contents = match format {
                ExportFormat::Html => HtmlExporter::new(config.export.clone()).export(&doc),
                ExportFormat::Json => doc.to_json_pretty()?,
                ExportFormat::Markdown => bail!("Markdown export is not supported"),
            };
            let target = out.unwrap_or_else(|| default_export_path(store.path(), &doc, format));
            std::fs::write(&target, contents)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            println!("{}", target.display());
            Ok(())
        }
    }
}

fn run_item(command: ItemCommand, config: &Config) -> Result<()> {
    match command {
        ItemCommand::Add {
            document,
            block,
            after,
            content,
        } => edit(config, &document, |editor| {
            let block = block.resolve(editor.document())?;
            let patch = editor.insert_list_item(block, after)?;
            let Some(item) = editor.take_focus() else {
                return Ok(patch);
            };
            println!("{item}");
            match content {
                Some(content) => Ok(editor.update_list_item(block, item, content)?),
                None => Ok(patch),
            }
        }),
        ItemCommand::Set {
            document,
            block,
            item,
            content,
        } => edit(config, &document, |editor| {
            let block = block.resolve(editor.document())?;
            let item = item.resolve(editor.document(), block)?;
            Ok(editor.update_list_item(block, item, content)?)
        }),
        ItemCommand::Delete {
            document,
            block,
            item,
        } => edit(config, &document, |editor| {
            let block = block.resolve(editor.document())?;
            let item = item.resolve(editor.document(), block)?;
            Ok(editor.delete_list_item(block, item)?)
        }),
        ItemCommand::Move {
            document,
            block,
            item,
            direction,
        } => edit(config, &document, |editor| {
            let block = block.resolve(editor.document())?;
            let item = item.resolve(editor.document(), block)?;
            Ok(editor.move_list_item(block, item, direction)?)
        }),
    }
}

fn open(config: &Config, document: &Path) -> Result<(FileStore, Document)> {
    let store = FileStore::new(config.resolve_document(document));
    let doc = store
        .load()
        .with_context(|| format!("Failed to open {}", store.path().display()))?;
    Ok((store, doc))
}

/// Loads a document, applies an edit and saves it back if any command in the
/// edit changed it.
fn edit(
    config: &Config,
    document: &Path,
    f: impl FnOnce(&mut Editor) -> Result<Patch>,
) -> Result<()> {
    let (mut store, doc) = open(config, document)?;
    let mut editor = Editor::with_document(doc);
    let patch = f(&mut editor)?;

    match patch.outcome {
        Outcome::NotFound(Missing::Block(id)) => bail!("no block with id {id}"),
        Outcome::NotFound(Missing::Item { block, item }) => {
            bail!("no item with id {item} in block {block}")
        }
        _ if editor.version() == 0 => log::info!("nothing to change"),
        _ => {
            store
                .save(editor.document())
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
            log::debug!(
                "saved {} at version {}",
                store.path().display(),
                editor.version()
            );
        }
    }
    Ok(())
}

fn block_update(fields: FieldArgs) -> BlockUpdate {
    BlockUpdate {
        content: fields.content,
        level: fields.level,
        language: fields.language,
    }
}

fn default_export_path(document: &Path, doc: &Document, format: ExportFormat) -> PathBuf {
    let name = export::file_name(doc.title(), format);
    match document.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// One line per block: position, id, type and a content summary.
fn describe(doc: &Document) -> String {
    let mut out = format!("# {}\n", doc.title());
    for (index, block) in doc.blocks().iter().enumerate() {
        let summary = match &block.kind {
            BlockKind::Heading { content, level } => format!("h{level} {content}"),
            BlockKind::Code { content, language } if !language.is_empty() => {
                format!("[{language}] {}", first_line(content))
            }
            kind => kind.content().map(first_line).unwrap_or_default().to_string(),
        };
        out.push_str(&format!(
            "{index:>3}  {}  {:<14} {summary}\n",
            block.id,
            block.kind.type_name()
        ));
        for (i, item) in block.items().unwrap_or_default().iter().enumerate() {
            out.push_str(&format!("       {i:>3}  {}  {}\n", item.id, item.content));
        }
    }
    out
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

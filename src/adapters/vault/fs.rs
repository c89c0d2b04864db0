/// Filesystem vault adapter
///
/// Implements the Vault port on a directory of Markdown notes. The active note
/// is either given explicitly or taken from the vault's workspace state file.
use crate::domain::NoteRef;
use crate::error::{AppError, Result};
use crate::ports::vault::Vault;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Workspace layout file written by the note-taking app
pub const WORKSPACE_FILE: &str = ".obsidian/workspace.json";

pub struct FsVault {
    root: PathBuf,
    active: Option<NoteRef>,
}

impl FsVault {
    /// Vault rooted at `root`, active note read from the workspace file
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            active: None,
        }
    }

    /// Use `path` as the active note instead of the workspace file
    pub fn with_active_note(mut self, path: &str) -> Self {
        self.active = Some(NoteRef::new(path));
        self
    }

    /// Absolute path for a vault-relative one. Paths leaving the vault are rejected.
    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let relative = Path::new(relative);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Note path must stay inside the vault: {}",
                relative.display()
            )));
        }
        Ok(self.root.join(relative))
    }

    async fn note_from_workspace(&self) -> Result<Option<NoteRef>> {
        let path = self.root.join(WORKSPACE_FILE);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let workspace: Value = serde_json::from_str(&contents)?;
        Ok(active_file(&workspace).map(NoteRef::new))
    }
}

/// File shown in the active leaf, else the most recent Markdown file
fn active_file(workspace: &Value) -> Option<String> {
    let from_leaf = workspace
        .get("active")
        .and_then(Value::as_str)
        .and_then(|id| find_leaf(workspace, id))
        .and_then(|leaf| leaf.pointer("/state/state/file"))
        .and_then(Value::as_str);

    if let Some(file) = from_leaf {
        return Some(file.to_string());
    }

    workspace
        .get("lastOpenFiles")
        .and_then(Value::as_array)?
        .iter()
        .filter_map(Value::as_str)
        .find(|f| f.ends_with(".md"))
        .map(str::to_string)
}

fn find_leaf<'a>(node: &'a Value, id: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => {
            if map.get("id").and_then(Value::as_str) == Some(id) {
                return Some(node);
            }
            map.values().find_map(|child| find_leaf(child, id))
        }
        Value::Array(items) => items.iter().find_map(|child| find_leaf(child, id)),
        _ => None,
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn active_note(&self) -> Result<Option<NoteRef>> {
        if let Some(note) = &self.active {
            return Ok(Some(note.clone()));
        }
        self.note_from_workspace().await
    }

    async fn read(&self, note: &NoteRef) -> Result<String> {
        let path = self.resolve(&note.path)?;
        Ok(tokio::fs::read_to_string(path).await?)
    }

    async fn create(&self, path: &str, content: &str) -> Result<NoteRef> {
        let full_path = self.resolve(path)?;
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(AppError::NoteExists(path.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        log::info!("Created note {}", path);
        Ok(NoteRef::new(path))
    }

    async fn modify(&self, note: &NoteRef, content: &str) -> Result<()> {
        let path = self.resolve(&note.path)?;
        tokio::fs::write(path, content).await?;
        log::info!("Updated note {}", note.path);
        Ok(())
    }
}

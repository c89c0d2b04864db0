/// Vault port trait
///
/// The host's document store: resolves the active note and reads, creates and
/// rewrites notes by vault-relative path.
use crate::domain::NoteRef;
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Vault: Send + Sync {
    /// Note the user is currently working on, if any
    async fn active_note(&self) -> Result<Option<NoteRef>>;

    /// Read a note's full text
    async fn read(&self, note: &NoteRef) -> Result<String>;

    /// Create a new note. Fails if the path already exists.
    async fn create(&self, path: &str, content: &str) -> Result<NoteRef>;

    /// Replace a note's full text
    async fn modify(&self, note: &NoteRef, content: &str) -> Result<()>;
}

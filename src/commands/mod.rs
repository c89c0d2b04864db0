/// Invokable commands
///
/// Each command catches its own failure, reports it through the notifier and
/// still returns it so the caller can set an exit status.
pub mod audio_review;
pub mod insight;
pub mod settings;

use crate::domain::NoteRef;
use crate::error::{AppError, Result};
use crate::ports::Vault;

/// Active note and its text. Fails on a missing note or blank content.
pub(crate) async fn read_active_note(vault: &dyn Vault) -> Result<(NoteRef, String)> {
    let note = vault.active_note().await?.ok_or(AppError::NoActiveNote)?;
    let content = vault.read(&note).await?;
    if content.trim().is_empty() {
        return Err(AppError::EmptyNote);
    }
    Ok((note, content))
}

//! AI insights and narrated audio reviews for Markdown note vaults.
//!
//! Two commands operate on the active note:
//! - `generate-insight`: asks the selected language model for an insight and
//!   writes it into a new note
//! - `generate-audio-review`: writes a narration script, synthesizes it,
//!   uploads the audio and embeds a player at the top of the note

pub mod adapters;
pub mod commands;
pub mod domain;
pub mod error;
pub mod ports;
pub mod state;

pub use error::{AppError, Result};
pub use state::AppState;

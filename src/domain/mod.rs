/// Domain layer - core models
///
/// These models are host-agnostic and contain no I/O.
pub mod documents;
pub mod models;
pub mod prompts;
pub mod settings;

pub use models::{AiProvider, InsightMode, NoteRef};
pub use prompts::PromptTemplates;
pub use settings::{FieldKind, SettingField, Settings, SETTING_FIELDS};

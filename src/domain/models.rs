/// Domain models for note-insight
///
/// These models represent core entities and are independent of any provider or host.
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Text-generation provider selectable for insights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    Google,
}

impl AiProvider {
    pub const ALL: [AiProvider; 3] = [
        AiProvider::OpenAi,
        AiProvider::Anthropic,
        AiProvider::Google,
    ];

    /// Parses the `selectedAI` setting value
    pub fn from_setting(value: &str) -> Result<Self> {
        match value {
            "openai" => Ok(AiProvider::OpenAi),
            "anthropic" => Ok(AiProvider::Anthropic),
            "google" => Ok(AiProvider::Google),
            other => Err(AppError::InvalidInput(format!("Unknown provider: {}", other))),
        }
    }

    pub fn as_setting(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Google => "google",
        }
    }
}

/// Kind of insight produced from a note
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InsightMode {
    Summary,
    KeyPoints,
    Questions,
    ActionItems,
    /// Fallback for unrecognised `insightType` values
    General,
}

impl InsightMode {
    /// Modes offered in the settings dropdown
    pub const SELECTABLE: [InsightMode; 4] = [
        InsightMode::Summary,
        InsightMode::KeyPoints,
        InsightMode::Questions,
        InsightMode::ActionItems,
    ];

    /// Parses the `insightType` setting value. Never fails.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "summary" => InsightMode::Summary,
            "key-points" => InsightMode::KeyPoints,
            "questions" => InsightMode::Questions,
            "action-items" => InsightMode::ActionItems,
            _ => InsightMode::General,
        }
    }

    pub fn as_setting(&self) -> &'static str {
        match self {
            InsightMode::Summary => "summary",
            InsightMode::KeyPoints => "key-points",
            InsightMode::Questions => "questions",
            InsightMode::ActionItems => "action-items",
            InsightMode::General => "general",
        }
    }

    /// Heading used in the generated insight note
    pub fn label(&self) -> &'static str {
        match self {
            InsightMode::Summary => "요약",
            InsightMode::KeyPoints => "주요 포인트",
            InsightMode::Questions => "관련 질문",
            InsightMode::ActionItems => "액션 아이템",
            InsightMode::General => "인사이트",
        }
    }
}

/// Reference to a note inside the vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRef {
    /// Vault-relative path using `/` separators
    pub path: String,
    /// File name without extension
    pub basename: String,
}

impl NoteRef {
    /// Creates a note reference from a vault-relative path
    pub fn new(path: impl Into<String>) -> Self {
        let path: String = path.into().replace('\\', "/");
        let path = path.trim_start_matches("./").trim_start_matches('/').to_string();
        let file_name = path.rsplit('/').next().unwrap_or(&path);
        let basename = match file_name.rfind('.') {
            Some(idx) if idx > 0 => &file_name[..idx],
            _ => file_name,
        }
        .to_string();

        Self { path, basename }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_round_trips_setting_value() {
        for provider in AiProvider::ALL {
            assert_eq!(AiProvider::from_setting(provider.as_setting()).unwrap(), provider);
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err = AiProvider::from_setting("mistral").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().contains("mistral"));
    }

    #[test]
    fn test_unknown_mode_falls_back_to_general() {
        assert_eq!(InsightMode::from_setting("poem"), InsightMode::General);
        assert_eq!(InsightMode::from_setting("key-points"), InsightMode::KeyPoints);
        assert_eq!(InsightMode::General.label(), "인사이트");
    }

    #[test]
    fn test_note_ref_basename() {
        let note = NoteRef::new("Projects/Project X.md");
        assert_eq!(note.path, "Projects/Project X.md");
        assert_eq!(note.basename, "Project X");

        let note = NoteRef::new("./daily\\2024.01.05.md");
        assert_eq!(note.path, "daily/2024.01.05.md");
        assert_eq!(note.basename, "2024.01.05");

        assert_eq!(NoteRef::new(".hidden").basename, ".hidden");
    }
}

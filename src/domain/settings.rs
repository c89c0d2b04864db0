//! Plugin settings record and its editable field descriptors
//!
//! Every field is a plain string. Values are only interpreted where they are
//! used, so an empty or malformed key is accepted here and fails later at the
//! provider call.

use crate::domain::models::{AiProvider, InsightMode};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Provider credentials and user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    /// Gemini API key
    pub google_api_key: String,

    pub eleven_labs_api_key: String,
    pub eleven_labs_voice_id: String,

    /// OAuth access token for Google Drive
    pub google_access_token: String,

    #[serde(rename = "selectedAI")]
    pub selected_ai: String,
    pub insight_type: String,
    pub gemini_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            anthropic_api_key: String::new(),
            google_api_key: String::new(),
            eleven_labs_api_key: String::new(),
            eleven_labs_voice_id: String::new(),
            google_access_token: String::new(),
            selected_ai: AiProvider::Google.as_setting().to_string(),
            insight_type: InsightMode::Summary.as_setting().to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl Settings {
    /// Selected insight provider
    pub fn provider(&self) -> Result<AiProvider> {
        AiProvider::from_setting(&self.selected_ai)
    }

    /// Selected insight mode
    pub fn insight_mode(&self) -> InsightMode {
        InsightMode::from_setting(&self.insight_type)
    }

    /// Gemini model, falling back to the default when left blank
    pub fn gemini_model(&self) -> &str {
        if self.gemini_model.is_empty() {
            DEFAULT_GEMINI_MODEL
        } else {
            &self.gemini_model
        }
    }

    /// Reads a field by its persisted key
    pub fn get(&self, key: &str) -> Result<&str> {
        let value = match key {
            "openaiApiKey" => &self.openai_api_key,
            "anthropicApiKey" => &self.anthropic_api_key,
            "googleApiKey" => &self.google_api_key,
            "elevenLabsApiKey" => &self.eleven_labs_api_key,
            "elevenLabsVoiceId" => &self.eleven_labs_voice_id,
            "googleAccessToken" => &self.google_access_token,
            "selectedAI" => &self.selected_ai,
            "insightType" => &self.insight_type,
            "geminiModel" => &self.gemini_model,
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Overwrites a field by its persisted key. The value is not validated.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let slot = match key {
            "openaiApiKey" => &mut self.openai_api_key,
            "anthropicApiKey" => &mut self.anthropic_api_key,
            "googleApiKey" => &mut self.google_api_key,
            "elevenLabsApiKey" => &mut self.eleven_labs_api_key,
            "elevenLabsVoiceId" => &mut self.eleven_labs_voice_id,
            "googleAccessToken" => &mut self.google_access_token,
            "selectedAI" => &mut self.selected_ai,
            "insightType" => &mut self.insight_type,
            "geminiModel" => &mut self.gemini_model,
            other => return Err(unknown_key(other)),
        };
        *slot = value.into();
        Ok(())
    }
}

fn unknown_key(key: &str) -> AppError {
    AppError::InvalidInput(format!("Unknown setting: {}", key))
}

/// How a field is edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        placeholder: &'static str,
        secret: bool,
    },
    Dropdown {
        options: &'static [(&'static str, &'static str)],
    },
}

/// Descriptor for one editable setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingField {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub section: &'static str,
    pub kind: FieldKind,
}

impl SettingField {
    pub fn is_secret(&self) -> bool {
        matches!(self.kind, FieldKind::Text { secret: true, .. })
    }
}

const GENERAL: &str = "AI Insight & Audio Review Settings";
const API_KEYS: &str = "API Keys";
const AUDIO_REVIEW: &str = "Audio Review Settings (ElevenLabs & Drive)";

/// Editable fields, in display order
pub const SETTING_FIELDS: &[SettingField] = &[
    SettingField {
        key: "selectedAI",
        name: "기본 AI 서비스",
        description: "인사이트 생성에 사용할 기본 AI를 선택하세요",
        section: GENERAL,
        kind: FieldKind::Dropdown {
            options: &[
                ("openai", "ChatGPT (OpenAI)"),
                ("anthropic", "Claude (Anthropic)"),
                ("google", "Gemini (Google)"),
            ],
        },
    },
    SettingField {
        key: "insightType",
        name: "인사이트 유형",
        description: "생성할 인사이트의 종류를 선택하세요",
        section: GENERAL,
        kind: FieldKind::Dropdown {
            options: &[
                ("summary", "요약"),
                ("key-points", "주요 포인트"),
                ("questions", "관련 질문"),
                ("action-items", "액션 아이템"),
            ],
        },
    },
    SettingField {
        key: "googleApiKey",
        name: "Gemini API Key",
        description: "Google AI Studio에서 발급받은 키 (Audio Review 스크립트 생성에 필수)",
        section: API_KEYS,
        kind: FieldKind::Text {
            placeholder: "AIza...",
            secret: true,
        },
    },
    SettingField {
        key: "geminiModel",
        name: "Gemini Model Name",
        description: "사용할 Gemini 모델명 (예: gemini-1.5-flash)",
        section: API_KEYS,
        kind: FieldKind::Text {
            placeholder: DEFAULT_GEMINI_MODEL,
            secret: false,
        },
    },
    SettingField {
        key: "openaiApiKey",
        name: "OpenAI API Key",
        description: "ChatGPT 사용 시 필요",
        section: API_KEYS,
        kind: FieldKind::Text {
            placeholder: "sk-...",
            secret: true,
        },
    },
    SettingField {
        key: "anthropicApiKey",
        name: "Anthropic API Key",
        description: "Claude 사용 시 필요",
        section: API_KEYS,
        kind: FieldKind::Text {
            placeholder: "sk-ant-...",
            secret: true,
        },
    },
    SettingField {
        key: "elevenLabsApiKey",
        name: "ElevenLabs API Key",
        description: "음성 합성을 위한 ElevenLabs API 키",
        section: AUDIO_REVIEW,
        kind: FieldKind::Text {
            placeholder: "xi-...",
            secret: true,
        },
    },
    SettingField {
        key: "elevenLabsVoiceId",
        name: "ElevenLabs Voice ID",
        description: "사용할 목소리의 Voice ID",
        section: AUDIO_REVIEW,
        kind: FieldKind::Text {
            placeholder: "예: 21m00Tcm4TlvDq8ikWAM",
            secret: false,
        },
    },
    SettingField {
        key: "googleAccessToken",
        name: "Google Drive Access Token",
        description: "오디오 파일 업로드를 위한 Google OAuth Access Token (Bearer 제외)",
        section: AUDIO_REVIEW,
        kind: FieldKind::Text {
            placeholder: "ya29.a0...",
            secret: true,
        },
    },
];

/// Looks up a field descriptor by key
pub fn field(key: &str) -> Option<&'static SettingField> {
    SETTING_FIELDS.iter().find(|f| f.key == key)
}

/// Masks a secret, showing only the last 4 characters
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 4 {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("...{}", tail)
    } else {
        "...".to_string()
    }
}

//! Mock implementations for testing
//!
//! Every mock can share one `CallLog`, so tests can assert the exact order in
//! which ports were used across a pipeline.

use crate::domain::{AiProvider, NoteRef, Settings};
use crate::error::{AppError, Result};
use crate::ports::{
    AudioStorage, Notifier, ProgressNotice, ProviderFactory, SpeechSynthesizer, TextGenerator,
    Vault,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Ordered record of port calls
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls whose name starts with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}

/// Text generator returning a canned reply
#[derive(Clone)]
pub struct MockGenerator {
    name: String,
    reply: std::result::Result<String, String>,
    log: CallLog,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn replying(name: &str, reply: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            reply: Ok(reply.to_string()),
            log: log.clone(),
            prompts: Arc::default(),
        }
    }

    pub fn failing(name: &str, error: &str, log: &CallLog) -> Self {
        Self {
            reply: Err(error.to_string()),
            ..Self::replying(name, "", log)
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.log.push(format!("generate:{}", self.name));
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(AppError::Llm)
    }

    fn provider_name(&self) -> &str {
        &self.name
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Speech synthesizer returning canned audio
#[derive(Clone)]
pub struct MockSpeech {
    reply: std::result::Result<Vec<u8>, String>,
    log: CallLog,
    texts: Arc<Mutex<Vec<String>>>,
}

impl MockSpeech {
    pub fn replying(audio: &[u8], log: &CallLog) -> Self {
        Self {
            reply: Ok(audio.to_vec()),
            log: log.clone(),
            texts: Arc::default(),
        }
    }

    pub fn failing(error: &str, log: &CallLog) -> Self {
        Self {
            reply: Err(error.to_string()),
            ..Self::replying(&[], log)
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeech {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        self.log.push("synthesize");
        self.texts.lock().unwrap().push(text.to_string());
        self.reply.clone().map_err(AppError::Speech)
    }

    fn provider_name(&self) -> &str {
        "mock-speech"
    }
}

/// Audio storage returning a canned object id
#[derive(Clone)]
pub struct MockStorage {
    upload_reply: std::result::Result<String, String>,
    grant_reply: std::result::Result<(), String>,
    log: CallLog,
    uploads: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl MockStorage {
    pub fn returning_id(file_id: &str, log: &CallLog) -> Self {
        Self {
            upload_reply: Ok(file_id.to_string()),
            grant_reply: Ok(()),
            log: log.clone(),
            uploads: Arc::default(),
        }
    }

    pub fn failing_upload(error: &str, log: &CallLog) -> Self {
        Self {
            upload_reply: Err(error.to_string()),
            ..Self::returning_id("", log)
        }
    }

    pub fn failing_grant(file_id: &str, error: &str, log: &CallLog) -> Self {
        Self {
            grant_reply: Err(error.to_string()),
            ..Self::returning_id(file_id, log)
        }
    }

    pub fn uploads(&self) -> Vec<(String, Vec<u8>)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioStorage for MockStorage {
    async fn upload(&self, audio: Vec<u8>, file_name: &str) -> Result<String> {
        self.log.push("upload");
        self.uploads
            .lock()
            .unwrap()
            .push((file_name.to_string(), audio));
        self.upload_reply.clone().map_err(AppError::Upload)
    }

    async fn grant_public_read(&self, file_id: &str) -> Result<()> {
        self.log.push(format!("grant:{}", file_id));
        self.grant_reply.clone().map_err(AppError::Upload)
    }

    fn public_url(&self, file_id: &str) -> String {
        format!("https://storage.test/{}", file_id)
    }
}

/// In-memory vault
#[derive(Clone, Default)]
pub struct InMemoryVault {
    notes: Arc<Mutex<BTreeMap<String, String>>>,
    active: Option<String>,
    log: CallLog,
}

impl InMemoryVault {
    pub fn with_active_note(path: &str, content: &str, log: &CallLog) -> Self {
        let vault = Self {
            active: Some(path.to_string()),
            log: log.clone(),
            ..Self::default()
        };
        vault.put(path, content);
        vault
    }

    pub fn without_active_note(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            ..Self::default()
        }
    }

    /// Write a note without recording a call, e.g. to simulate an external edit
    pub fn put(&self, path: &str, content: &str) {
        self.notes
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.notes.lock().unwrap().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.notes.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl Vault for InMemoryVault {
    async fn active_note(&self) -> Result<Option<NoteRef>> {
        Ok(self.active.as_deref().map(NoteRef::new))
    }

    async fn read(&self, note: &NoteRef) -> Result<String> {
        self.log.push(format!("read:{}", note.path));
        self.get(&note.path)
            .ok_or_else(|| AppError::Io(std::io::ErrorKind::NotFound.into()))
    }

    async fn create(&self, path: &str, content: &str) -> Result<NoteRef> {
        self.log.push(format!("create:{}", path));
        let mut notes = self.notes.lock().unwrap();
        if notes.contains_key(path) {
            return Err(AppError::NoteExists(path.to_string()));
        }
        notes.insert(path.to_string(), content.to_string());
        Ok(NoteRef::new(path))
    }

    async fn modify(&self, note: &NoteRef, content: &str) -> Result<()> {
        self.log.push(format!("modify:{}", note.path));
        self.put(&note.path, content);
        Ok(())
    }
}

/// Notifier that records every message
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }
}

struct RecordingNotice {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ProgressNotice for RecordingNotice {
    fn set_message(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("progress:{}", message));
    }

    fn hide(&self) {
        self.messages.lock().unwrap().push("progress:hidden".to_string());
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn progress(&self, message: &str) -> Box<dyn ProgressNotice> {
        let notice = RecordingNotice {
            messages: self.messages.clone(),
        };
        notice.set_message(message);
        Box::new(notice)
    }
}

/// Provider factory handing out the configured mocks
#[derive(Clone)]
pub struct MockProviders {
    pub openai: MockGenerator,
    pub anthropic: MockGenerator,
    pub google: MockGenerator,
    pub speech: MockSpeech,
    pub storage: MockStorage,
}

impl MockProviders {
    /// Every provider succeeds
    pub fn happy(log: &CallLog) -> Self {
        Self {
            openai: MockGenerator::replying("openai", "openai says", log),
            anthropic: MockGenerator::replying("anthropic", "anthropic says", log),
            google: MockGenerator::replying("google", "google says", log),
            speech: MockSpeech::replying(b"ID3-audio", log),
            storage: MockStorage::returning_id("abc123", log),
        }
    }
}

impl ProviderFactory for MockProviders {
    fn text_generator(&self, provider: AiProvider, _settings: &Settings) -> Box<dyn TextGenerator> {
        match provider {
            AiProvider::OpenAi => Box::new(self.openai.clone()),
            AiProvider::Anthropic => Box::new(self.anthropic.clone()),
            AiProvider::Google => Box::new(self.google.clone()),
        }
    }

    fn speech_synthesizer(&self, _settings: &Settings) -> Box<dyn SpeechSynthesizer> {
        Box::new(self.speech.clone())
    }

    fn audio_storage(&self, _settings: &Settings) -> Box<dyn AudioStorage> {
        Box::new(self.storage.clone())
    }
}

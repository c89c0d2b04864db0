//! Audio review command
//!
//! Pipeline over the active note, one stage after another:
//! 1. Narration script from the Google-family generator
//! 2. Speech synthesis
//! 3. Upload, then public read permission
//! 4. Playback URL from the uploaded object's id
//! 5. Audio player prepended to the note
//!
//! The first failing stage ends the run. Completed stages are not undone.

use crate::commands::read_active_note;
use crate::domain::{documents, NoteRef, PromptTemplates, Settings};
use crate::error::Result;
use crate::ports::notifier::{self, ProgressNotice};
use crate::ports::{AudioStorage, SpeechSynthesizer, TextGenerator, Vault};
use crate::state::AppState;
use chrono::Utc;
use std::time::Duration;

pub const COMMAND_ID: &str = "generate-audio-review";
pub const COMMAND_NAME: &str = "Generate Audio Review (Gemini + ElevenLabs + Drive)";

/// How long the final progress message stays up
pub const NOTICE_DISMISS_DELAY: Duration = Duration::from_secs(5);

const START_MESSAGE: &str = "Audio Review 시작...";
const DONE_MESSAGE: &str = "완료! 오디오 리뷰가 생성되었습니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioReviewStage {
    Script,
    Speech,
    Upload,
    Embed,
}

impl AudioReviewStage {
    pub fn progress_message(&self) -> &'static str {
        match self {
            AudioReviewStage::Script => "Step 1/5: Gemini가 스크립트 작성 중...",
            AudioReviewStage::Speech => "Step 2/5: ElevenLabs 음성 생성 중...",
            AudioReviewStage::Upload => "Step 3/5: Google Drive 업로드 중...",
            AudioReviewStage::Embed => "Step 4/5: 노트에 플레이어 삽입 중...",
        }
    }
}

pub struct AudioReviewPipeline<'a> {
    script_writer: &'a dyn TextGenerator,
    synthesizer: &'a dyn SpeechSynthesizer,
    storage: &'a dyn AudioStorage,
    vault: &'a dyn Vault,
}

impl<'a> AudioReviewPipeline<'a> {
    pub fn new(
        script_writer: &'a dyn TextGenerator,
        synthesizer: &'a dyn SpeechSynthesizer,
        storage: &'a dyn AudioStorage,
        vault: &'a dyn Vault,
    ) -> Self {
        Self {
            script_writer,
            synthesizer,
            storage,
            vault,
        }
    }

    /// Runs every stage for `note` and returns the playback URL.
    ///
    /// `content` feeds the script only; the note is read again right before
    /// the player is inserted.
    pub async fn run(
        &self,
        note: &NoteRef,
        content: &str,
        stamp_millis: i64,
        progress: &dyn ProgressNotice,
    ) -> Result<String> {
        progress.set_message(AudioReviewStage::Script.progress_message());
        let script = self
            .script_writer
            .generate(&PromptTemplates::narration_script(content))
            .await?;

        progress.set_message(AudioReviewStage::Speech.progress_message());
        let audio = self.synthesizer.synthesize(&script).await?;

        progress.set_message(AudioReviewStage::Upload.progress_message());
        let file_name = documents::audio_file_name(&note.basename, stamp_millis);
        let url = self.publish(audio, &file_name).await?;

        progress.set_message(AudioReviewStage::Embed.progress_message());
        self.embed(note, &url).await?;

        Ok(url)
    }

    async fn publish(&self, audio: Vec<u8>, file_name: &str) -> Result<String> {
        let file_id = self.storage.upload(audio, file_name).await?;
        self.storage.grant_public_read(&file_id).await?;
        Ok(self.storage.public_url(&file_id))
    }

    async fn embed(&self, note: &NoteRef, url: &str) -> Result<()> {
        let current = self.vault.read(note).await?;
        let updated = format!("{}{}", documents::audio_player_embed(url), current);
        self.vault.modify(note, &updated).await
    }
}

/// Runs the audio review command and reports progress to the user
pub async fn generate_audio_review(state: &AppState, settings: &Settings) -> Result<String> {
    let (note, content) = match read_active_note(state.vault.as_ref()).await {
        Ok(active) => active,
        Err(e) => {
            state.notifier.notify(&e.to_string());
            return Err(e);
        }
    };

    let progress = state.notifier.progress(START_MESSAGE);

    let script_writer = state.providers.script_writer(settings);
    let synthesizer = state.providers.speech_synthesizer(settings);
    let storage = state.providers.audio_storage(settings);
    let pipeline = AudioReviewPipeline::new(
        script_writer.as_ref(),
        synthesizer.as_ref(),
        storage.as_ref(),
        state.vault.as_ref(),
    );

    log::info!("Starting audio review for {}", note.path);
    let result = pipeline
        .run(
            &note,
            &content,
            Utc::now().timestamp_millis(),
            progress.as_ref(),
        )
        .await;

    match &result {
        Ok(url) => {
            log::info!("Audio review embedded in {}: {}", note.path, url);
            progress.set_message(DONE_MESSAGE);
        }
        Err(e) => {
            log::error!("Audio review failed for {}: {}", note.path, e);
            progress.set_message(&format!("오류 발생: {}", e));
        }
    }
    notifier::dismiss_after(progress, NOTICE_DISMISS_DELAY);

    result
}

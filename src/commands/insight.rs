//! Insight command
//!
//! Reads the active note, asks the selected provider for an insight of the
//! configured mode and writes it into a new note next to the vault root.

use crate::commands::read_active_note;
use crate::domain::{documents, InsightMode, NoteRef, PromptTemplates, Settings};
use crate::error::Result;
use crate::ports::{TextGenerator, Vault};
use crate::state::AppState;
use chrono::{NaiveDate, Utc};

pub const COMMAND_ID: &str = "generate-insight";
pub const COMMAND_NAME: &str = "Generate Insight from Current Note";

/// Produces one insight note from a source note
pub struct InsightGenerator<'a> {
    generator: &'a dyn TextGenerator,
    vault: &'a dyn Vault,
}

impl<'a> InsightGenerator<'a> {
    pub fn new(generator: &'a dyn TextGenerator, vault: &'a dyn Vault) -> Self {
        Self { generator, vault }
    }

    /// Generates the insight and creates the note. `content` must not be blank.
    pub async fn generate(
        &self,
        source: &NoteRef,
        content: &str,
        mode: InsightMode,
        date: NaiveDate,
    ) -> Result<NoteRef> {
        log::info!(
            "Generating {} insight for {} with {}",
            mode.as_setting(),
            source.path,
            self.generator.provider_name()
        );
        if !self.generator.is_configured() {
            log::warn!("No API key set for {}", self.generator.provider_name());
        }

        let prompt = PromptTemplates::insight(mode, content);
        let insight = self.generator.generate(&prompt).await?;

        let name = documents::insight_note_name(&source.basename, date);
        let body = documents::insight_note_body(&source.basename, mode, &insight);
        self.vault.create(&name, &body).await
    }
}

/// Runs the insight command and reports the outcome to the user
pub async fn generate_insight(state: &AppState, settings: &Settings) -> Result<NoteRef> {
    let result = run(state, settings, Utc::now().date_naive()).await;

    match &result {
        Ok(note) => state.notifier.notify(&format!(
            "새로운 인사이트 노트가 생성되었습니다: {}",
            note.path
        )),
        Err(e) if e.is_precondition() => state.notifier.notify(&e.to_string()),
        Err(e) => {
            log::error!("Insight generation failed: {}", e);
            state
                .notifier
                .notify(&format!("인사이트 생성 중 오류 발생: {}", e));
        }
    }

    result
}

async fn run(state: &AppState, settings: &Settings, today: NaiveDate) -> Result<NoteRef> {
    let (note, content) = read_active_note(state.vault.as_ref()).await?;
    let provider = settings.provider()?;
    let generator = state.providers.text_generator(provider, settings);

    InsightGenerator::new(generator.as_ref(), state.vault.as_ref())
        .generate(&note, &content, settings.insight_mode(), today)
        .await
}

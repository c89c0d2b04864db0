/// Provider selection port
///
/// Maps settings to concrete adapters. The narration script writer is always
/// the Google-family generator, whatever `selectedAI` says.
use crate::domain::{AiProvider, Settings};
use crate::ports::{AudioStorage, SpeechSynthesizer, TextGenerator};

pub trait ProviderFactory: Send + Sync {
    /// Generator for the insight pipeline
    fn text_generator(&self, provider: AiProvider, settings: &Settings) -> Box<dyn TextGenerator>;

    /// Generator for the audio-review narration script
    fn script_writer(&self, settings: &Settings) -> Box<dyn TextGenerator> {
        self.text_generator(AiProvider::Google, settings)
    }

    fn speech_synthesizer(&self, settings: &Settings) -> Box<dyn SpeechSynthesizer>;

    fn audio_storage(&self, settings: &Settings) -> Box<dyn AudioStorage>;
}

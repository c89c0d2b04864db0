/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod cloud;
pub mod llm;
pub mod notifier;
pub mod providers;
pub mod settings;
pub mod speech;
pub mod vault;

#[cfg(test)]
pub mod mocks;

pub use cloud::AudioStorage;
pub use llm::TextGenerator;
pub use notifier::{Notifier, ProgressNotice};
pub use providers::ProviderFactory;
pub use settings::SettingsStore;
pub use speech::SpeechSynthesizer;
pub use vault::Vault;

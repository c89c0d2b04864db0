/// Settings persistence port trait
use crate::domain::Settings;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for the persisted settings blob
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored values merged over defaults
    async fn load(&self) -> Result<Settings>;

    /// Persist the entire record
    async fn save(&self, settings: &Settings) -> Result<()>;
}

/// JSON file settings adapter
///
/// Implements SettingsStore on a single `data.json` file, the blob a plugin
/// host keeps per plugin.
use crate::domain::Settings;
use crate::error::Result;
use crate::ports::settings::SettingsStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Default location of the settings blob inside a vault
pub const DEFAULT_SETTINGS_PATH: &str = ".obsidian/plugins/ai-insight/data.json";

pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under `vault_root`
    pub fn in_vault(vault_root: &Path) -> Self {
        Self::new(vault_root.join(DEFAULT_SETTINGS_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> Result<Settings> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "No settings at {}, using defaults",
                    self.path.display()
                );
                return Ok(Settings::default());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        // Missing keys fall back to their defaults field by field.
        let settings: Settings = serde_json::from_str(&contents)?;
        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.path, json).await?;
        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

//! Settings management commands

use crate::domain::settings::{field, mask_secret};
use crate::domain::{FieldKind, Settings, SETTING_FIELDS};
use crate::error::{AppError, Result};
use crate::ports::SettingsStore;

/// Loads the stored settings, defaults filling anything missing
pub async fn load_settings(store: &dyn SettingsStore) -> Result<Settings> {
    store.load().await
}

/// Changes one field and saves the whole record right away
pub async fn update_setting(
    store: &dyn SettingsStore,
    settings: &mut Settings,
    key: &str,
    value: &str,
) -> Result<()> {
    settings.set(key, value)?;
    store.save(settings).await?;
    log::info!("Setting {} updated", key);
    Ok(())
}

/// Current values, one `key = value` line per field, secrets masked
pub fn render_settings(settings: &Settings) -> Result<String> {
    let mut lines = Vec::with_capacity(SETTING_FIELDS.len());
    for descriptor in SETTING_FIELDS {
        let value = settings.get(descriptor.key)?;
        let shown = if descriptor.is_secret() {
            mask_secret(value)
        } else {
            value.to_string()
        };
        lines.push(format!("{} = {}", descriptor.key, shown));
    }
    Ok(lines.join("\n"))
}

/// Editable fields grouped by section
pub fn render_fields() -> String {
    let mut out = String::new();
    let mut section = "";

    for descriptor in SETTING_FIELDS {
        if descriptor.section != section {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", descriptor.section));
            section = descriptor.section;
        }

        out.push_str(&format!(
            "{} ({}): {}\n",
            descriptor.key, descriptor.name, descriptor.description
        ));
        match &descriptor.kind {
            FieldKind::Text { placeholder, .. } => {
                out.push_str(&format!("    placeholder: {}\n", placeholder));
            }
            FieldKind::Dropdown { options } => {
                for (value, label) in options.iter() {
                    out.push_str(&format!("    {} = {}\n", value, label));
                }
            }
        }
    }

    out
}

/// Descriptor for `key`, or an error naming the unknown key
pub fn describe(key: &str) -> Result<String> {
    let descriptor =
        field(key).ok_or_else(|| AppError::InvalidInput(format!("Unknown setting: {}", key)))?;
    Ok(format!("{}: {}", descriptor.name, descriptor.description))
}

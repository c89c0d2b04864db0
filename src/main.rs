//! note-insight: AI insights and audio reviews for a Markdown vault.

use anyhow::Context;
use clap::{Parser, Subcommand};
use note_insight::adapters::notify::ConsoleNotifier;
#[cfg(all(unix, not(target_os = "macos")))]
use note_insight::adapters::notify::DesktopNotifier;
use note_insight::adapters::services::{http, HttpProviders};
use note_insight::adapters::storage::JsonSettingsStore;
use note_insight::adapters::vault::FsVault;
use note_insight::commands::{audio_review, insight, settings};
use note_insight::ports::Notifier;
use note_insight::AppState;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "note-insight",
    version,
    about = "AI insights and narrated audio reviews for Markdown notes"
)]
struct Args {
    /// Vault root directory
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    /// Settings file (default: <vault>/.obsidian/plugins/ai-insight/data.json)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Vault-relative note to use instead of the workspace's active note
    #[arg(long)]
    note: Option<String>,

    /// Print notices to the terminal instead of desktop notifications
    #[arg(long)]
    console: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = insight::COMMAND_ID, about = insight::COMMAND_NAME)]
    GenerateInsight,

    #[command(name = audio_review::COMMAND_ID, about = audio_review::COMMAND_NAME)]
    GenerateAudioReview,

    /// Inspect or change the stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// List the editable fields
    Fields,

    /// Print the current values, secrets masked
    Show,

    /// Change one field and save
    Set { key: String, value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let store = match &args.settings {
        Some(path) => JsonSettingsStore::new(path),
        None => JsonSettingsStore::in_vault(&args.vault),
    };
    let mut current = settings::load_settings(&store)
        .await
        .with_context(|| format!("Failed to load settings from {}", store.path().display()))?;

    match args.command {
        Command::Settings { action } => match action {
            SettingsAction::Fields => print!("{}", settings::render_fields()),
            SettingsAction::Show => println!("{}", settings::render_settings(&current)?),
            SettingsAction::Set { key, value } => {
                settings::update_setting(&store, &mut current, &key, &value).await?;
                println!("Saved {}", settings::describe(&key)?);
            }
        },
        Command::GenerateInsight => {
            let state = build_state(&args.vault, args.note.as_deref(), args.console)?;
            match insight::generate_insight(&state, &current).await {
                Ok(note) => println!("{}", note.path),
                // Already shown as a notice.
                Err(_) => return Ok(ExitCode::FAILURE),
            }
        }
        Command::GenerateAudioReview => {
            let state = build_state(&args.vault, args.note.as_deref(), args.console)?;
            let result = audio_review::generate_audio_review(&state, &current).await;

            // A progress notice was shown unless a precondition failed; keep
            // the runtime alive until it has been dismissed.
            if !matches!(&result, Err(e) if e.is_precondition()) {
                tokio::time::sleep(audio_review::NOTICE_DISMISS_DELAY + Duration::from_millis(200))
                    .await;
            }

            match result {
                Ok(url) => println!("{}", url),
                Err(_) => return Ok(ExitCode::FAILURE),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn build_notifier(console: bool) -> Arc<dyn Notifier> {
    if console {
        Arc::new(ConsoleNotifier::new(true))
    } else {
        Arc::new(DesktopNotifier::new())
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn build_notifier(_console: bool) -> Arc<dyn Notifier> {
    Arc::new(ConsoleNotifier::new(true))
}

fn build_state(
    vault_root: &Path,
    note: Option<&str>,
    console: bool,
) -> anyhow::Result<AppState> {
    let mut vault = FsVault::new(vault_root);
    if let Some(path) = note {
        vault = vault.with_active_note(path);
    }
    let client = http::build_client().context("Failed to build HTTP client")?;

    Ok(AppState::new(
        Arc::new(vault),
        build_notifier(console),
        Arc::new(HttpProviders::new(client)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_subcommands_are_named_after_commands() {
        let args = Args::try_parse_from(["note-insight", insight::COMMAND_ID]).unwrap();
        assert!(matches!(args.command, Command::GenerateInsight));

        let args =
            Args::try_parse_from(["note-insight", "--console", audio_review::COMMAND_ID]).unwrap();
        assert!(matches!(args.command, Command::GenerateAudioReview));
        assert!(args.console);

        let cli = Args::command();
        let about = cli
            .find_subcommand(audio_review::COMMAND_ID)
            .and_then(|sub| sub.get_about())
            .map(|about| about.to_string());
        assert_eq!(about.as_deref(), Some(audio_review::COMMAND_NAME));
    }
}

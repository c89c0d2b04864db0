//! Names and bodies of the documents this crate writes into a vault

use crate::domain::models::InsightMode;
use chrono::NaiveDate;

/// Name of the note created for an insight
pub fn insight_note_name(source_basename: &str, date: NaiveDate) -> String {
    format!(
        "Insights from {} - {}.md",
        source_basename,
        date.format("%Y-%m-%d")
    )
}

/// Body of the note created for an insight
pub fn insight_note_body(source_basename: &str, mode: InsightMode, insight: &str) -> String {
    format!(
        "# AI 인사이트: {name}\n\n**원본 노트:** [[{name}]]\n\n## {label}\n{insight}",
        name = source_basename,
        label = mode.label(),
        insight = insight
    )
}

/// File name of the uploaded narration
pub fn audio_file_name(source_basename: &str, unix_millis: i64) -> String {
    format!("Audio Review - {} - {}.mp3", source_basename, unix_millis)
}

/// HTML audio player placed at the top of the note
pub fn audio_player_embed(url: &str) -> String {
    format!(
        "<br>\n<audio controls src=\"{}\" preload=\"metadata\" style=\"width: 100%;\"></audio>\n<br>\n",
        url
    )
}

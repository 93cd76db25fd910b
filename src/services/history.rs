//! Text and document builders for the conversation history surfaces.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use super::sanitize::escape_html;
use crate::bindings::{ConversationHistory, ConversationSummary};

const SEPARATOR_WIDTH: usize = 50;

const HISTORY_STYLES: &str = r#"
    body { font-family: Arial, sans-serif; padding: 20px; }
    .message { margin: 10px 0; padding: 10px; border-radius: 8px; white-space: pre-wrap; }
    .human { background: #e3f2fd; }
    .ai { background: #f3e5f5; }
    .timestamp { font-size: 0.8em; color: #666; }
"#;

/// Offset timestamps are shown in `tz`. Naive ones are already local wall
/// time and are shown as written.
fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn format_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    parse_timestamp_in(raw, tz)
        .map(|dt| dt.format("%b %-d, %Y %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Human-readable date and time in the viewer's time zone. Unparseable input
/// comes back unchanged.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Human-readable date only.
pub fn format_date(raw: &str) -> String {
    parse_timestamp_in(raw, &Local)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Download name for an export: non-alphanumerics become `_`.
pub fn export_file_name(title: &str) -> String {
    let sanitized: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("conversation_{sanitized}.txt")
}

/// Plain-text export of a conversation.
pub fn export_text(history: &ConversationHistory) -> String {
    let metadata = &history.metadata;
    let mut text = format!(
        "Conversation: {}\nCreated: {}\nMessages: {}\n\n{}\n\n",
        metadata.title,
        format_timestamp(&metadata.created_at),
        metadata.message_count,
        "=".repeat(SEPARATOR_WIDTH),
    );
    for message in &history.messages {
        text.push_str(&format!(
            "{}: {}\nTime: {}\n\n",
            message.speaker(),
            message.content,
            format_timestamp(&message.timestamp),
        ));
    }
    text
}

/// Standalone HTML document for the history window. All backend text is
/// escaped.
pub fn history_document(history: &ConversationHistory) -> String {
    let metadata = &history.metadata;
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Conversation History</title>\n<style>{HISTORY_STYLES}</style>\n</head>\n<body>\n\
         <h2>Conversation History: {}</h2>\n<p>Created: {}</p>\n<p>Messages: {}</p>\n<hr>\n",
        escape_html(&metadata.title),
        escape_html(&format_timestamp(&metadata.created_at)),
        metadata.message_count,
    );
    for message in &history.messages {
        html.push_str(&format!(
            "<div class=\"message {}\">\n<strong>{}:</strong> {}\n<div class=\"timestamp\">{}</div>\n</div>\n",
            if message.is_human() { "human" } else { "ai" },
            message.speaker(),
            escape_html(&message.content),
            escape_html(&format_timestamp(&message.timestamp)),
        ));
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Text of the conversation picker prompt.
pub fn conversation_prompt(conversations: &[ConversationSummary]) -> String {
    let mut text = String::from("💬 Saved Conversations:\n\n");
    for (index, conversation) in conversations.iter().enumerate() {
        text.push_str(&format!(
            "{}. {}\n   Created: {}\n   Messages: {}\n\n",
            index + 1,
            conversation.title,
            format_date(&conversation.created_at),
            conversation.message_count,
        ));
    }
    text.push_str("Enter a conversation number to load it, or d<number> to delete it (or cancel):");
    text
}

/// A parsed picker reply. Indices are zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerChoice {
    Switch(usize),
    Delete(usize),
}

/// Parse a picker reply against a list of `len` items. `"3"` switches to the
/// third item; `"d3"`, `"del 3"` and `"delete 3"` delete it. Anything else,
/// including out-of-range numbers, is `None`.
pub fn parse_picker_choice(input: &str, len: usize) -> Option<PickerChoice> {
    let input = input.trim().to_lowercase();
    let (number, delete) = match ["delete", "del", "d"]
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))
    {
        Some(rest) => (rest.trim(), true),
        None => (input.as_str(), false),
    };

    let ordinal: usize = number.parse().ok()?;
    if ordinal == 0 || ordinal > len {
        return None;
    }
    let index = ordinal - 1;
    Some(if delete {
        PickerChoice::Delete(index)
    } else {
        PickerChoice::Switch(index)
    })
}

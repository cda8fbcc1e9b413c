//! Transcript formatting for export

use crate::models::{ConversationEntry, UserId};

const SEPARATOR: &str = "----------------------------------------";

/// Render a user's history as the export body:
///
/// ```text
/// [ID] : U1234
/// ----------------------------------------
///
/// [2024-05-01T09:30:00.000Z]
/// hello
///
/// [2024-05-01T09:31:00.000Z]
/// 090-1234-5678
/// ```
pub fn format_transcript(user_id: &UserId, entries: &[ConversationEntry]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| format!("[{}]\n{}\n", entry.timestamp_iso(), entry.text))
        .collect();

    format!("[ID] : {}\n{}\n\n{}", user_id, SEPARATOR, blocks.join("\n"))
}

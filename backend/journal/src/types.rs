use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved journal record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    /// Section title at save time; also how the UI keys "already saved".
    pub title: String,
    /// Full text of the saved section (title, paragraph, bullets).
    pub content: String,
    /// Unix timestamp (seconds) when this entry was created.
    pub created_at: i64,
}

impl JournalEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

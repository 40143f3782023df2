use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::types::JournalEntry;

/// Abstract interface for journal persistence.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Persist a new entry and return it.
    async fn save(&self, title: &str, content: &str) -> Result<JournalEntry>;

    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<JournalEntry>>;

    /// Delete an entry by ID.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Simple in-memory journal for demo mode and tests.
pub struct InMemoryJournal {
    entries: Arc<RwLock<Vec<JournalEntry>>>,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryJournal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JournalStore for InMemoryJournal {
    async fn save(&self, title: &str, content: &str) -> Result<JournalEntry> {
        let entry = JournalEntry::new(title, content);
        self.entries.write().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<JournalEntry>> {
        let entries = self.entries.read().unwrap();
        // Newest first, matching the SQLite store's ordering.
        Ok(entries.iter().rev().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.entries.write().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_list_delete_round_trip() {
        let store = InMemoryJournal::new();
        let first = store.save("Patterns", "Patterns\n\n• A").await.unwrap();
        let second = store.save("Mood", "Mood\n\nsteady").await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);

        store.delete(first.id).await.unwrap();
        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Mood");
    }
}

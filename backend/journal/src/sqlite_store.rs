/// SQLite-backed durable journal store.
///
/// Uses `rusqlite` to persist `JournalEntry` rows in a `journal_entries`
/// table. The connection sits behind a `tokio::sync::Mutex` so the store can
/// be shared across tasks without a pool.
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::store::JournalStore;
use crate::types::JournalEntry;

pub struct SqliteJournal {
    conn: Mutex<Connection>,
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS journal_entries (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    created_at  INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_journal_created ON journal_entries(created_at);";

impl SqliteJournal {
    /// Create or open a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .context("Failed to open SQLite journal database")?;

        conn.execute_batch(&format!("PRAGMA journal_mode=WAL;\n{SCHEMA}"))
            .context("Failed to initialize journal schema")?;

        info!("SqliteJournal opened at {:?}", path.as_ref());
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Open an in-memory database (for tests).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn: Mutex::new(conn) })
    }
}

#[async_trait]
impl JournalStore for SqliteJournal {
    async fn save(&self, title: &str, content: &str) -> Result<JournalEntry> {
        let entry = JournalEntry::new(title, content);
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO journal_entries (id, title, content, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id.to_string(),
                entry.title,
                entry.content,
                entry.created_at
            ],
        )
        .context("Failed to insert journal entry")?;
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<JournalEntry>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, title, content, created_at FROM journal_entries
             ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let id: String = row.get(0)?;
            Ok((id, row.get::<_, String>(1)?, row.get::<_, String>(2)?, row.get::<_, i64>(3)?))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, title, content, created_at) = row?;
            entries.push(JournalEntry {
                id: Uuid::parse_str(&id).context("Malformed entry id in journal database")?,
                title,
                content,
                created_at,
            });
        }
        Ok(entries)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "DELETE FROM journal_entries WHERE id = ?1",
            params![id.to_string()],
        )
        .context("Failed to delete journal entry")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_list_delete_round_trip() {
        let store = SqliteJournal::in_memory().unwrap();
        let first = store.save("Patterns", "Patterns\n\n• A").await.unwrap();
        let second = store.save("Sleep", "Sleep\n\nless restless").await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);
        assert_eq!(entries[1].content, "Patterns\n\n• A");

        store.delete(second.id).await.unwrap();
        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Patterns");
    }

    #[tokio::test]
    async fn content_round_trips_unicode_bullets() {
        let store = SqliteJournal::in_memory().unwrap();
        let text = "Mood\n\nsteady week\n\n• fewer dips\n• better mornings";
        store.save("Mood", text).await.unwrap();
        let entries = store.list().await.unwrap();
        assert_eq!(entries[0].content, text);
    }
}

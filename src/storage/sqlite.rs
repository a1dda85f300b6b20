//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use crate::{Result, Error};
use crate::entry::{ChestEntry, ChestTable, DEFAULT_CHEST_COUNT};
use super::schema;

/// SQLite-backed storage for chest entries.
///
/// Every statement runs in autocommit mode, so each mutation is durable as
/// soon as the call returns.
pub struct ChestStore {
    conn: Connection,
}

impl ChestStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        tracing::debug!("Opened chest store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Ensure the schema exists. Safe to call on every startup.
    pub fn initialize(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Every row in storage order, with the column names of the query
    pub fn list_all(&self) -> Result<ChestTable> {
        let mut stmt = self.conn.prepare("SELECT * FROM chests")?;
        let columns = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let entries = stmt
            .query_map([], |row| self.row_to_entry(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(ChestTable { columns, entries })
    }

    /// Insert a new entry with the default chest count, returning its id.
    /// Duplicate titles are allowed.
    pub fn add(&self, video_title: &str) -> Result<i64> {
        self.add_with_count(video_title, DEFAULT_CHEST_COUNT)
    }

    /// Insert a new entry with an explicit chest count, returning its id
    pub fn add_with_count(&self, video_title: &str, chest_number: i64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO chests (video_title, chest_number) VALUES (?1, ?2)",
            params![video_title, chest_number],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!("Added entry {} ({})", id, video_title);
        Ok(id)
    }

    /// Replace the chest count of an entry
    pub fn update_count(&self, id: i64, new_count: i64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE chests SET chest_number = ?1 WHERE id = ?2",
            params![new_count, id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        tracing::info!("Updated entry {} to {} chests", id, new_count);
        Ok(())
    }

    /// Delete an entry by ID. Deleting an unknown id is a no-op.
    pub fn delete(&self, id: i64) -> Result<()> {
        let removed = self.conn.execute("DELETE FROM chests WHERE id = ?1", [id])?;
        tracing::info!("Deleted entry {} ({} row(s) removed)", id, removed);
        Ok(())
    }

    /// Count all entries
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM chests", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Close the underlying connection
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))?;
        tracing::debug!("Closed chest store");
        Ok(())
    }

    /// Helper to convert a row to a ChestEntry
    fn row_to_entry(&self, row: &rusqlite::Row) -> rusqlite::Result<ChestEntry> {
        Ok(ChestEntry {
            id: row.get("id")?,
            video_title: row.get("video_title")?,
            chest_number: row.get("chest_number")?,
        })
    }
}

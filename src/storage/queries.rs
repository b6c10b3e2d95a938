//! Record store operations

use super::{models::QuarterbackRecord, schema::QuarterbackDatabase};
use crate::error::Result;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

impl QuarterbackDatabase {
    /// Look up a record by its exact, case-sensitive name
    pub fn find_by_exact_name(&self, name: &str) -> Result<Option<QuarterbackRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "SELECT name, team, touchdowns, interceptions, qbr
                 FROM quarterbacks
                 WHERE name = ?",
                params![name],
                Self::row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// First record (in insertion order) whose name contains `fragment`,
    /// ignoring case
    pub fn find_by_fuzzy_name(&self, fragment: &str) -> Result<Option<QuarterbackRecord>> {
        let conn = self.conn()?;
        // SQLite's lower() only folds ASCII, so the match runs in Rust
        let mut stmt = conn.prepare(
            "SELECT name, team, touchdowns, interceptions, qbr
             FROM quarterbacks
             ORDER BY id",
        )?;

        let fragment = fragment.to_lowercase();
        let rows = stmt.query_map([], Self::row_to_record)?;

        for row in rows {
            let record = row?;
            if record.name.to_lowercase().contains(&fragment) {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Insert the record, or overwrite every field of the record with the
    /// same name. Returns the stored record.
    pub fn upsert_by_name(&self, record: &QuarterbackRecord) -> Result<QuarterbackRecord> {
        let conn = self.conn()?;
        let stored = conn.query_row(
            "INSERT INTO quarterbacks
             (name, team, touchdowns, interceptions, qbr, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?,
                     CAST(strftime('%s', 'now') AS INTEGER),
                     CAST(strftime('%s', 'now') AS INTEGER))
             ON CONFLICT(name) DO UPDATE SET
                 team = excluded.team,
                 touchdowns = excluded.touchdowns,
                 interceptions = excluded.interceptions,
                 qbr = excluded.qbr,
                 updated_at = excluded.updated_at
             RETURNING name, team, touchdowns, interceptions, qbr",
            params![
                record.name,
                record.team,
                record.touchdowns,
                record.interceptions,
                record.qbr
            ],
            Self::row_to_record,
        )?;
        debug!(name = %stored.name, team = %stored.team, "upserted quarterback");
        Ok(stored)
    }

    /// All records in insertion order
    pub fn list_all(&self) -> Result<Vec<QuarterbackRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, team, touchdowns, interceptions, qbr
             FROM quarterbacks
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], Self::row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Records whose team equals `team` exactly
    pub fn list_by_team(&self, team: &str) -> Result<Vec<QuarterbackRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, team, touchdowns, interceptions, qbr
             FROM quarterbacks
             WHERE team = ?
             ORDER BY id",
        )?;

        let rows = stmt.query_map(params![team], Self::row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Remove every record, returning how many were deleted
    pub fn delete_all(&self) -> Result<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM quarterbacks", [])?;
        debug!(deleted, "cleared quarterback store");
        Ok(deleted)
    }

    pub fn count(&self) -> Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM quarterbacks", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_record(row: &Row) -> rusqlite::Result<QuarterbackRecord> {
        Ok(QuarterbackRecord {
            name: row.get(0)?,
            team: row.get(1)?,
            touchdowns: row.get(2)?,
            interceptions: row.get(3)?,
            qbr: row.get(4)?,
        })
    }
}

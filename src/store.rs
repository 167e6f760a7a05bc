// src/store.rs
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::error::{Error, Result};

/// One recorded app update. Rows are append-only: written once at insert
/// time, never mutated, removed only by a forced re-initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRecord {
    pub app_name: String,
    pub app_size: f64,
    pub update_time: NaiveDate,
}

fn table_exists(conn: &Connection) -> Result<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'updates'",
        [],
        |r| r.get(0),
    )?;
    Ok(n > 0)
}

fn create_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE "updates"(
            "name" TEXT NOT NULL,
            "size" REAL NOT NULL,
            "date" TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `updates` table at `db_path`.
///
/// With `force`, any existing table is dropped first, discarding all prior
/// records. Without it, an already-initialized database is an error rather
/// than a silent no-op.
pub fn initialize(db_path: &Path, force: bool) -> Result<()> {
    let conn = Connection::open(db_path)?;
    if force {
        conn.execute_batch(r#"DROP TABLE IF EXISTS "updates";"#)?;
    } else if table_exists(&conn)? {
        return Err(Error::TableExists);
    }
    create_table(&conn)
}

/// Append one record. `name` must be non-empty and `size` a finite positive
/// number; `date` is stored as ISO-8601 (`YYYY-MM-DD`).
pub fn insert(db_path: &Path, name: &str, size: f64, date: NaiveDate) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    if !size.is_finite() || size <= 0.0 {
        return Err(Error::InvalidSize(size));
    }

    let conn = Connection::open(db_path)?;
    if !table_exists(&conn)? {
        return Err(Error::TableMissing);
    }
    conn.execute(
        r#"INSERT INTO "updates"("name", "size", "date") VALUES (?1, ?2, ?3)"#,
        params![name, size, date.to_string()],
    )?;
    Ok(())
}

fn record_from_row(row: &Row) -> rusqlite::Result<(String, f64, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

/// Read back every record in insertion order. An initialized but empty table
/// yields an empty vec; a missing table is an error.
pub fn fetch_all(db_path: &Path) -> Result<Vec<UpdateRecord>> {
    let conn = Connection::open(db_path)?;
    if !table_exists(&conn)? {
        return Err(Error::TableMissing);
    }

    let mut stmt =
        conn.prepare(r#"SELECT "name", "size", "date" FROM "updates" ORDER BY rowid ASC"#)?;
    let raw = stmt
        .query_map([], record_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    raw.into_iter()
        .map(|(app_name, app_size, date)| {
            let update_time = date
                .parse::<NaiveDate>()
                .map_err(|e| Error::DateParse(date, e))?;
            Ok(UpdateRecord { app_name, app_size, update_time })
        })
        .collect()
}

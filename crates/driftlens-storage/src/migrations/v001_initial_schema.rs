//! v001: schema_version, edit_history, drift_annotations.

use rusqlite::Connection;

use driftlens_core::errors::DriftLensResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> DriftLensResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS edit_history (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            note_id        TEXT NOT NULL,
            edited_at      TEXT NOT NULL,
            semantic_diff  REAL NOT NULL,
            change_detail  TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_edit_history_time
            ON edit_history(edited_at);
        CREATE INDEX IF NOT EXISTS idx_edit_history_note_time
            ON edit_history(note_id, edited_at);

        CREATE TABLE IF NOT EXISTS drift_annotations (
            date        TEXT PRIMARY KEY,
            label       TEXT NOT NULL,
            note        TEXT,
            auto_phase  TEXT,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

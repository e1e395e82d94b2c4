//! Edit history inserts and windowed reads.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tracing::warn;

use driftlens_core::errors::DriftLensResult;
use driftlens_core::models::{EditRecord, SemanticChangeDetail};

use super::{format_timestamp, parse_timestamp};
use crate::to_storage_err;

/// One persisted edit, including its classification if one was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEdit {
    pub id: i64,
    pub note_id: String,
    pub edited_at: DateTime<Utc>,
    pub semantic_diff: f64,
    pub change_detail: Option<SemanticChangeDetail>,
}

/// Insert an edit. The change detail is stored as JSON without its
/// direction vector. Returns the new row id.
pub fn insert_edit(
    conn: &Connection,
    note_id: &str,
    edited_at: DateTime<Utc>,
    semantic_diff: f64,
    detail: Option<&SemanticChangeDetail>,
) -> DriftLensResult<i64> {
    let detail_json = detail
        .map(|d| serde_json::to_string(&d.without_direction()))
        .transpose()?;

    conn.execute(
        "INSERT INTO edit_history (note_id, edited_at, semantic_diff, change_detail)
         VALUES (?1, ?2, ?3, ?4)",
        params![note_id, format_timestamp(edited_at), semantic_diff, detail_json],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(conn.last_insert_rowid())
}

/// `(timestamp, semantic_diff)` for every edit at or after `since`.
///
/// Rows whose timestamp cannot be parsed are skipped with a warning so one
/// bad row does not hide a whole window.
pub fn edits_since(conn: &Connection, since: DateTime<Utc>) -> DriftLensResult<Vec<EditRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, edited_at, semantic_diff FROM edit_history
             WHERE edited_at >= ?1
             ORDER BY edited_at ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![format_timestamp(since)], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let (id, ts_str, diff) = row.map_err(|e| to_storage_err(e.to_string()))?;
        match parse_timestamp(&ts_str) {
            Some(timestamp) => records.push(EditRecord::new(timestamp, diff)),
            None => warn!(id, edited_at = %ts_str, "skipping edit with unparseable timestamp"),
        }
    }
    Ok(records)
}

/// All edits of one note, oldest first.
pub fn edits_for_note(conn: &Connection, note_id: &str) -> DriftLensResult<Vec<StoredEdit>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, note_id, edited_at, semantic_diff, change_detail FROM edit_history
             WHERE note_id = ?1
             ORDER BY edited_at ASC, id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![note_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut edits = Vec::new();
    for row in rows {
        let (id, note_id, ts_str, semantic_diff, detail_str) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let edited_at = parse_timestamp(&ts_str).ok_or_else(|| {
            crate::corrupt_row("edit_history", format!("row {id}: bad edited_at {ts_str:?}"))
        })?;
        let change_detail = match detail_str {
            Some(json) => Some(serde_json::from_str(&json).map_err(|e| {
                crate::corrupt_row("edit_history", format!("row {id}: change_detail: {e}"))
            })?),
            None => None,
        };
        edits.push(StoredEdit {
            id,
            note_id,
            edited_at,
            semantic_diff,
            change_detail,
        });
    }
    Ok(edits)
}

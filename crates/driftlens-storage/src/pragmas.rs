//! Connection pragmas applied on open.

use rusqlite::Connection;

use driftlens_core::errors::DriftLensResult;

use crate::to_storage_err;

/// WAL journaling with a busy timeout. In-memory databases ignore the
/// journal mode and keep `memory`.
pub fn apply_pragmas(conn: &Connection) -> DriftLensResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(format!("apply pragmas: {e}")))
}

//! Forward-only schema migrations, one transaction per version.

mod v001_initial_schema;

use rusqlite::Connection;
use tracing::{debug, info, warn};

use driftlens_core::errors::{DriftLensResult, StorageError};
use driftlens_core::DriftLensError;

use crate::to_storage_err;

/// Highest schema version this build knows how to create.
pub const LATEST_VERSION: u32 = 1;

type MigrationFn = fn(&Connection) -> DriftLensResult<()>;

#[derive(Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    apply: MigrationFn,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    apply: v001_initial_schema::migrate,
}];

/// Applied schema version; 0 for a database v001 never touched.
pub fn current_version(conn: &Connection) -> DriftLensResult<u32> {
    let tracked: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if tracked == 0 {
        return Ok(0);
    }

    conn.query_row("SELECT IFNULL(MAX(version), 0) FROM schema_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Bring the schema up to [`LATEST_VERSION`]; returns how many versions ran.
pub fn run_migrations(conn: &Connection) -> DriftLensResult<u32> {
    let current = current_version(conn)?;
    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();
    if pending.is_empty() {
        debug!(version = current, "schema up to date");
        return Ok(0);
    }

    info!(from = current, to = LATEST_VERSION, pending = pending.len(), "migrating schema");
    for migration in &pending {
        apply_in_transaction(conn, migration)?;
    }
    Ok(pending.len() as u32)
}

/// Run one migration and record its version atomically. A failure leaves
/// the schema exactly as it was before the call.
fn apply_in_transaction(conn: &Connection, migration: &Migration) -> DriftLensResult<()> {
    let Migration { version, name, apply } = *migration;
    let failed = |reason: String| {
        DriftLensError::Storage(StorageError::MigrationFailed { version, reason })
    };

    conn.execute_batch("BEGIN IMMEDIATE")
        .map_err(|e| failed(format!("begin: {e}")))?;

    let outcome = apply(conn).and_then(|()| {
        conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
            .map(drop)
            .map_err(|e| to_storage_err(e.to_string()))
    });

    match outcome.and_then(|()| {
        conn.execute_batch("COMMIT")
            .map_err(|e| to_storage_err(e.to_string()))
    }) {
        Ok(()) => {
            info!(version, name, "migration applied");
            Ok(())
        }
        Err(e) => {
            warn!(version, name, error = %e, "migration failed, rolling back");
            let _ = conn.execute_batch("ROLLBACK");
            Err(failed(e.to_string()))
        }
    }
}

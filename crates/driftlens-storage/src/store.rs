//! SqliteStore: the one place in this crate that holds `Mutex<Connection>`.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use tracing::{debug, info};

use driftlens_core::config::StorageConfig;
use driftlens_core::errors::DriftLensResult;
use driftlens_core::models::{DriftAnnotation, EditRecord, SemanticChangeDetail};
use driftlens_core::traits::{IAnnotationStore, IEditHistorySource};

use crate::queries::edit_ops::StoredEdit;
use crate::queries::{annotation_ops, edit_ops};
use crate::{migrations, pragmas, to_storage_err};

/// Edit history and annotations in one SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating if needed) a file-backed database and migrate it.
    pub fn open(path: &Path) -> DriftLensResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
        info!(path = %path.display(), "opened driftlens database");
        Self::init(conn)
    }

    pub fn open_in_memory() -> DriftLensResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| to_storage_err(format!("open in-memory database: {e}")))?;
        Self::init(conn)
    }

    /// Open the database named by `config`, in memory when no path is set.
    pub fn from_config(config: &StorageConfig) -> DriftLensResult<Self> {
        match config.db_path.as_deref() {
            Some(path) => Self::open(Path::new(path)),
            None => Self::open_in_memory(),
        }
    }

    fn init(conn: Connection) -> DriftLensResult<Self> {
        pragmas::apply_pragmas(&conn)?;
        let applied = migrations::run_migrations(&conn)?;
        debug!(applied, "storage ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> DriftLensResult<T>
    where
        F: FnOnce(&Connection) -> DriftLensResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&conn)
    }

    /// Record one saved edit of `note_id`. The optional change detail is
    /// persisted without its direction vector. Returns the row id.
    pub fn record_edit(
        &self,
        note_id: &str,
        edited_at: DateTime<Utc>,
        semantic_diff: f64,
        detail: Option<&SemanticChangeDetail>,
    ) -> DriftLensResult<i64> {
        self.with_conn(|conn| edit_ops::insert_edit(conn, note_id, edited_at, semantic_diff, detail))
    }

    /// Every stored edit of one note, oldest first.
    pub fn edits_for_note(&self, note_id: &str) -> DriftLensResult<Vec<StoredEdit>> {
        self.with_conn(|conn| edit_ops::edits_for_note(conn, note_id))
    }

    pub fn schema_version(&self) -> DriftLensResult<u32> {
        self.with_conn(migrations::current_version)
    }
}

impl IEditHistorySource for SqliteStore {
    fn edits_since(&self, since: DateTime<Utc>) -> DriftLensResult<Vec<EditRecord>> {
        self.with_conn(|conn| edit_ops::edits_since(conn, since))
    }
}

impl IAnnotationStore for SqliteStore {
    fn get(&self, date: NaiveDate) -> DriftLensResult<Option<DriftAnnotation>> {
        self.with_conn(|conn| annotation_ops::get_annotation(conn, date))
    }

    fn upsert(&self, annotation: &DriftAnnotation) -> DriftLensResult<()> {
        self.with_conn(|conn| annotation_ops::upsert_annotation(conn, annotation))
    }

    fn list_since(&self, since: NaiveDate) -> DriftLensResult<Vec<DriftAnnotation>> {
        self.with_conn(|conn| annotation_ops::list_since(conn, since))
    }
}

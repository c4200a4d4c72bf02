//! Simple key-value preferences storage.
//!
//! Values are ordered lists of strings, which is all the recent-emoji store
//! needs. Two backends:
//! - `InMemory`: thread-safe map, used by tests and ephemeral sessions.
//! - `Redb`: persistent storage in a `redb` database. Each value is kept as a
//!   JSON array of strings under its key in the `preferences` table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Failure reading or writing preferences.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Redb(#[from] redb::Error),

    #[error("stored value is not a string list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("preferences lock poisoned")]
    Poisoned,
}

impl From<redb::DatabaseError> for StorageError {
    fn from(e: redb::DatabaseError) -> Self {
        StorageError::Redb(e.into())
    }
}

impl From<redb::TransactionError> for StorageError {
    fn from(e: redb::TransactionError) -> Self {
        StorageError::Redb(e.into())
    }
}

impl From<redb::TableError> for StorageError {
    fn from(e: redb::TableError) -> Self {
        StorageError::Redb(e.into())
    }
}

impl From<redb::StorageError> for StorageError {
    fn from(e: redb::StorageError) -> Self {
        StorageError::Redb(e.into())
    }
}

impl From<redb::CommitError> for StorageError {
    fn from(e: redb::CommitError) -> Self {
        StorageError::Redb(e.into())
    }
}

/// Thread-safe in-memory preferences.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPreferences {
    inner: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_string_list(&self, key: &str) -> Result<Option<Vec<String>>, StorageError> {
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    pub fn set_string_list(&self, key: &str, values: &[String]) -> Result<(), StorageError> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.insert(key.to_string(), values.to_vec());
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        Ok(map.remove(key).is_some())
    }
}

/// Redb-backed preferences.
///
/// Every write is its own transaction; there is no batching.
pub struct RedbPreferences {
    db: redb::Database,
    path: PathBuf,
}

impl std::fmt::Debug for RedbPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbPreferences")
            .field("path", &self.path)
            .finish()
    }
}

impl RedbPreferences {
    const TABLE_DEF: redb::TableDefinition<'static, &'static str, &'static str> =
        redb::TableDefinition::new("preferences");

    /// Create or open a database at `path`, creating parent directories.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let db = redb::Database::create(path.as_ref())?;
        Ok(RedbPreferences {
            db,
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw stored value for a key, if any.
    pub(crate) fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(Self::TABLE_DEF) {
            Ok(table) => table,
            // nothing has been written yet
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    pub(crate) fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(Self::TABLE_DEF)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_string_list(&self, key: &str) -> Result<Option<Vec<String>>, StorageError> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_string_list(&self, key: &str, values: &[String]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(values)?;
        self.put_raw(key, &raw)
    }

    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(Self::TABLE_DEF)?;
            let old = table.remove(key)?;
            old.is_some()
        };
        write_txn.commit()?;
        Ok(removed)
    }
}

/// Preferences backend selector.
#[derive(Clone, Debug)]
pub enum Preferences {
    InMemory(InMemoryPreferences),
    Redb(Arc<RedbPreferences>),
}

impl Preferences {
    pub fn new_in_memory() -> Self {
        Preferences::InMemory(InMemoryPreferences::new())
    }

    /// Open (or create) a redb-backed store at `path`.
    pub fn new_redb<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        Ok(Preferences::Redb(Arc::new(RedbPreferences::new(path)?)))
    }

    /// Default on-disk location: `$HOME/.emojipicker/preferences.redb`.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".emojipicker")
            .join("preferences.redb")
    }

    pub fn get_string_list(&self, key: &str) -> Result<Option<Vec<String>>, StorageError> {
        match self {
            Preferences::InMemory(m) => m.get_string_list(key),
            Preferences::Redb(r) => r.get_string_list(key),
        }
    }

    pub fn set_string_list(&self, key: &str, values: &[String]) -> Result<(), StorageError> {
        match self {
            Preferences::InMemory(m) => m.set_string_list(key, values),
            Preferences::Redb(r) => r.set_string_list(key, values),
        }
    }

    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        match self {
            Preferences::InMemory(m) => m.remove(key),
            Preferences::Redb(r) => r.remove(key),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT: AtomicUsize = AtomicUsize::new(0);

    /// Fresh database path under the temp dir.
    pub(crate) fn temp_db_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "emojipicker_{}_{}_{}.redb",
            tag,
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ))
    }

    #[test]
    fn in_memory_set_get_remove() {
        let p = Preferences::new_in_memory();
        assert_eq!(p.get_string_list("k").unwrap(), None);
        p.set_string_list("k", &["a".into(), "b".into()]).unwrap();
        assert_eq!(p.get_string_list("k").unwrap(), Some(vec!["a".into(), "b".into()]));
        assert!(p.remove("k").unwrap());
        assert!(!p.remove("k").unwrap());
    }

    #[test]
    fn in_memory_clones_share_state() {
        let a = Preferences::new_in_memory();
        let b = a.clone();
        a.set_string_list("k", &["x".into()]).unwrap();
        assert_eq!(b.get_string_list("k").unwrap(), Some(vec!["x".into()]));
    }

    #[test]
    fn redb_missing_table_reads_as_none() {
        let path = temp_db_path("empty");
        let p = Preferences::new_redb(&path).unwrap();
        assert_eq!(p.get_string_list("anything").unwrap(), None);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn redb_persists_across_reopen() {
        let path = temp_db_path("reopen");
        {
            let p = Preferences::new_redb(&path).unwrap();
            p.set_string_list("list", &["1".into(), "2".into()]).unwrap();
        }
        let p = Preferences::new_redb(&path).unwrap();
        assert_eq!(
            p.get_string_list("list").unwrap(),
            Some(vec!["1".to_string(), "2".to_string()])
        );
        assert!(p.remove("list").unwrap());
        assert_eq!(p.get_string_list("list").unwrap(), None);
        drop(p);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn uncreatable_parent_dir_is_reported() {
        let blocker = temp_db_path("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let err = RedbPreferences::new(blocker.join("prefs.redb")).unwrap_err();
        match err {
            StorageError::CreateDir { path, .. } => assert_eq!(path, blocker),
            other => panic!("expected CreateDir, got {:?}", other),
        }
        let _ = std::fs::remove_file(blocker);
    }

    #[test]
    fn redb_corrupt_value_is_an_error() {
        let path = temp_db_path("corrupt");
        let prefs = RedbPreferences::new(&path).unwrap();
        prefs.put_raw("list", "{not a list").unwrap();
        assert!(matches!(prefs.get_string_list("list"), Err(StorageError::Json(_))));
        drop(prefs);
        let _ = std::fs::remove_file(path);
    }
}

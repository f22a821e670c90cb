//! Process-wide cache of loaded scenario tables.
//!
//! Entries are keyed by canonical path and load options. An entry is reused
//! only while the file's modification time and length are unchanged, so
//! editing the workbook on disk triggers a reload on the next request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, info};

use super::options::LoadOptions;
use super::record::ScenarioTable;
use crate::common::DataSourceError;

/// The cache used by [`super::load`] and [`super::load_with`].
pub(crate) static TABLE_CACHE: Lazy<TableCache> = Lazy::new(TableCache::new);

/// Drop every cached table.
pub fn clear_cache() {
    TABLE_CACHE.clear();
}

/// Drop cached tables for one file, whatever options they were loaded with.
pub fn invalidate<P: AsRef<Path>>(path: P) {
    TABLE_CACHE.invalidate(path.as_ref());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: Option<SystemTime>,
    len: u64,
}

impl Fingerprint {
    fn of(path: &Path) -> Result<Self, DataSourceError> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

#[derive(Debug, Clone)]
struct Entry {
    fingerprint: Fingerprint,
    table: Arc<ScenarioTable>,
}

/// Thread-safe map from source file to its loaded table.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: RwLock<HashMap<(PathBuf, LoadOptions), Entry>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, calling `load` on a miss or when
    /// the file changed since it was cached.
    pub fn get_or_load<F>(
        &self,
        path: &Path,
        options: &LoadOptions,
        load: F,
    ) -> Result<Arc<ScenarioTable>, DataSourceError>
    where
        F: FnOnce() -> Result<ScenarioTable, DataSourceError>,
    {
        let canonical = std::fs::canonicalize(path)
            .map_err(|_| DataSourceError::NotFound(path.display().to_string()))?;
        let fingerprint = Fingerprint::of(&canonical)?;
        let key = (canonical, options.clone());

        if let Some(entry) = self.entries.read().get(&key)
            && entry.fingerprint == fingerprint
        {
            debug!(path = %key.0.display(), "scenario cache hit");
            return Ok(Arc::clone(&entry.table));
        }

        info!(path = %key.0.display(), "scenario cache miss");
        let table = Arc::new(load()?);

        let mut entries = self.entries.write();
        // Another thread may have loaded the same file meanwhile
        if let Some(entry) = entries.get(&key)
            && entry.fingerprint == fingerprint
        {
            return Ok(Arc::clone(&entry.table));
        }
        entries.insert(
            key,
            Entry {
                fingerprint,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn invalidate(&self, path: &Path) {
        let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.write().retain(|(p, _), _| *p != canonical);
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::record::record;
    use std::cell::Cell;

    fn table() -> ScenarioTable {
        ScenarioTable::new(vec![record("Base", 100.0, 40.0, 60.0)]).unwrap()
    }

    #[test]
    fn test_second_load_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.xlsx");
        std::fs::write(&path, b"v1").unwrap();

        let cache = TableCache::new();
        let calls = Cell::new(0);
        let loader = || {
            calls.set(calls.get() + 1);
            Ok(table())
        };

        let first = cache.get_or_load(&path, &LoadOptions::default(), loader).unwrap();
        let second = cache.get_or_load(&path, &LoadOptions::default(), loader).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_changed_file_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.xlsx");
        std::fs::write(&path, b"v1").unwrap();

        let cache = TableCache::new();
        let first = cache.get_or_load(&path, &LoadOptions::default(), || Ok(table())).unwrap();

        std::fs::write(&path, b"version two").unwrap();
        let second = cache.get_or_load(&path, &LoadOptions::default(), || Ok(table())).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_options_are_part_of_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.xlsx");
        std::fs::write(&path, b"v1").unwrap();

        let cache = TableCache::new();
        let other = LoadOptions::new().with_sheet_name("Other");
        cache.get_or_load(&path, &LoadOptions::default(), || Ok(table())).unwrap();
        cache.get_or_load(&path, &other, || Ok(table())).unwrap();
        assert_eq!(cache.len(), 2);

        cache.invalidate(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.xlsx");
        std::fs::write(&path, b"v1").unwrap();

        let cache = TableCache::new();
        let result = cache.get_or_load(&path, &LoadOptions::default(), || {
            Err(DataSourceError::MissingColumn("profit".to_string()))
        });
        assert!(matches!(result, Err(DataSourceError::MissingColumn(_))));
        assert!(cache.is_empty());

        cache.get_or_load(&path, &LoadOptions::default(), || Ok(table())).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let cache = TableCache::new();
        let missing = Path::new("/no/such/file.xlsx");
        let result = cache.get_or_load(missing, &LoadOptions::default(), || Ok(table()));
        assert!(matches!(result, Err(DataSourceError::NotFound(_))));
    }
}

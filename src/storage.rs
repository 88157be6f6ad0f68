use crate::constants::{COLLECTION_EXT, CONFIG_DIR_NAME};
use crate::models::CollectionEntry;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed repository of saved request definitions, one JSON file per
/// entry. Entries are bulk-loaded at startup and never mutated in place;
/// reloading replaces the in-memory list.
#[derive(Debug)]
pub struct CollectionStore {
    entries: Vec<CollectionEntry>,
    config_dir: PathBuf,
}

impl CollectionStore {
    /// Open the store in the default config directory, creating the
    /// directory if absent, and load every entry.
    pub fn open() -> Result<Self> {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME);
        Self::open_at(config_dir)
    }

    /// Open a store rooted at an explicit directory.
    pub fn open_at(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut store = CollectionStore {
            entries: Vec::new(),
            config_dir: config_dir.into(),
        };
        store.ensure_store_exists()?;
        store.load_all()?;
        Ok(store)
    }

    /// Create the storage directory if absent. Idempotent.
    pub fn ensure_store_exists(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .with_context(|| format!("creating {}", self.config_dir.display()))?;
            tracing::debug!(dir = %self.config_dir.display(), "config directory created");
        }
        Ok(())
    }

    /// Load every `*.json` entry from the storage directory, replacing the
    /// in-memory list. Order is directory enumeration order. A file that
    /// fails to read or parse fails the whole load; there is no per-file
    /// recovery.
    pub fn load_all(&mut self) -> Result<()> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&self.config_dir)
            .with_context(|| format!("listing {}", self.config_dir.display()))?
        {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(COLLECTION_EXT) {
                continue;
            }

            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let entry: CollectionEntry = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            entries.push(entry);
        }

        tracing::debug!(count = entries.len(), "collections loaded");
        self.entries = entries;
        Ok(())
    }

    /// Export a single entry as `<name>.json`. Not yet available.
    pub fn export_entry(&self, name: &str) -> Result<()> {
        bail!("exporting collection entry '{}' is not implemented yet", name)
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CollectionEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(dead_code)] // Used by tests and startup logging
    pub fn dir(&self) -> &Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;
    use tempfile::tempdir;

    const SAMPLE_ENTRY: &str = r#"{
        "name": "list users",
        "method": "GET",
        "url": "https://api.example.com/users",
        "body": "",
        "headers": {"Accept": "application/json"}
    }"#;

    #[test]
    fn test_open_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let store_dir = dir.path().join("collections");
        let store = CollectionStore::open_at(&store_dir).unwrap();
        assert!(store_dir.is_dir());
        assert!(store.is_empty());

        // Opening again is idempotent
        CollectionStore::open_at(&store_dir).unwrap();
    }

    #[test]
    fn test_load_all_empty_dir() {
        let dir = tempdir().unwrap();
        let store = CollectionStore::open_at(dir.path()).unwrap();
        assert_eq!(store.len(), 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_load_all_single_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("users.json"), SAMPLE_ENTRY).unwrap();

        let store = CollectionStore::open_at(dir.path()).unwrap();
        assert_eq!(store.len(), 1);

        let entry = store.get(0).unwrap();
        assert_eq!(entry.name, "list users");
        assert_eq!(entry.method, HttpMethod::GET);
        assert_eq!(entry.url, "https://api.example.com/users");
        assert_eq!(entry.body, "");
        assert_eq!(
            entry.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_load_all_ignores_other_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not an entry").unwrap();
        fs::write(dir.path().join("users.json"), SAMPLE_ENTRY).unwrap();

        let store = CollectionStore::open_at(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_malformed_entry_fails_whole_load() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("users.json"), SAMPLE_ENTRY).unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let err = CollectionStore::open_at(dir.path()).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_reload_replaces_list() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("users.json"), SAMPLE_ENTRY).unwrap();

        let mut store = CollectionStore::open_at(dir.path()).unwrap();
        assert_eq!(store.len(), 1);

        store.load_all().unwrap();
        assert_eq!(store.len(), 1, "reload must replace, not append");
    }

    #[test]
    fn test_export_entry_not_available() {
        let dir = tempdir().unwrap();
        let store = CollectionStore::open_at(dir.path()).unwrap();
        let err = store.export_entry("users").unwrap_err();
        assert!(err.to_string().contains("not implemented"));
    }
}

//! JSON-file persistence for the word collections.
//!
//! Each store is a single document shaped `{"palabras": [...]}`. Reads
//! never fail outward: a missing or unparsable file degrades to an empty
//! collection, logged at warn. Writes replace the whole document and
//! report faults to the caller, who decides how to react.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use palabra_core::{Scope, StoreId, WordRecord};

/// A collection could not be persisted.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot create {path:?}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// On-disk document shape.
#[derive(Deserialize)]
struct WordFile {
    #[serde(rename = "palabras", default)]
    words: Vec<WordRecord>,
}

/// Borrowing twin of [`WordFile`] for serialization.
#[derive(Serialize)]
struct WordFileRef<'a> {
    #[serde(rename = "palabras")]
    words: &'a [WordRecord],
}

/// File-backed access to the persisted collections.
#[derive(Debug, Clone)]
pub struct WordStore {
    data_dir: PathBuf,
}

impl WordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of one collection's document.
    pub fn path(&self, id: StoreId) -> PathBuf {
        self.data_dir.join(id.file_name())
    }

    /// Load one collection. A missing or unparsable document yields an
    /// empty collection; the caller never sees a read error.
    pub fn load(&self, id: StoreId) -> Vec<WordRecord> {
        let path = self.path(id);
        if !path.exists() {
            return Vec::new();
        }
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                warn_unreadable(&path, id, &e.to_string());
                return Vec::new();
            }
        };
        match serde_json::from_reader::<_, WordFile>(BufReader::new(file)) {
            Ok(doc) => doc.words,
            Err(e) => {
                warn_unreadable(&path, id, &e.to_string());
                Vec::new()
            }
        }
    }

    /// Replace one collection's document wholesale.
    pub fn save(&self, id: StoreId, words: &[WordRecord]) -> Result<(), StoreError> {
        let path = self.path(id);
        let file = File::create(&path).map_err(|source| StoreError::Create {
            path: path.clone(),
            source,
        })?;
        serde_json::to_writer_pretty(file, &WordFileRef { words })
            .map_err(|source| StoreError::Write { path, source })
    }

    /// Load a scope, concatenating its stores in order. For the combined
    /// view that is normal first, then warframe, no dedup.
    pub fn load_scope(&self, scope: Scope) -> Vec<WordRecord> {
        let mut all = Vec::new();
        for id in scope.stores() {
            all.extend(self.load(*id));
        }
        all
    }
}

fn warn_unreadable(path: &Path, id: StoreId, reason: &str) {
    tracing::warn!(
        "cannot read {:?} ({}); treating the {} collection as empty",
        path,
        reason,
        id
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(word: &str, translation: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            translation: translation.to_string(),
            category: "animals".to_string(),
            difficulty: "easy".to_string(),
            alternatives: Vec::new(),
            hint: String::new(),
            example: String::new(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = WordStore::new(dir.path());
        assert!(store.load(StoreId::Normal).is_empty());
        assert!(store.load(StoreId::Warframe).is_empty());
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = WordStore::new(dir.path());
        std::fs::write(store.path(StoreId::Normal), "this is not json {").unwrap();
        assert!(store.load(StoreId::Normal).is_empty());

        // Valid JSON of the wrong shape degrades the same way
        std::fs::write(store.path(StoreId::Warframe), r#"["cat", "dog"]"#).unwrap();
        assert!(store.load(StoreId::Warframe).is_empty());
    }

    #[test]
    fn save_writes_the_palabras_document() {
        let dir = TempDir::new().unwrap();
        let store = WordStore::new(dir.path());
        let words = vec![record("cat", "gato"), record("dog", "perro")];
        store.save(StoreId::Normal, &words).unwrap();

        let raw = std::fs::read_to_string(store.path(StoreId::Normal)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let palabras = value.get("palabras").and_then(|v| v.as_array()).unwrap();
        assert_eq!(palabras.len(), 2);
        assert_eq!(palabras[0].get("palabra").unwrap(), "cat");

        assert_eq!(store.load(StoreId::Normal), words);
    }

    #[test]
    fn save_into_a_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = WordStore::new(dir.path().join("no-such-subdir"));
        let err = store.save(StoreId::Normal, &[record("cat", "gato")]);
        assert!(matches!(err, Err(StoreError::Create { .. })));
    }

    #[test]
    fn combined_scope_keeps_normal_first() {
        let dir = TempDir::new().unwrap();
        let store = WordStore::new(dir.path());
        store.save(StoreId::Normal, &[record("cat", "gato")]).unwrap();
        store
            .save(StoreId::Warframe, &[record("Serration", "Serración")])
            .unwrap();

        let combined = store.load_scope(Scope::Mixed);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].word, "cat");
        assert_eq!(combined[1].word, "Serration");
    }
}

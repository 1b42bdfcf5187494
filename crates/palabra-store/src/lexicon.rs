//! The query, lookup, insertion, and stats engines over the word stores.
//!
//! Every operation loads fresh from disk; there is no long-lived cache to
//! invalidate. Insertion is the only mutation and serializes per store
//! behind a mutex, closing the lost-update race between concurrent writers.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use thiserror::Error;

use palabra_core::{Scope, SimpleRng, StoreId, WordFilter, WordRecord, target_store};

use crate::json_store::{StoreError, WordStore};

/// Histogram key for records without a category.
pub const NO_CATEGORY: &str = "sin_categoria";
/// Histogram key for records without a difficulty.
pub const NO_DIFFICULTY: &str = "sin_dificultad";

/// Why an insertion did not take.
#[derive(Debug, Error)]
pub enum InsertError {
    /// A case-insensitive match already exists in the target store.
    #[error("'{word}' ya existe en la colección {store}")]
    Duplicate { word: String, store: StoreId },
    /// The target store could not be written; the record is not durable.
    #[error("no se pudo guardar la colección {store}: {source}")]
    Persistence {
        store: StoreId,
        #[source]
        source: StoreError,
    },
}

/// Aggregate counts for one scope. Serializes with the stats endpoint's
/// Spanish keys.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeStats {
    #[serde(rename = "total_palabras")]
    pub total: usize,
    #[serde(rename = "por_categoria")]
    pub by_category: HashMap<String, usize>,
    #[serde(rename = "por_dificultad")]
    pub by_difficulty: HashMap<String, usize>,
}

/// The service engines over the two persisted stores.
pub struct Lexicon {
    store: WordStore,
    /// One guard per persisted store, taken only around the
    /// load-check-append-save cycle of an insertion.
    normal_lock: Mutex<()>,
    warframe_lock: Mutex<()>,
}

impl Lexicon {
    pub fn new(store: WordStore) -> Self {
        Self {
            store,
            normal_lock: Mutex::new(()),
            warframe_lock: Mutex::new(()),
        }
    }

    fn write_lock(&self, id: StoreId) -> &Mutex<()> {
        match id {
            StoreId::Normal => &self.normal_lock,
            StoreId::Warframe => &self.warframe_lock,
        }
    }

    /// Random word from a scope after conjunctive filtering. `None` when
    /// nothing survives the filter.
    pub fn random_word(&self, scope: Scope, filter: &WordFilter) -> Option<WordRecord> {
        self.random_word_with(scope, filter, &mut SimpleRng::from_clock())
    }

    /// Seeded variant so tests can pin the draw.
    pub fn random_word_with(
        &self,
        scope: Scope,
        filter: &WordFilter,
        rng: &mut SimpleRng,
    ) -> Option<WordRecord> {
        let mut survivors: Vec<WordRecord> = self
            .store
            .load_scope(scope)
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        if survivors.is_empty() {
            return None;
        }
        let idx = rng.next_index(survivors.len());
        Some(survivors.swap_remove(idx))
    }

    /// First record whose word matches case-insensitively, in collection
    /// order (normal before warframe in the combined view).
    pub fn find_translation(&self, word: &str, scope: Scope) -> Option<WordRecord> {
        let needle = word.to_lowercase();
        self.store
            .load_scope(scope)
            .into_iter()
            .find(|r| r.word.to_lowercase() == needle)
    }

    /// Insert a record into the store its category routes to. Rejects a
    /// case-insensitive duplicate within that store; a failed write fails
    /// the whole operation even though the in-memory append happened.
    pub fn insert(&self, record: WordRecord) -> Result<WordRecord, InsertError> {
        let store_id = target_store(&record.category);
        let _guard = self.write_lock(store_id).lock().unwrap();

        let mut words = self.store.load(store_id);
        let needle = record.word.to_lowercase();
        if words.iter().any(|r| r.word.to_lowercase() == needle) {
            return Err(InsertError::Duplicate {
                word: record.word,
                store: store_id,
            });
        }

        words.push(record.clone());
        self.store
            .save(store_id, &words)
            .map_err(|source| InsertError::Persistence {
                store: store_id,
                source,
            })?;
        tracing::info!("added '{}' to the {} collection", record.word, store_id);
        Ok(record)
    }

    /// One-pass aggregate counts for a scope. Records with no category or
    /// difficulty count under the sentinel keys instead of being dropped.
    pub fn stats(&self, scope: Scope) -> ScopeStats {
        let words = self.store.load_scope(scope);
        let mut by_category: HashMap<String, usize> = HashMap::new();
        let mut by_difficulty: HashMap<String, usize> = HashMap::new();
        for record in &words {
            let category = if record.category.is_empty() {
                NO_CATEGORY
            } else {
                record.category.as_str()
            };
            *by_category.entry(category.to_string()).or_insert(0) += 1;

            let difficulty = if record.difficulty.is_empty() {
                NO_DIFFICULTY
            } else {
                record.difficulty.as_str()
            };
            *by_difficulty.entry(difficulty.to_string()).or_insert(0) += 1;
        }
        ScopeStats {
            total: words.len(),
            by_category,
            by_difficulty,
        }
    }

    /// Sorted distinct category names in a scope. Blank categories are not
    /// listed here; the stats endpoint is where they surface, as the
    /// sentinel bucket.
    pub fn category_names(&self, scope: Scope) -> Vec<String> {
        let mut names: Vec<String> = self
            .store
            .load_scope(scope)
            .into_iter()
            .map(|r| r.category)
            .filter(|c| !c.is_empty())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// All records in a scope, collection order.
    pub fn records(&self, scope: Scope) -> Vec<WordRecord> {
        self.store.load_scope(scope)
    }
}

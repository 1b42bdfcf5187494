//! Persistence and query engines for the palabra vocabulary service.
//!
//! Two JSON collections live on disk (normal + warframe); a derived
//! combined view concatenates them per query. On top sit the engines the
//! HTTP surface calls: filtered uniform-random selection, case-insensitive
//! lookup, routed insertion with duplicate rejection, and aggregate stats.

pub mod json_store;
pub mod lexicon;

pub use json_store::{StoreError, WordStore};
pub use lexicon::{InsertError, Lexicon, ScopeStats, NO_CATEGORY, NO_DIFFICULTY};

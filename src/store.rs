//! Storage of computed catalog entries, keyed by `n`.
use crate::catalog::{compute_catalog_entry_with, CatalogEntry, CatalogOptions};
use crate::error::Result;

use core::ops::RangeInclusive;
use rayon::prelude::*;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// A keyed store of catalog entries.
///
/// Implementations take `&self` and must be safe to call from several worker threads at once.
pub trait CatalogStore: Sync {
    fn get(&self, n: u64) -> Option<CatalogEntry>;

    /// Insert `entry`, replacing any entry for the same `n`.
    fn put(&self, entry: CatalogEntry);

    /// Remove the entry for `n`, returning whether one was present.
    fn remove(&self, n: u64) -> bool;

    /// All stored entries with `n` in `range`, ascending.
    fn range(&self, range: RangeInclusive<u64>) -> Vec<CatalogEntry>;
}

/// An in-memory [`CatalogStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<u64, CatalogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CatalogStore for MemoryStore {
    fn get(&self, n: u64) -> Option<CatalogEntry> {
        self.entries.read().get(&n).cloned()
    }

    fn put(&self, entry: CatalogEntry) {
        self.entries.write().insert(entry.n, entry);
    }

    fn remove(&self, n: u64) -> bool {
        self.entries.write().remove(&n).is_some()
    }

    fn range(&self, range: RangeInclusive<u64>) -> Vec<CatalogEntry> {
        self.entries
            .read()
            .range(range)
            .map(|(_, e)| e.clone())
            .collect()
    }
}

/// Compute and store the entry for every `n` in `range`, returning how many were stored.
///
/// Entries are computed in parallel. Computation stops at the first error, though entries
/// already stored remain.
pub fn populate<S: CatalogStore + ?Sized>(
    store: &S,
    range: RangeInclusive<u64>,
    options: &CatalogOptions,
) -> Result<usize> {
    tracing::info!(start = range.start(), end = range.end(), "populating store");
    range
        .into_par_iter()
        .map(|n| -> Result<usize> {
            let entry = compute_catalog_entry_with(n, options)?;
            tracing::debug!(n, description = %entry.description, "storing entry");
            store.put(entry);
            Ok(1)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

//! Catalog entries: the full pipeline from `n` to a classified exact zero-divisor graph.
pub mod query;

pub use query::*;

use crate::annihilator::zero_divisor_pairs;
use crate::closure::exact_pairs;
use crate::component::{classify_components, ComponentKind, ComponentList, UnclassifiedComponent};
use crate::error::{CatalogError, Result};
use crate::graph::{exact_zero_divisor_graph, zero_divisor_graph, Graph};
use crate::ring::Ring;

use core::ops::RangeInclusive;
use rayon::prelude::*;

/// Options controlling how catalog entries are computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Entries for `n` above this value are computed in summary form, withholding both graphs.
    pub summary_threshold: Option<u64>,
    /// Fail with [`CatalogError::Unclassified`] instead of attaching anomalies to the entry.
    pub strict: bool,
}

impl CatalogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary_threshold(mut self, threshold: u64) -> Self {
        self.summary_threshold = Some(threshold);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// True when the entry for `n` should omit its vertex and edge sets.
    pub fn is_summary(&self, n: u64) -> bool {
        self.summary_threshold.is_some_and(|t| n > t)
    }
}

/// Everything computed for a single ring `Z_n`.
///
/// Both graphs are `None` for summary entries; the classification is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub n: u64,
    pub zero_divisor_graph: Option<Graph>,
    pub exact_zero_divisor_graph: Option<Graph>,
    pub components: ComponentList,
    pub complete_count: usize,
    pub bipartite_count: usize,
    pub partition_count: usize,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub anomalies: Vec<UnclassifiedComponent>,
}

impl CatalogEntry {
    pub fn is_summary(&self) -> bool {
        self.zero_divisor_graph.is_none()
    }

    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Clique => self.complete_count > 0,
            ComponentKind::Bipartite => self.bipartite_count > 0,
        }
    }

    /// Drop the graphs, keeping only the classification.
    pub fn into_summary(mut self) -> Self {
        self.zero_divisor_graph = None;
        self.exact_zero_divisor_graph = None;
        self
    }
}

/// Compute the full catalog entry for `Z_n`.
///
/// ```rust
/// # use zero_divisor_catalog::catalog::compute_catalog_entry;
/// let entry = compute_catalog_entry(12).unwrap();
/// assert_eq!(entry.description, "(1,2),(2,2)");
/// assert_eq!(entry.partition_count, 2);
/// ```
pub fn compute_catalog_entry(n: u64) -> Result<CatalogEntry> {
    compute_catalog_entry_with(n, &CatalogOptions::default())
}

/// Compute the catalog entry for `Z_n` using `options`.
pub fn compute_catalog_entry_with(n: u64, options: &CatalogOptions) -> Result<CatalogEntry> {
    let ring = Ring::new(n)?;
    let pairs = zero_divisor_pairs(ring);
    let exact = exact_pairs(&pairs);
    let exact_graph = exact_zero_divisor_graph(&exact);
    let classification = classify_components(&exact_graph);

    if options.strict && !classification.anomalies.is_empty() {
        return Err(CatalogError::Unclassified {
            n,
            count: classification.anomalies.len(),
        });
    }

    let (z_graph, ez_graph) = if options.is_summary(n) {
        (None, None)
    } else {
        (Some(zero_divisor_graph(&pairs)), Some(exact_graph))
    };

    let description = classification.components.to_string();
    tracing::debug!(n, %description, summary = options.is_summary(n), "computed catalog entry");

    Ok(CatalogEntry {
        n,
        zero_divisor_graph: z_graph,
        exact_zero_divisor_graph: ez_graph,
        complete_count: classification.complete_count(),
        bipartite_count: classification.bipartite_count(),
        partition_count: classification.partition_count(),
        components: classification.components,
        description,
        anomalies: classification.anomalies,
    })
}

/// Catalog entries for a contiguous range of `n`, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, n: u64) -> Option<&CatalogEntry> {
        self.entries
            .binary_search_by_key(&n, |e| e.n)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// `(n, description)` rows.
    pub fn table(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.entries.iter().map(|e| (e.n, e.description.as_str()))
    }

    pub fn filter<'a>(
        &'a self,
        query: &'a ComponentQuery,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |e| query.matches(e))
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut entries: Vec<CatalogEntry> = iter.into_iter().collect();
        entries.sort_by_key(|e| e.n);
        Catalog { entries }
    }
}

/// Compute entries for every `n` in `range`.
///
/// Each `n` is computed independently on the rayon thread pool.
pub fn build_catalog(range: RangeInclusive<u64>, options: &CatalogOptions) -> Result<Catalog> {
    tracing::info!(start = range.start(), end = range.end(), "building catalog");
    let entries = range
        .into_par_iter()
        .map(|n| compute_catalog_entry_with(n, options))
        .collect::<Result<Vec<_>>>()?;
    let anomalous = entries.iter().filter(|e| !e.anomalies.is_empty()).count();
    tracing::info!(entries = entries.len(), anomalous, "catalog complete");
    Ok(entries.into_iter().collect())
}

//! Searching catalog entries by their components.
use super::CatalogEntry;
use crate::component::{Component, ComponentKind, ComponentList};
use crate::error::Result;

use core::cmp::Reverse;
use core::ops::RangeInclusive;

/// A filter over catalog entries.
///
/// An entry matches when it lies in `range`, contains every `required` component (counting
/// repeats), and has at least one component of `kind`. With `exact_match`, the entry must also
/// have no components beyond the required ones.
///
/// Containment counts multiplicity: `(2,4),(2,4)` only matches entries with two `K_{2,4}`
/// components. The Python catalog tool this replaces checked membership only, so there the same
/// filter also matched entries with a single `K_{2,4}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentQuery {
    pub range: Option<RangeInclusive<u64>>,
    pub required: ComponentList,
    pub exact_match: bool,
    pub kind: Option<ComponentKind>,
}

impl ComponentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_range(mut self, range: RangeInclusive<u64>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn requiring(mut self, required: ComponentList) -> Self {
        self.required = required;
        self
    }

    /// Require the components of a description such as `"4,(1,8)"`.
    pub fn requiring_str(self, description: &str) -> Result<Self> {
        Ok(self.requiring(description.parse()?))
    }

    pub fn exact(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(range) = &self.range {
            if !range.contains(&entry.n) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if !entry.has_kind(kind) {
                return false;
            }
        }
        if self.required.is_empty() {
            return true;
        }
        if self.exact_match && entry.partition_count != self.required.len() {
            return false;
        }
        entry.components.contains_all(&self.required)
    }
}

/// Entries with the most components, most first. Entries with no components are skipped.
pub fn most_components(entries: &[CatalogEntry], limit: usize) -> Vec<&CatalogEntry> {
    let mut found: Vec<&CatalogEntry> = entries.iter().filter(|e| e.partition_count > 0).collect();
    found.sort_by_key(|e| Reverse(e.partition_count));
    found.truncate(limit);
    found
}

fn components_of(entries: &[CatalogEntry], kind: ComponentKind) -> Vec<(u64, Component)> {
    entries
        .iter()
        .flat_map(|e| e.components.iter().map(move |c| (e.n, *c)))
        .filter(|(_, c)| c.kind() == kind)
        .collect()
}

/// Bipartite components `K_{p,q}` with the largest `p + q`, largest first.
pub fn largest_bipartite(entries: &[CatalogEntry], limit: usize) -> Vec<(u64, Component)> {
    let mut found = components_of(entries, ComponentKind::Bipartite);
    found.sort_by_key(|(_, c)| Reverse(c.vertex_count()));
    found.truncate(limit);
    found
}

/// Clique components with the most vertices, largest first.
pub fn largest_cliques(entries: &[CatalogEntry], limit: usize) -> Vec<(u64, Component)> {
    let mut found = components_of(entries, ComponentKind::Clique);
    found.sort_by_key(|(_, c)| Reverse(c.vertex_count()));
    found.truncate(limit);
    found
}

/// Every distinct `(n, K_{p,q})` with `p + q = sum`, ascending by `n`.
pub fn bipartite_with_sum(entries: &[CatalogEntry], sum: usize) -> Vec<(u64, Component)> {
    let mut found: Vec<(u64, Component)> = components_of(entries, ComponentKind::Bipartite)
        .into_iter()
        .filter(|(_, c)| c.vertex_count() == sum)
        .collect();
    found.dedup();
    found
}

/// Every `n` whose exact graph has a `K_size` component.
pub fn cliques_of_size(entries: &[CatalogEntry], size: usize) -> Vec<u64> {
    entries
        .iter()
        .filter(|e| e.components.iter().any(|c| *c == Component::clique(size)))
        .map(|e| e.n)
        .collect()
}

/// Entries having both clique and bipartite components.
pub fn mixed_kinds(entries: &[CatalogEntry]) -> Vec<&CatalogEntry> {
    entries
        .iter()
        .filter(|e| e.has_kind(ComponentKind::Clique) && e.has_kind(ComponentKind::Bipartite))
        .collect()
}

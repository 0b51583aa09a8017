//! Connected components of the exact zero-divisor graph, and their classification as cliques
//! `K_p` or complete bipartite graphs `K_{p,q}`.
pub mod classify;
pub mod description;

pub use classify::*;

/// The isomorphism type of a classified component.
///
/// The derived ordering is the canonical catalog order: every clique sorts before every
/// bipartite component, and components of the same kind compare by their sizes
/// lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Component {
    /// The complete graph `K_p`.
    Clique { p: usize },
    /// The complete bipartite graph `K_{p,q}` with `p <= q`.
    Bipartite { p: usize, q: usize },
}

impl Component {
    pub fn clique(p: usize) -> Self {
        Component::Clique { p }
    }

    /// `K_{a,b}`, with the parts ordered so that `p <= q`.
    pub fn bipartite(a: usize, b: usize) -> Self {
        Component::Bipartite {
            p: a.min(b),
            q: a.max(b),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Clique { .. } => ComponentKind::Clique,
            Component::Bipartite { .. } => ComponentKind::Bipartite,
        }
    }

    /// Number of sizes needed to describe the component: 1 for a clique, 2 for bipartite.
    pub fn arity(&self) -> usize {
        match self {
            Component::Clique { .. } => 1,
            Component::Bipartite { .. } => 2,
        }
    }

    pub fn vertex_count(&self) -> usize {
        match *self {
            Component::Clique { p } => p,
            Component::Bipartite { p, q } => p + q,
        }
    }

    /// Number of edges of `K_p` or `K_{p,q}`.
    pub fn edge_count(&self) -> usize {
        match *self {
            Component::Clique { p } => p * p.saturating_sub(1) / 2,
            Component::Bipartite { p, q } => p * q,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    Clique,
    Bipartite,
}

/// A list of components in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ComponentList(Vec<Component>);

impl ComponentList {
    /// Sort `components` into canonical order.
    pub fn new(mut components: Vec<Component>) -> Self {
        components.sort();
        ComponentList(components)
    }

    pub fn as_slice(&self) -> &[Component] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Component> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count(&self, kind: ComponentKind) -> usize {
        self.0.iter().filter(|c| c.kind() == kind).count()
    }

    /// True when every component of `required` occurs in `self`, counting multiplicity.
    pub fn contains_all(&self, required: &ComponentList) -> bool {
        // Both lists are sorted, so a single merge pass suffices.
        let mut have = self.0.iter();
        'outer: for want in required.iter() {
            for c in have.by_ref() {
                match c.cmp(want) {
                    core::cmp::Ordering::Less => continue,
                    core::cmp::Ordering::Equal => continue 'outer,
                    core::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    pub fn into_vec(self) -> Vec<Component> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ComponentList {
    type Item = &'a Component;
    type IntoIter = core::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Component> for ComponentList {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        ComponentList::new(iter.into_iter().collect())
    }
}

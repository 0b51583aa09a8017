use super::{Component, ComponentKind, ComponentList};
use crate::annihilator::ElementSet;
use crate::graph::{Edge, Graph};
use crate::union_find::UnionFind;

use std::collections::{BTreeMap, VecDeque};

/// A connected subgraph of a [`Graph`], with at least one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    pub vertices: Vec<u64>,
    pub edges: Vec<Edge>,
}

/// A component which is neither a clique nor complete bipartite.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnclassifiedComponent {
    pub vertices: Vec<u64>,
    pub edge_count: usize,
}

/// The result of classifying every component of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub components: ComponentList,
    pub anomalies: Vec<UnclassifiedComponent>,
}

impl Classification {
    pub fn complete_count(&self) -> usize {
        self.components.count(ComponentKind::Clique)
    }

    pub fn bipartite_count(&self) -> usize {
        self.components.count(ComponentKind::Bipartite)
    }

    pub fn partition_count(&self) -> usize {
        self.components.len()
    }
}

/// Partition the non-loop edges of `graph` into connected components.
///
/// Vertices with no non-loop edges (isolated or looped only) belong to no component. Components
/// are returned in order of their smallest vertex.
pub fn connected_components(graph: &Graph) -> Vec<ConnectedComponent> {
    let vertices: Vec<u64> = graph.connected_vertices().into_iter().collect();
    let index: BTreeMap<u64, usize> = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut uf = UnionFind::new(vertices.len());
    for e in &graph.edges {
        uf.union(index[&e.0], index[&e.1]);
    }

    let groups = uf.groups();
    let mut slot = vec![0; vertices.len()];
    for (g, members) in groups.iter().enumerate() {
        for &i in members {
            slot[i] = g;
        }
    }

    let mut components: Vec<ConnectedComponent> = groups
        .into_iter()
        .map(|members| ConnectedComponent {
            vertices: members.into_iter().map(|i| vertices[i]).collect(),
            edges: Vec::new(),
        })
        .collect();
    for e in &graph.edges {
        components[slot[index[&e.0]]].edges.push(*e);
    }
    components
}

/// Split a connected component into two color classes, or return `None` if it has an odd
/// cycle.
///
/// Coloring is breadth-first from the smallest vertex, which always lands in the first class.
pub fn two_coloring(component: &ConnectedComponent) -> Option<(ElementSet, ElementSet)> {
    let mut adjacency: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for e in &component.edges {
        adjacency.entry(e.0).or_default().push(e.1);
        adjacency.entry(e.1).or_default().push(e.0);
    }

    let mut color: BTreeMap<u64, bool> = BTreeMap::new();
    for &start in &component.vertices {
        if color.contains_key(&start) {
            continue;
        }
        color.insert(start, false);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            let cu = color[&u];
            for &w in adjacency.get(&u).into_iter().flatten() {
                match color.get(&w) {
                    None => {
                        color.insert(w, !cu);
                        queue.push_back(w);
                    }
                    Some(&cw) if cw == cu => return None,
                    Some(_) => {}
                }
            }
        }
    }

    let (a, b): (Vec<_>, Vec<_>) = color.into_iter().partition(|&(_, c)| !c);
    Some((
        a.into_iter().map(|(v, _)| v).collect(),
        b.into_iter().map(|(v, _)| v).collect(),
    ))
}

/// Classify a connected component as `K_p`, `K_{p,q}`, or neither.
///
/// The clique test runs first, so `K_2` (which is also `K_{1,1}`) is a clique.
pub fn classify(component: &ConnectedComponent) -> Option<Component> {
    let p = component.vertices.len();
    let e = component.edges.len();
    if p < 2 {
        return None;
    }
    if e == p * (p - 1) / 2 {
        return Some(Component::clique(p));
    }
    let (a, b) = two_coloring(component)?;
    if e == a.len() * b.len() {
        Some(Component::bipartite(a.len(), b.len()))
    } else {
        None
    }
}

/// Classify every component of `graph`, collecting components in canonical order.
///
/// Unclassifiable components are logged and returned as anomalies rather than dropped.
pub fn classify_components(graph: &Graph) -> Classification {
    let mut found = Vec::new();
    let mut anomalies = Vec::new();
    for component in connected_components(graph) {
        match classify(&component) {
            Some(c) => found.push(c),
            None => {
                tracing::warn!(
                    vertices = ?component.vertices,
                    edges = component.edges.len(),
                    "component is neither a clique nor complete bipartite"
                );
                anomalies.push(UnclassifiedComponent {
                    edge_count: component.edges.len(),
                    vertices: component.vertices,
                });
            }
        }
    }
    Classification {
        components: ComponentList::new(found),
        anomalies,
    }
}

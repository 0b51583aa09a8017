use zero_divisor_catalog::component::*;
use zero_divisor_catalog::graph::Graph;

use super::strategy::{arb_clique, arb_complete_bipartite, arb_graph};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn cliques_are_recognised((p, g) in arb_clique()) {
        let result = classify_components(&g);
        prop_assert_eq!(result.components.as_slice(), &[Component::clique(p)]);
        prop_assert!(result.anomalies.is_empty());
    }

    #[test]
    fn complete_bipartite_graphs_are_recognised(((a, b), g) in arb_complete_bipartite()) {
        let result = classify_components(&g);
        prop_assert_eq!(result.components.as_slice(), &[Component::bipartite(a, b)]);
        prop_assert!(result.anomalies.is_empty());
    }

    #[test]
    fn disjoint_union_classifies_each_part(
        (p, clique) in arb_clique(),
        ((a, b), bip) in arb_complete_bipartite()
    ) {
        // shift the bipartite labels out of the clique's range
        let shifted = Graph::from_pairs(bip.edges.iter().map(|e| (e.0 + 1000, e.1 + 1000)));
        let union = Graph::from_pairs(
            clique.edges.iter().chain(shifted.edges.iter()).map(|e| (e.0, e.1)),
        );
        let result = classify_components(&union);
        prop_assert_eq!(
            result.components.as_slice(),
            &[Component::clique(p), Component::bipartite(a, b)]
        );
        prop_assert_eq!(result.partition_count(), 2);
    }

    #[test]
    fn components_partition_the_edges(g in arb_graph()) {
        let components = connected_components(&g);
        let total: usize = components.iter().map(|c| c.edges.len()).sum();
        prop_assert_eq!(total, g.edge_count());
        for c in &components {
            prop_assert!(c.vertices.len() >= 2);
            prop_assert!(!c.edges.is_empty());
        }
    }

    #[test]
    fn classification_obeys_edge_count_law(g in arb_graph()) {
        let result = classify_components(&g);
        let mut counts: Vec<(usize, usize)> = connected_components(&g)
            .iter()
            .filter_map(|c| classify(c).map(|k| (k.vertex_count(), c.edges.len())))
            .collect();
        counts.sort();
        let mut expected: Vec<(usize, usize)> = result
            .components
            .iter()
            .map(|k| (k.vertex_count(), k.edge_count()))
            .collect();
        expected.sort();
        prop_assert_eq!(counts, expected);
        prop_assert_eq!(
            result.components.len() + result.anomalies.len(),
            connected_components(&g).len()
        );
    }

    #[test]
    fn classification_is_sorted(g in arb_graph()) {
        let result = classify_components(&g);
        let mut resorted = result.components.as_slice().to_vec();
        resorted.sort_by_key(|c| match *c {
            Component::Clique { p } => (c.arity(), vec![p]),
            Component::Bipartite { p, q } => (c.arity(), vec![p, q]),
        });
        prop_assert_eq!(result.components.as_slice(), resorted.as_slice());
    }
}

#[test]
fn loop_only_vertices_are_not_components() {
    let g = Graph::from_pairs([(2, 2), (5, 5)]);
    assert!(connected_components(&g).is_empty());
    assert_eq!(classify_components(&g), Classification::default());
}

#[test]
fn k4_minus_an_edge_is_unclassified() {
    let g = Graph::from_pairs([(1, 2), (1, 3), (1, 4), (2, 3), (2, 4)]);
    let result = classify_components(&g);
    assert!(result.components.is_empty());
    assert_eq!(result.anomalies[0].vertices, vec![1, 2, 3, 4]);
    assert_eq!(result.anomalies[0].edge_count, 5);
}

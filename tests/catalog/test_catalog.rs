use zero_divisor_catalog::annihilator::zero_divisor_pairs;
use zero_divisor_catalog::closure::exact_pairs;
use zero_divisor_catalog::component::{connected_components, Component, ComponentList};
use zero_divisor_catalog::prelude::*;

use crate::pipeline::strategy::arb_modulus;

use proptest::{prop_assert, prop_assert_eq, proptest};

fn graphs(entry: &CatalogEntry) -> (&Graph, &Graph) {
    (
        entry.zero_divisor_graph.as_ref().expect("full entry"),
        entry.exact_zero_divisor_graph.as_ref().expect("full entry"),
    )
}

proptest! {
    #[test]
    fn zero_is_excluded(n in arb_modulus()) {
        let entry = compute_catalog_entry(n).unwrap();
        let (z, ez) = graphs(&entry);
        prop_assert!(!z.vertices.contains(&0));
        prop_assert!(!ez.vertices.contains(&0));
    }

    #[test]
    fn exact_edges_are_symmetric(n in arb_modulus()) {
        let entry = compute_catalog_entry(n).unwrap();
        let exact = exact_pairs(&zero_divisor_pairs(Ring::new(n).unwrap()));
        for e in &graphs(&entry).1.edges {
            prop_assert!(exact.contains(e.0, e.1));
            prop_assert!(exact.contains(e.1, e.0));
        }
    }

    #[test]
    fn computation_is_idempotent(n in arb_modulus()) {
        let first = compute_catalog_entry(n).unwrap();
        let second = compute_catalog_entry(n).unwrap();
        prop_assert_eq!(&first.description, &second.description);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn edge_count_law(n in arb_modulus()) {
        let entry = compute_catalog_entry(n).unwrap();
        let mut actual: Vec<(usize, usize)> = connected_components(graphs(&entry).1)
            .iter()
            .map(|c| (c.vertices.len(), c.edges.len()))
            .collect();
        actual.sort();
        let mut expected: Vec<(usize, usize)> = entry
            .components
            .iter()
            .map(|c| (c.vertex_count(), c.edge_count()))
            .collect();
        expected.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn components_are_sorted(n in arb_modulus()) {
        let entry = compute_catalog_entry(n).unwrap();
        let resorted = ComponentList::new(entry.components.as_slice().to_vec());
        prop_assert_eq!(&resorted, &entry.components);
        prop_assert_eq!(
            entry.partition_count,
            entry.complete_count + entry.bipartite_count
        );
    }

    #[test]
    fn description_round_trips(n in arb_modulus()) {
        let entry = compute_catalog_entry(n).unwrap();
        let parsed: ComponentList = entry.description.parse().unwrap();
        prop_assert_eq!(parsed, entry.components);
    }
}

#[test]
fn z4_has_a_loop_but_no_components() {
    let entry = compute_catalog_entry(4).unwrap();
    let (z, ez) = graphs(&entry);
    assert_eq!(z.self_loops.iter().copied().collect::<Vec<_>>(), vec![2]);
    assert_eq!(ez.self_loops.iter().copied().collect::<Vec<_>>(), vec![2]);
    assert_eq!(ez.vertices.iter().copied().collect::<Vec<_>>(), vec![2]);
    assert!(entry.anomalies.is_empty());
    assert_eq!(entry.description, "None");
    assert_eq!(entry.partition_count, 0);
}

#[test]
fn z6_is_a_single_star() {
    let entry = compute_catalog_entry(6).unwrap();
    let (_, ez) = graphs(&entry);
    assert_eq!(ez.edges.iter().copied().collect::<Vec<_>>(), vec![Edge(2, 3), Edge(3, 4)]);
    assert_eq!(entry.components.as_slice(), &[Component::bipartite(1, 2)]);
    assert_eq!(entry.description, "(1,2)");
    assert_eq!(entry.bipartite_count, 1);
    assert_eq!(entry.description, compute_catalog_entry(6).unwrap().description);
}

#[test]
fn z10_round_trips_through_the_grammar() {
    let entry = compute_catalog_entry(10).unwrap();
    assert!(!entry.components.is_empty());
    assert_eq!(entry.description, "(1,4)");
    let parsed: ComponentList = entry.description.parse().unwrap();
    assert_eq!(parsed, entry.components);
}

#[test]
fn z9_is_a_clique_with_loops() {
    let entry = compute_catalog_entry(9).unwrap();
    let (_, ez) = graphs(&entry);
    assert_eq!(ez.self_loops.len(), 2);
    assert_eq!(entry.components.as_slice(), &[Component::clique(2)]);
    assert_eq!(entry.complete_count, 1);
}

#[test]
fn summary_entries_keep_the_classification() {
    let options = CatalogOptions::new().with_summary_threshold(50);
    let catalog = build_catalog(45..=55, &options).unwrap();
    for entry in catalog.entries() {
        assert_eq!(entry.is_summary(), entry.n > 50);
        let full = compute_catalog_entry(entry.n).unwrap();
        assert_eq!(entry.description, full.description);
        assert_eq!(entry.components, full.components);
    }
}

#[test]
fn invalid_ring_fails_fast() {
    assert_eq!(compute_catalog_entry(0), Err(CatalogError::InvalidRing { n: 0 }));
    assert_eq!(compute_catalog_entry(1), Err(CatalogError::InvalidRing { n: 1 }));
}

#[test]
fn query_over_a_catalog() {
    let catalog = build_catalog(2..=60, &CatalogOptions::default()).unwrap();
    let query = ComponentQuery::new().requiring_str("(2,8)").unwrap();
    let found: Vec<u64> = catalog.filter(&query).map(|e| e.n).collect();
    assert_eq!(found, vec![45, 48, 60]);
}

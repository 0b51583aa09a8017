use std::sync::Arc;
use std::thread;

use zero_divisor_catalog::prelude::*;
use zero_divisor_catalog::store::populate;

#[test]
fn concurrent_puts_are_all_kept() {
    let store = Arc::new(MemoryStore::new());
    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for n in (2..=41).filter(|n| n % 4 == worker) {
                    store.put(compute_catalog_entry(n).unwrap());
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.len(), 40);
    assert_eq!(store.get(30).unwrap().description, "(1,8),(2,4),(2,4)");
}

#[test]
fn populate_then_query_stored_entries() {
    let store = MemoryStore::new();
    let options = CatalogOptions::new().with_summary_threshold(20);
    assert_eq!(populate(&store, 2..=40, &options).unwrap(), 39);

    let stored = store.range(2..=40);
    let query = ComponentQuery::new()
        .requiring_str("(2,4)")
        .unwrap()
        .with_kind(ComponentKind::Bipartite);
    let found: Vec<u64> = stored.iter().filter(|e| query.matches(e)).map(|e| e.n).collect();
    assert_eq!(found, vec![15, 20, 24, 30, 32, 36, 40]);
    assert!(store.get(24).unwrap().is_summary());
    assert!(!store.get(20).unwrap().is_summary());
}

#[test]
fn store_can_be_used_as_a_trait_object() {
    let store: Box<dyn CatalogStore> = Box::new(MemoryStore::new());
    store.put(compute_catalog_entry(8).unwrap());
    assert_eq!(store.range(2..=100).len(), 1);
    assert!(store.remove(8));
    assert!(store.get(8).is_none());
}

use crate::mapper::ChainMapper;
use crate::node::Side;
use crate::registry::ValueRegistry;
use crate::store::NodeStore;

#[test]
fn find_or_insert_deduplicates() {
    let mut store: NodeStore<i32, ChainMapper> = NodeStore::new();
    let mut registry = ValueRegistry::new();

    let (a, fresh_a) = registry.find_or_insert(&mut store, 10, 2);
    let (b, fresh_b) = registry.find_or_insert(&mut store, 5, 3);
    let (again, fresh_again) = registry.find_or_insert(&mut store, 10, 4);

    assert!(fresh_a && fresh_b);
    assert!(!fresh_again);
    assert_eq!(a.into_raw(), again.into_raw());
    assert_ne!(a.into_raw(), b.into_raw());
    assert_eq!(registry.len(), 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn registry_is_sorted_by_value() {
    let mut store: NodeStore<i32, ChainMapper> = NodeStore::new();
    let mut registry = ValueRegistry::new();
    for (v, x) in [7, 3, 9, 1, 5].into_iter().enumerate() {
        registry.find_or_insert(&mut store, x, v + 2);
    }
    let values: Vec<i32> = registry.ids().iter().map(|&id| *store.value(id)).collect();
    assert_eq!(values, [1, 3, 5, 7, 9]);
}

#[test]
fn ever_existed_lookup() {
    let mut store: NodeStore<&str, ChainMapper> = NodeStore::new();
    let mut registry = ValueRegistry::new();
    registry.find_or_insert(&mut store, "b", 2);
    assert!(registry.ever_existed(&store, &"b"));
    assert!(!registry.ever_existed(&store, &"a"));
}

#[test]
fn fresh_node_slots_start_empty() {
    let mut store: NodeStore<i32, ChainMapper> = NodeStore::new();
    let mut registry = ValueRegistry::new();
    let (id, _) = registry.find_or_insert(&mut store, 1, 4);
    assert!(store.table(id, Side::Left).resolve(3).is_none());
    assert!(matches!(store.table(id, Side::Left).resolve(4), Some((4, None))));
    assert!(matches!(store.table(id, Side::Right).resolve(8), Some((4, None))));
}

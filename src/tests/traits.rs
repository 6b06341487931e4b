use crate::mapper::ForestMapper;
use crate::{FullSet, PartialSet, VersionedTree};

#[test]
fn default_is_empty() {
    let set: PartialSet<i32> = PartialSet::default();
    assert!(set.is_empty());
    assert_eq!(set.current_version(), 1);
    let full: FullSet<i32> = FullSet::default();
    assert!(full.is_empty());
}

#[test]
fn debug_format() {
    let set: PartialSet<i32> = PartialSet::new();
    let dbg = format!("{set:?}");
    assert!(dbg.contains("PartialSet"));
    assert!(dbg.contains("current_version"));

    let tree: VersionedTree<i32, ForestMapper> = VersionedTree::new();
    assert!(format!("{tree:?}").contains("VersionedTree"));
}

#[test]
fn from_iterator_skips_duplicates() {
    let set: PartialSet<i32> = vec![3, 1, 3, 2, 1].into_iter().collect();
    assert_eq!(set.len(), 3);
    assert_eq!(set.current_version(), 4);
    assert_eq!(set.to_vec(4).unwrap(), [1, 2, 3]);
}

#[test]
fn extend_mints_one_version_per_value() {
    let mut set = FullSet::new();
    set.insert(10).unwrap();
    set.extend(vec![20, 10, 30]);
    assert_eq!(set.current_version(), 4);
    assert_eq!(set.to_vec(3).unwrap(), [10, 20]);
    assert_eq!(set.to_vec(4).unwrap(), [10, 20, 30]);
}

#[test]
fn iter_size_hint_for_master_version_is_exact() {
    let set: FullSet<i32> = (0..5).collect();
    let it = set.iter(0).unwrap();
    assert_eq!(it.size_hint(), (5, Some(5)));
}

#[test]
fn extend_skips_only_live_values() {
    let mut set: PartialSet<i32> = (1..=3).collect();
    set.remove(&2).unwrap();
    let before = set.current_version();
    set.extend(vec![1, 2, 3, 4]);
    // 1 and 3 are live and skipped; 2 comes back on its first node.
    assert_eq!(set.current_version(), before + 2);
    assert_eq!(set.to_vec(set.current_version()).unwrap(), [1, 2, 3, 4]);
    assert_eq!(set.node_count(), 4);
}

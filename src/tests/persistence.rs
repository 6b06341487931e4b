use crate::{FullSet, MASTER_VERSION, PartialSet};

/// The reference walk-through: branch from version 2, then remove from both branches.
#[test]
fn reference_scenario() {
    let mut set = FullSet::new();
    assert_eq!(set.to_vec(1).unwrap(), Vec::<&str>::new());

    assert_eq!(set.insert("a").unwrap(), 2);
    assert_eq!(set.to_vec(2).unwrap(), ["a"]);

    assert_eq!(set.insert("b").unwrap(), 3);
    assert_eq!(set.to_vec(3).unwrap(), ["a", "b"]);

    assert_eq!(set.insert_at("c", 2).unwrap(), 4);
    assert_eq!(set.to_vec(4).unwrap(), ["a", "c"]);
    assert_eq!(set.to_vec(2).unwrap(), ["a"]);

    assert_eq!(set.remove(&"c").unwrap(), 5);
    assert_eq!(set.to_vec(5).unwrap(), ["a"]);
    assert!(set.contains(&"c", 4).unwrap());

    assert_eq!(set.remove_at(&"b", 3).unwrap(), 6);
    assert_eq!(set.to_vec(6).unwrap(), ["a"]);

    assert!(set.contains(&"b", MASTER_VERSION).unwrap());
    assert_eq!(set.size(1), 0);
    assert_eq!(set.size(MASTER_VERSION), 3);
}

/// Every earlier version reproduces the same sequence after later mutations.
#[test]
fn old_versions_are_immutable() {
    let mut set = PartialSet::new();
    let mut snapshots = Vec::new();
    for x in [50, 20, 80, 10, 30, 70, 90, 25, 35] {
        let v = set.insert(x).unwrap();
        snapshots.push((v, set.to_vec(v).unwrap()));
    }
    for x in [20, 50, 35, 90] {
        let v = set.remove(&x).unwrap();
        snapshots.push((v, set.to_vec(v).unwrap()));
    }
    set.insert(20).unwrap();
    set.insert(50).unwrap();

    for (v, expected) in &snapshots {
        assert_eq!(&set.to_vec(*v).unwrap(), expected, "version {v} changed");
        assert_eq!(set.size(*v), expected.len());
    }
}

/// Values removed everywhere are still known to the master version.
#[test]
fn ever_existence_survives_removal() {
    let mut set = PartialSet::new();
    set.insert(7).unwrap();
    set.remove(&7).unwrap();
    assert!(set.is_empty());
    assert!(set.contains(&7, MASTER_VERSION).unwrap());
    assert!(set.ever_contained(&7));
    assert!(!set.ever_contained(&8));
}

/// Removing and re-inserting never allocates a second node for a value.
#[test]
fn reinsertion_does_not_duplicate() {
    let mut set = FullSet::new();
    let v_a = set.insert(1).unwrap();
    set.insert(2).unwrap();
    let removed = set.remove(&1).unwrap();
    set.insert(1).unwrap();
    set.insert_at(1, removed).unwrap();
    set.insert_at(3, v_a).unwrap();
    set.remove_at(&1, v_a).unwrap();
    let again = set.insert_at(1, set.current_version()).unwrap();

    assert_eq!(set.size(MASTER_VERSION), 3);
    assert_eq!(set.node_count(), 3);
    assert_eq!(set.to_vec(again).unwrap(), [1]);
}

#[test]
fn display_renders_version() {
    let mut set = PartialSet::new();
    set.insert(2).unwrap();
    let v = set.insert(1).unwrap();
    assert_eq!(set.display(v).unwrap().to_string(), "Version 3: {1, 2}");
    assert_eq!(set.display(1).unwrap().to_string(), "Version 1: {}");
    assert_eq!(set.display(MASTER_VERSION).unwrap().to_string(), "Version 0: {1, 2}");
}

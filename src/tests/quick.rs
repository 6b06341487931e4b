//! Property tests: every version against a `BTreeSet` model of that version.

use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::{FullSet, MASTER_VERSION, PartialSet, SetError, Version};

/// The various kinds of "things" to do to a persistent set in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op {
    /// Insert the value.
    Insert(u8),
    /// Remove the value.
    Remove(u8),
    /// Compare the targeted version against its model.
    Check,
}

impl Arbitrary for Op {
    /// Keeps values in a small range so removals and re-insertions hit.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Self::Insert(u8::arbitrary(g) % 32),
            1 => Self::Remove(u8::arbitrary(g) % 32),
            2 => Self::Check,
            _ => unreachable!(),
        }
    }
}

fn as_vec(model: &BTreeSet<u8>) -> Vec<u8> {
    model.iter().copied().collect()
}

/// Every version, old or new, matches its model and its ledger entry.
fn all_versions_match<F>(models: &[BTreeSet<u8>], to_vec: F, size: impl Fn(Version) -> usize) -> bool
where
    F: Fn(Version) -> Vec<u8>,
{
    models
        .iter()
        .enumerate()
        .skip(1)
        .all(|(v, m)| to_vec(v) == as_vec(m) && size(v) == m.len())
}

#[quickcheck]
fn partial_set_matches_model(ops: Vec<Op>) -> bool {
    let mut set = PartialSet::new();
    let mut models = vec![BTreeSet::new(), BTreeSet::new()];
    let mut ever = BTreeSet::new();

    for op in ops {
        let last = set.current_version();
        let mut next = models[last].clone();
        let outcome = match op {
            Op::Insert(x) => {
                let fresh = next.insert(x);
                ever.insert(x);
                (set.insert(x), fresh)
            }
            Op::Remove(x) => (set.remove(&x), next.remove(&x)),
            Op::Check => {
                if set.to_vec(last).unwrap() != as_vec(&models[last]) {
                    return false;
                }
                continue;
            }
        };
        match outcome {
            (Ok(v), true) if v == models.len() => models.push(next),
            (Err(SetError::ObjectAlreadyExist { .. } | SetError::ObjectNotExist { .. }), false) => {
                if set.current_version() != last {
                    return false;
                }
            }
            _ => return false,
        }
    }

    all_versions_match(&models, |v| set.to_vec(v).unwrap(), |v| set.size(v))
        && ever.iter().all(|x| set.contains(x, MASTER_VERSION).unwrap())
        && set.size(MASTER_VERSION) == ever.len()
}

#[quickcheck]
fn full_set_matches_model(ops: Vec<(usize, Op)>) -> bool {
    let mut set = FullSet::new();
    let mut models = vec![BTreeSet::new(), BTreeSet::new()];

    for (pick, op) in ops {
        let target = pick % set.current_version() + 1;
        let mut next = models[target].clone();
        let outcome = match op {
            Op::Insert(x) => (set.insert_at(x, target), next.insert(x)),
            Op::Remove(x) => (set.remove_at(&x, target), next.remove(&x)),
            Op::Check => {
                if set.to_vec(target).unwrap() != as_vec(&models[target]) {
                    return false;
                }
                continue;
            }
        };
        match outcome {
            (Ok(v), true) if v == models.len() => models.push(next),
            (Err(_), false) => {}
            _ => return false,
        }
    }

    all_versions_match(&models, |v| set.to_vec(v).unwrap(), |v| set.size(v))
}

/// Branching from `v` leaves `v` alone and adds exactly the new value.
#[quickcheck]
fn branch_isolation(base: Vec<u8>, pick: usize, x: u8) -> bool {
    let set_base: BTreeSet<u8> = base.iter().copied().collect();
    let mut set: FullSet<u8> = set_base.iter().copied().collect();
    let target = pick % set.current_version() + 1;
    let before = set.to_vec(target).unwrap();
    if before.contains(&x) {
        return set.insert_at(x, target).is_err();
    }

    let v = set.insert_at(x, target).unwrap();
    let mut expected = before.clone();
    expected.push(x);
    expected.sort_unstable();
    set.to_vec(target).unwrap() == before && set.to_vec(v).unwrap() == expected
}

/// Removing everything and inserting it again never grows the registry.
#[quickcheck]
fn reinsertion_keeps_master_size(xs: Vec<u8>) -> bool {
    let mut set: PartialSet<u8> = xs.iter().copied().collect();
    let distinct = set.size(MASTER_VERSION);
    let live = set.to_vec(set.current_version()).unwrap();
    for x in &live {
        set.remove(x).unwrap();
    }
    for x in &live {
        set.insert(*x).unwrap();
    }
    set.size(MASTER_VERSION) == distinct && set.node_count() == distinct && set.len() == distinct
}

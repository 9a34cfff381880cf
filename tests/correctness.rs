//! Correctness tests: fixed scenarios against hand-computed sums

use prefixsum::*;
use test_case::test_case;
use test_helpers::*;

#[test_case(5, 15 ; "prefix of five")]
#[test_case(1, 1 ; "first position only")]
#[test_case(10, 55 ; "whole index")]
#[test_case(0, 0 ; "empty prefix")]
fn seeded_prefix_sums(index: usize, expected: i64) {
    let tree = seeded_index(10);
    assert_eq!(tree.prefix_sum(index).unwrap(), expected);
}

#[test_case(3, 7, 25 ; "middle range")]
#[test_case(1, 10, 55 ; "full range")]
#[test_case(4, 4, 4 ; "single position")]
#[test_case(8, 3, 0 ; "reversed range is empty")]
#[test_case(11, 10, 0 ; "reversed range past the end")]
fn seeded_range_sums(low: usize, high: usize, expected: i64) {
    let tree = seeded_index(10);
    assert_eq!(tree.range_sum(low, high).unwrap(), expected);
}

#[test]
fn test_update_after_seeding() {
    let mut tree = seeded_index(10);
    assert_eq!(tree.get(4).unwrap(), 4);

    tree.update(5, 10).unwrap();
    assert_eq!(tree.range_sum(3, 7).unwrap(), 35);
    assert_eq!(tree.get(5).unwrap(), 15);
    assert_eq!(tree.total(), 65);
}

#[test]
fn test_single_position_index() {
    let mut tree = PrefixSumIndex::new(1).unwrap();
    tree.update(1, 7).unwrap();

    assert_eq!(tree.get(1).unwrap(), 7);
    assert_eq!(tree.range_sum(1, 1).unwrap(), 7);
    assert_eq!(tree.prefix_sum(0).unwrap(), 0);
    assert_eq!(tree.values(), vec![7]);
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(PrefixSumIndex::new(0).unwrap_err(), PrefixSumError::InvalidSize);
}

#[test_case(0 ; "position zero")]
#[test_case(11 ; "one past the end")]
#[test_case(usize::MAX ; "far past the end")]
fn test_update_out_of_domain(position: usize) {
    let mut tree = seeded_index(10);
    let err = tree.update(position, 5).unwrap_err();
    assert_eq!(
        err,
        PrefixSumError::InvalidIndex {
            index: position,
            min: 1,
            max: 10
        }
    );
    assert_eq!(tree.values(), (1..=10).collect::<Vec<i64>>());
}

#[test]
fn test_repeated_update_accumulates() {
    let mut twice = PrefixSumIndex::new(16).unwrap();
    twice.update(6, -9).unwrap();
    twice.update(6, -9).unwrap();

    let mut once = PrefixSumIndex::new(16).unwrap();
    once.update(6, -18).unwrap();

    assert_eq!(twice, once);
    assert_eq!(twice.get(6).unwrap(), -18);
    assert_eq!(twice.range_sum(1, 16).unwrap(), -18);
}

#[test]
fn test_reads_are_idempotent() {
    let tree = PrefixSumIndex::from_values(&[4, -1, 8, 0, 3]).unwrap();
    let first = (tree.prefix_sum(4).unwrap(), tree.range_sum(2, 5).unwrap(), tree.get(3).unwrap());
    for _ in 0..3 {
        let again = (tree.prefix_sum(4).unwrap(), tree.range_sum(2, 5).unwrap(), tree.get(3).unwrap());
        assert_eq!(first, again);
    }
}

#[test]
fn test_matches_naive_reference_exhaustively() {
    let size = 33;
    let mut tree = PrefixSumIndex::new(size).unwrap();
    let mut naive = NaiveSums::new(size);
    for i in 1..=size {
        let delta = (i as i64 * 7919) % 101 - 50;
        tree.update(i, delta).unwrap();
        naive.update(i, delta);
    }

    for low in 1..=size {
        assert_eq!(tree.prefix_sum(low).unwrap(), naive.prefix_sum(low));
        for high in low..=size {
            assert_eq!(
                tree.range_sum(low, high).unwrap(),
                naive.range_sum(low, high),
                "range [{}, {}]",
                low,
                high
            );
        }
    }
}

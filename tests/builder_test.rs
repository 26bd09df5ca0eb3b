//! Tests for ChainBuilder construction and rollback

use rstest::rstest;

use chainlist::builder::{ChainBuilder, NODE_COUNT};
use chainlist::errors::ChainError;

// ============================================================
// Success Path Tests
// ============================================================

#[test]
fn given_default_capacity_when_building_then_chain_is_complete() {
    let chain = ChainBuilder::new().build().unwrap();

    assert_eq!(chain.values(), vec![0, 1, 2, 3, 4]);
    assert_eq!(chain.len(), NODE_COUNT + 1);
}

#[test]
fn given_surplus_capacity_when_building_then_chain_is_unaffected() {
    let chain = ChainBuilder::with_capacity(NODE_COUNT + 4).build().unwrap();

    assert_eq!(chain.values(), vec![0, 1, 2, 3, 4]);
    assert_eq!(chain.len(), NODE_COUNT + 1);
}

#[test]
fn given_one_builder_when_building_twice_then_chains_are_independent() {
    let mut builder = ChainBuilder::new();

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first.values(), second.values());
    assert_eq!(first.len(), NODE_COUNT + 1);
    assert_eq!(second.len(), NODE_COUNT + 1);
}

// ============================================================
// Failure Injection Tests
// ============================================================

// Capacity k exhausts the arena at allocation point k+1 of 6
// (sentinel first, then data nodes 0..4).
#[rstest]
#[case::sentinel_allocation_fails(0)]
#[case::first_data_node_fails(1)]
#[case::second_data_node_fails(2)]
#[case::third_data_node_fails(3)]
#[case::fourth_data_node_fails(4)]
#[case::fifth_data_node_fails(5)]
fn given_exhausted_arena_when_building_then_fails_at_expected_point(#[case] capacity: usize) {
    let err = ChainBuilder::with_capacity(capacity).build().unwrap_err();

    let ChainError::AllocationFailure {
        allocated,
        capacity: reported,
    } = err;
    assert_eq!(
        allocated, capacity,
        "all slots must be in use at the failure point"
    );
    assert_eq!(reported, capacity);
}

#[test]
fn given_third_data_node_failure_when_building_then_prior_nodes_were_allocated() {
    // Capacity 3 holds the sentinel plus data nodes 0 and 1; the third data
    // node allocation is the one that fails.
    let err = ChainBuilder::with_capacity(3).build().unwrap_err();

    let ChainError::AllocationFailure { allocated, .. } = err;
    assert_eq!(allocated, 3);
}

#[test]
fn given_allocation_failure_when_displaying_then_message_names_the_failure() {
    let err = ChainBuilder::with_capacity(0).build().unwrap_err();

    let msg = err.to_string();
    assert!(
        msg.contains("allocation failed"),
        "unexpected message: {}",
        msg
    );
}

#[test]
fn given_failed_build_when_retrying_with_enough_capacity_then_succeeds() {
    assert!(ChainBuilder::with_capacity(2).build().is_err());

    let chain = ChainBuilder::new().build().unwrap();
    assert_eq!(chain.values(), vec![0, 1, 2, 3, 4]);
}

//! Integration tests for the dispatch boundary.
//!
//! Tests cover:
//! - Operation name parsing, including unknown names
//! - End-to-end dispatch of all three operations
//! - Boundary-level validation: negative offsets and non-positive ranks
//!   are rejected with the right field name
//! - Serde round-trips for requests, responses, and errors (feature-gated)

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use seqgrid::boundary::{ComputeRequest, ComputeResponse, Operation, dispatch, dispatch_default};

// =============================================================================
// Operation Names
// =============================================================================

#[rstest]
#[case("rotate", Operation::Rotate)]
#[case("selectKth", Operation::SelectKth)]
#[case("longestIncreasingPath", Operation::LongestIncreasingPath)]
fn operation_names_parse(#[case] name: &str, #[case] expected: Operation) {
    assert_eq!(name.parse::<Operation>(), Ok(expected));
    assert_eq!(expected.to_string(), name);
}

#[rstest]
#[case("")]
#[case("Rotate")] // names are case-sensitive
#[case("kthLargest")]
fn unknown_operation_names_are_rejected(#[case] name: &str) {
    let error = name.parse::<Operation>().unwrap_err();
    assert!(error.is_invalid_argument());
    assert_eq!(error.field(), Some("operation"));
}

// =============================================================================
// End-to-End Dispatch
// =============================================================================

#[rstest]
fn dispatches_rotate() {
    let response = dispatch_default(ComputeRequest::Rotate {
        values: vec![1, 2, 3, 4, 5, 6, 7],
        offset: 3,
    })
    .unwrap();
    assert_eq!(response, ComputeResponse::Sequence(vec![5, 6, 7, 1, 2, 3, 4]));
}

#[rstest]
fn dispatches_rotate_of_an_empty_sequence() {
    let response = dispatch_default(ComputeRequest::Rotate {
        values: Vec::new(),
        offset: 3,
    })
    .unwrap();
    assert_eq!(response, ComputeResponse::Sequence(Vec::new()));
}

#[rstest]
fn dispatches_select_kth_with_an_injected_rng() {
    let mut rng = StdRng::seed_from_u64(99);
    let response = dispatch(
        ComputeRequest::SelectKth {
            values: vec![3, 2, 1, 5, 6, 4],
            rank: 2,
        },
        &mut rng,
    )
    .unwrap();
    assert_eq!(response, ComputeResponse::Value(5));
}

#[rstest]
fn dispatches_longest_increasing_path() {
    let response = dispatch_default(ComputeRequest::LongestIncreasingPath {
        rows: vec![vec![9, 9, 4], vec![6, 6, 8], vec![2, 1, 1]],
    })
    .unwrap();
    assert_eq!(response, ComputeResponse::PathLength(4));
}

// =============================================================================
// Boundary Validation
// =============================================================================

#[rstest]
fn negative_offset_is_rejected_with_the_field_name() {
    let error = dispatch_default(ComputeRequest::Rotate {
        values: vec![1, 2, 3, 4, 5],
        offset: -2,
    })
    .unwrap_err();
    assert_eq!(error.field(), Some("offset"));
}

#[rstest]
#[case(-1)]
#[case(0)]
fn non_positive_rank_is_rejected_with_the_field_name(#[case] rank: i64) {
    let error = dispatch_default(ComputeRequest::SelectKth {
        values: vec![3, 2, 1],
        rank,
    })
    .unwrap_err();
    assert_eq!(error.field(), Some("rank"));
}

#[rstest]
fn oversized_rank_is_rejected_with_the_field_name() {
    let error = dispatch_default(ComputeRequest::SelectKth {
        values: vec![3, 1, 2],
        rank: 5,
    })
    .unwrap_err();
    assert_eq!(error.field(), Some("rank"));
}

#[rstest]
fn empty_selection_input_is_rejected_with_the_field_name() {
    let error = dispatch_default(ComputeRequest::SelectKth {
        values: Vec::new(),
        rank: 2,
    })
    .unwrap_err();
    assert_eq!(error.field(), Some("values"));
}

#[rstest]
#[case(vec![])]
#[case(vec![vec![1, 2], vec![3]])]
fn invalid_grids_are_rejected_with_the_field_name(#[case] rows: Vec<Vec<i64>>) {
    let error = dispatch_default(ComputeRequest::LongestIncreasingPath { rows }).unwrap_err();
    assert_eq!(error.field(), Some("grid"));
}

// =============================================================================
// Serde Round-Trips
// =============================================================================

#[cfg(feature = "serde")]
mod serde_round_trips {
    use seqgrid::error::ComputeError;

    use super::*;

    #[rstest]
    fn request_round_trips_through_json() {
        let request = ComputeRequest::SelectKth {
            values: vec![3, 2, 1],
            rank: 2,
        };
        let json = serde_json::to_string(&request).unwrap();
        let decoded: ComputeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }

    #[rstest]
    fn response_round_trips_through_json() {
        let response = ComputeResponse::Sequence(vec![5, 6, 7, 1]);
        let json = serde_json::to_string(&response).unwrap();
        let decoded: ComputeResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);
    }

    #[rstest]
    fn error_round_trips_through_json() {
        let error = ComputeError::invalid_argument("rank", "must be at least 1");
        let json = serde_json::to_string(&error).unwrap();
        let decoded: ComputeError = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, error);
    }
}

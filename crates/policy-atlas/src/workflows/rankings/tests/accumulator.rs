use super::common::connection;
use crate::workflows::rankings::accumulator::{accumulate_by_state, DEFAULT_WORKFORCE_RELEVANCE};
use crate::workflows::rankings::ConnectionPolarity;

#[test]
fn fold_tracks_counts_tiers_and_distinct_sets() {
    let connections = vec![
        connection(
            "CALIFORNIA",
            ConnectionPolarity::Positive,
            8,
            9,
            Some(7),
            "pol-1",
            "paper-1",
        ),
        connection(
            "CALIFORNIA",
            ConnectionPolarity::Positive,
            7,
            8,
            Some(8),
            "pol-1",
            "paper-2",
        ),
        connection(
            "CALIFORNIA",
            ConnectionPolarity::Negative,
            3,
            4,
            None,
            "pol-2",
            "paper-2",
        ),
        connection(
            "CALIFORNIA",
            ConnectionPolarity::Neutral,
            5,
            6,
            Some(5),
            "pol-2",
            "paper-3",
        ),
    ];

    let accumulators = accumulate_by_state(&connections);
    assert_eq!(accumulators.len(), 1);

    let accumulator = accumulators.get("CALIFORNIA").expect("state accumulated");
    assert_eq!(accumulator.total_connections, 4);
    assert_eq!(accumulator.positive_connections, 2);
    assert_eq!(accumulator.negative_connections, 1);
    assert_eq!(accumulator.strength_sum, 23.0);
    assert_eq!(accumulator.relevance_sum, 25.0);
    assert_eq!(accumulator.strong_evidence, 2);
    assert_eq!(accumulator.moderate_evidence, 1);
    assert_eq!(accumulator.weak_evidence, 1);
    assert_eq!(accumulator.policy_ids.len(), 2);
    assert_eq!(accumulator.paper_ids.len(), 3);
}

#[test]
fn missing_relevance_contributes_the_midpoint() {
    let connections = vec![connection(
        "OREGON",
        ConnectionPolarity::Positive,
        6,
        6,
        None,
        "pol-1",
        "paper-1",
    )];

    let accumulators = accumulate_by_state(&connections);
    let accumulator = accumulators.get("OREGON").expect("state accumulated");
    assert_eq!(
        accumulator.relevance_sum,
        f64::from(DEFAULT_WORKFORCE_RELEVANCE)
    );
}

#[test]
fn connections_without_a_state_are_dropped() {
    let connections = vec![connection(
        "",
        ConnectionPolarity::Positive,
        6,
        6,
        Some(6),
        "pol-1",
        "paper-1",
    )];

    assert!(accumulate_by_state(&connections).is_empty());
}

#[test]
fn grouping_is_case_sensitive() {
    let connections = vec![
        connection(
            "Texas",
            ConnectionPolarity::Positive,
            6,
            6,
            Some(6),
            "pol-1",
            "paper-1",
        ),
        connection(
            "TEXAS",
            ConnectionPolarity::Positive,
            6,
            6,
            Some(6),
            "pol-1",
            "paper-1",
        ),
    ];

    let accumulators = accumulate_by_state(&connections);
    assert_eq!(accumulators.len(), 2);
    assert!(accumulators.contains_key("Texas"));
    assert!(accumulators.contains_key("TEXAS"));
}

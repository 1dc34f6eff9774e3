use axum::response::Response;
use serde_json::Value;

use crate::workflows::rankings::domain::{
    BaselineWorkforceRecord, Connection, ConnectionPolarity, Policy,
};

pub(super) fn connection(
    state: &str,
    polarity: ConnectionPolarity,
    strength: u8,
    evidence_quality: u8,
    workforce_relevance: Option<u8>,
    policy_id: &str,
    paper_id: &str,
) -> Connection {
    Connection {
        state: state.to_string(),
        polarity,
        strength,
        evidence_quality,
        workforce_relevance,
        policy_id: policy_id.to_string(),
        paper_id: paper_id.to_string(),
    }
}

pub(super) fn policy(
    id: &str,
    jurisdiction: &str,
    status: &str,
    estimated_population_affected: Option<u64>,
) -> Policy {
    Policy {
        id: id.to_string(),
        title: format!("Policy {id}"),
        jurisdiction: jurisdiction.to_string(),
        status: status.to_string(),
        estimated_population_affected,
        enacted_on: None,
    }
}

pub(super) fn baseline(
    state: &str,
    baseline_workforce_score: f64,
    physician_density: Option<f64>,
) -> BaselineWorkforceRecord {
    BaselineWorkforceRecord {
        state: state.to_string(),
        baseline_workforce_score,
        physician_density,
    }
}

/// Two strong positive connections for one state, no baseline, no policies.
pub(super) fn california_connections() -> Vec<Connection> {
    vec![
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
            "pol-2",
            "paper-2",
        ),
    ]
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

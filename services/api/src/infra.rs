use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use policy_atlas::workflows::rankings::{
    BaselineWorkforceRecord, Connection, ConnectionPolarity, Policy, RankingSortKey,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<RankingSortKey, String> {
    raw.parse()
}

/// Synthetic dataset for the CLI demo: two evidence-rich states, one mixed
/// state, and two baseline-only states (one in shortage territory).
pub(crate) fn sample_connections() -> Vec<Connection> {
    let rows: &[(&str, ConnectionPolarity, u8, u8, Option<u8>, &str, &str)] = &[
        ("CALIFORNIA", ConnectionPolarity::Positive, 8, 9, Some(7), "pol-101", "paper-201"),
        ("CALIFORNIA", ConnectionPolarity::Positive, 7, 8, Some(8), "pol-102", "paper-202"),
        ("CALIFORNIA", ConnectionPolarity::Neutral, 5, 6, None, "pol-102", "paper-203"),
        ("IOWA", ConnectionPolarity::Positive, 6, 7, Some(6), "pol-110", "paper-210"),
        ("IOWA", ConnectionPolarity::Positive, 7, 8, Some(7), "pol-110", "paper-211"),
        ("TEXAS", ConnectionPolarity::Negative, 6, 7, Some(6), "pol-120", "paper-220"),
        ("TEXAS", ConnectionPolarity::Mixed, 5, 5, None, "pol-121", "paper-221"),
        ("TEXAS", ConnectionPolarity::Positive, 4, 4, Some(5), "pol-121", "paper-222"),
    ];

    rows.iter()
        .map(
            |(state, polarity, strength, evidence_quality, workforce_relevance, policy_id, paper_id)| {
                Connection {
                    state: (*state).to_string(),
                    polarity: *polarity,
                    strength: *strength,
                    evidence_quality: *evidence_quality,
                    workforce_relevance: *workforce_relevance,
                    policy_id: (*policy_id).to_string(),
                    paper_id: (*paper_id).to_string(),
                }
            },
        )
        .collect()
}

pub(crate) fn sample_policies() -> Vec<Policy> {
    vec![
        Policy {
            id: "pol-101".to_string(),
            title: "Primary care loan repayment expansion".to_string(),
            jurisdiction: "CALIFORNIA".to_string(),
            status: "Enacted".to_string(),
            estimated_population_affected: Some(900_000),
            enacted_on: NaiveDate::from_ymd_opt(2024, 7, 1),
        },
        Policy {
            id: "pol-102".to_string(),
            title: "Community health worker certification".to_string(),
            jurisdiction: "CALIFORNIA".to_string(),
            status: "Signed".to_string(),
            estimated_population_affected: Some(400_000),
            enacted_on: NaiveDate::from_ymd_opt(2025, 1, 15),
        },
        Policy {
            id: "pol-110".to_string(),
            title: "Rural residency slots".to_string(),
            jurisdiction: "IOWA".to_string(),
            status: "Effective July 2025".to_string(),
            estimated_population_affected: Some(250_000),
            enacted_on: NaiveDate::from_ymd_opt(2025, 7, 1),
        },
        Policy {
            id: "pol-120".to_string(),
            title: "Telehealth reimbursement rollback".to_string(),
            jurisdiction: "TEXAS".to_string(),
            status: "In committee".to_string(),
            estimated_population_affected: None,
            enacted_on: None,
        },
        Policy {
            id: "pol-121".to_string(),
            title: "Nurse licensure compact update".to_string(),
            jurisdiction: "TEXAS".to_string(),
            status: "Pending review".to_string(),
            estimated_population_affected: Some(1_200_000),
            enacted_on: None,
        },
    ]
}

pub(crate) fn sample_baselines() -> Vec<BaselineWorkforceRecord> {
    vec![
        BaselineWorkforceRecord {
            state: "CALIFORNIA".to_string(),
            baseline_workforce_score: 68.0,
            physician_density: Some(2.8),
        },
        BaselineWorkforceRecord {
            state: "IOWA".to_string(),
            baseline_workforce_score: 55.0,
            physician_density: Some(2.1),
        },
        BaselineWorkforceRecord {
            state: "TEXAS".to_string(),
            baseline_workforce_score: 47.0,
            physician_density: Some(2.3),
        },
        BaselineWorkforceRecord {
            state: "MAINE".to_string(),
            baseline_workforce_score: 61.0,
            physician_density: Some(3.1),
        },
        BaselineWorkforceRecord {
            state: "MISSISSIPPI".to_string(),
            baseline_workforce_score: 39.0,
            physician_density: Some(1.9),
        },
    ]
}

//! Integration specifications for the ranking workflow.
//!
//! Scenarios run end-to-end through the public facade: CSV evidence import,
//! ranking assembly, summary utilities, and the HTTP report route, without
//! reaching into private modules.

use std::io::Cursor;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use policy_atlas::workflows::evidence::EvidenceCsvImporter;
use policy_atlas::workflows::rankings::{
    assemble_rankings, grade_for_score, ranking_router, summarize, BaselineWorkforceRecord,
    Connection, ConnectionPolarity, Policy,
};

const EVIDENCE_EXPORT: &str = "\
State,Connection Type,Strength,Evidence Quality,Workforce Relevance,Policy ID,Paper ID
CA,positive,8,9,7,pol-101,paper-201
CA,positive,7,8,8,pol-102,paper-202
tx,negative,4,3,,pol-103,paper-203
TX,mixed,5,6,5,pol-103,paper-204
";

const BASELINE_EXPORT: &str = "\
State,Baseline Workforce Score,Physician Density
OH,44,
ME,91,1.8
";

fn policies() -> Vec<Policy> {
    vec![
        Policy {
            id: "pol-101".to_string(),
            title: "Loan repayment expansion".to_string(),
            jurisdiction: "CALIFORNIA".to_string(),
            status: "Enacted".to_string(),
            estimated_population_affected: Some(750_000),
            enacted_on: chrono::NaiveDate::from_ymd_opt(2024, 7, 1),
        },
        Policy {
            id: "pol-103".to_string(),
            title: "Scope-of-practice pilot".to_string(),
            jurisdiction: "TEXAS".to_string(),
            status: "In committee".to_string(),
            estimated_population_affected: None,
            enacted_on: None,
        },
    ]
}

#[test]
fn csv_exports_flow_through_the_engine() {
    let connections =
        EvidenceCsvImporter::connections_from_reader(Cursor::new(EVIDENCE_EXPORT))
            .expect("evidence import succeeds");
    let baselines = EvidenceCsvImporter::baselines_from_reader(Cursor::new(BASELINE_EXPORT))
        .expect("baseline import succeeds");

    // Abbreviations and case variants collapse onto canonical state names.
    assert!(connections
        .iter()
        .all(|connection| connection.state == "CALIFORNIA" || connection.state == "TEXAS"));

    let rankings = assemble_rankings(&connections, &policies(), &baselines);
    assert_eq!(rankings.len(), 4);

    let states: Vec<_> = rankings.iter().map(|ranking| ranking.state.as_str()).collect();
    assert!(states.contains(&"CALIFORNIA"));
    assert!(states.contains(&"TEXAS"));
    assert!(states.contains(&"OHIO"));
    assert!(states.contains(&"MAINE"));

    for ranking in &rankings {
        assert!(ranking.workforce_impact_score <= 100);
        assert_eq!(
            ranking.grade.letter,
            grade_for_score(f64::from(ranking.workforce_impact_score)).letter
        );
    }

    // Baseline-only states score their baseline exactly.
    let maine = rankings
        .iter()
        .find(|ranking| ranking.state == "MAINE")
        .expect("maine ranked");
    assert_eq!(maine.total_connections, 0);
    assert!(maine.has_baseline_data);
    assert_eq!(maine.workforce_impact_score, 91);

    let summary = summarize(&rankings);
    assert_eq!(summary.total_states, 4);
    assert_eq!(summary.states_with_data, 2);
    assert_eq!(summary.highest_score, 91);
}

#[test]
fn identical_inputs_produce_identical_rankings() {
    let connections = vec![
        Connection {
            state: "VERMONT".to_string(),
            polarity: ConnectionPolarity::Positive,
            strength: 6,
            evidence_quality: 7,
            workforce_relevance: None,
            policy_id: "pol-1".to_string(),
            paper_id: "paper-1".to_string(),
        },
        Connection {
            state: "VERMONT".to_string(),
            polarity: ConnectionPolarity::Neutral,
            strength: 5,
            evidence_quality: 5,
            workforce_relevance: Some(6),
            policy_id: "pol-2".to_string(),
            paper_id: "paper-2".to_string(),
        },
    ];
    let baselines = vec![BaselineWorkforceRecord {
        state: "VERMONT".to_string(),
        baseline_workforce_score: 58.0,
        physician_density: Some(2.2),
    }];

    let first = assemble_rankings(&connections, &[], &baselines);
    let second = assemble_rankings(&connections, &[], &baselines);
    assert_eq!(first, second);
}

#[tokio::test]
async fn report_route_serves_csv_backed_rankings() {
    let body = json!({
        "evidence_csv": EVIDENCE_EXPORT,
        "include_summary": true
    });

    let response = ranking_router()
        .oneshot(
            axum::http::Request::post("/api/v1/rankings/report")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json payload");

    assert_eq!(payload["data_source"], json!("csv_export"));
    let rankings = payload["rankings"].as_array().expect("rankings array");
    assert_eq!(rankings.len(), 2);
    assert_eq!(payload["summary"]["total_states"], json!(2));
}

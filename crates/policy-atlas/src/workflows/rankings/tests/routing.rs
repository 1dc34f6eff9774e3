use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::read_json_body;
use crate::workflows::rankings::ranking_router;

fn report_request(body: &serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/rankings/report")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn report_route_ranks_inline_collections() {
    let body = json!({
        "connections": [
            {
                "state": "CALIFORNIA",
                "polarity": "positive",
                "strength": 8,
                "evidence_quality": 9,
                "workforce_relevance": 7,
                "policy_id": "pol-1",
                "paper_id": "paper-1"
            }
        ],
        "baselines": [
            { "state": "TEXAS", "baseline_workforce_score": 50.0 }
        ]
    });

    let response = ranking_router()
        .oneshot(report_request(&body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["data_source"], json!("inline"));
    assert_eq!(payload["sort"], json!("score"));

    let rankings = payload["rankings"].as_array().expect("rankings array");
    assert_eq!(rankings.len(), 2);
    assert_eq!(rankings[1]["state"], json!("TEXAS"));
    assert_eq!(rankings[1]["workforce_impact_score"], json!(50));
    assert!(payload.get("summary").is_none());
}

#[tokio::test]
async fn report_route_hydrates_connections_from_csv_exports() {
    let csv = "State,Connection Type,Strength,Evidence Quality,Workforce Relevance,Policy ID,Paper ID\n\
CA,positive,8,9,7,pol-1,paper-1\n\
CA,positive,7,8,8,pol-2,paper-2\n";
    let body = json!({ "evidence_csv": csv, "include_summary": true });

    let response = ranking_router()
        .oneshot(report_request(&body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["data_source"], json!("csv_export"));

    let rankings = payload["rankings"].as_array().expect("rankings array");
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0]["state"], json!("CALIFORNIA"));
    assert_eq!(rankings[0]["workforce_impact_score"], json!(63));
    assert_eq!(rankings[0]["grade"]["letter"], json!("C+"));

    let summary = payload.get("summary").expect("summary included");
    assert_eq!(summary["total_states"], json!(1));
    assert_eq!(summary["states_with_data"], json!(1));
}

#[tokio::test]
async fn report_route_rejects_malformed_csv() {
    let csv = "State,Connection Type,Strength,Evidence Quality,Workforce Relevance,Policy ID,Paper ID\n\
CA,supports,8,9,7,pol-1,paper-1\n";
    let body = json!({ "evidence_csv": csv });

    let response = ranking_router()
        .oneshot(report_request(&body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("supports"));
}

#[tokio::test]
async fn report_route_honors_requested_sort_key() {
    let body = json!({
        "baselines": [
            { "state": "TEXAS", "baseline_workforce_score": 40.0 },
            { "state": "IOWA", "baseline_workforce_score": 70.0 }
        ],
        "sort": "alpha"
    });

    let response = ranking_router()
        .oneshot(report_request(&body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rankings = payload["rankings"].as_array().expect("rankings array");
    assert_eq!(rankings[0]["state"], json!("IOWA"));
    assert_eq!(rankings[1]["state"], json!("TEXAS"));
}

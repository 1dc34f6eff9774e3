use std::io::Cursor;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::workflows::evidence::EvidenceCsvImporter;

use super::assembler::assemble_rankings;
use super::domain::{
    BaselineWorkforceRecord, Connection, Policy, RankingSortKey, StateRanking,
};
use super::summary::{sort_rankings, summarize, RankingSummary};

/// Request payload for the ranking report. Connections can be supplied
/// inline or as a raw CSV export via `evidence_csv`, which takes precedence.
#[derive(Debug, Deserialize)]
pub struct RankingReportRequest {
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub baselines: Vec<BaselineWorkforceRecord>,
    #[serde(default)]
    pub evidence_csv: Option<String>,
    #[serde(default)]
    pub sort: RankingSortKey,
    #[serde(default)]
    pub include_summary: bool,
}

#[derive(Debug, Serialize)]
pub struct RankingReportResponse {
    pub generated_on: NaiveDate,
    pub data_source: RankingDataSource,
    pub sort: RankingSortKey,
    pub rankings: Vec<StateRanking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RankingSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingDataSource {
    CsvExport,
    Inline,
}

/// Router builder exposing the ranking report endpoint.
pub fn ranking_router() -> Router {
    Router::new().route("/api/v1/rankings/report", post(report_handler))
}

pub(crate) async fn report_handler(
    axum::Json(request): axum::Json<RankingReportRequest>,
) -> Response {
    let RankingReportRequest {
        connections,
        policies,
        baselines,
        evidence_csv,
        sort,
        include_summary,
    } = request;

    let (connections, data_source) = match evidence_csv {
        Some(csv) => {
            let reader = Cursor::new(csv.into_bytes());
            match EvidenceCsvImporter::connections_from_reader(reader) {
                Ok(imported) => (imported, RankingDataSource::CsvExport),
                Err(error) => {
                    let payload = json!({ "error": error.to_string() });
                    return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
                }
            }
        }
        None => (connections, RankingDataSource::Inline),
    };

    let mut rankings = assemble_rankings(&connections, &policies, &baselines);
    sort_rankings(&mut rankings, sort);
    let summary = include_summary.then(|| summarize(&rankings));

    let response = RankingReportResponse {
        generated_on: Local::now().date_naive(),
        data_source,
        sort,
        rankings,
        summary,
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}

//! State workforce impact ranking engine.
//!
//! Aggregates heterogeneous, partially-missing evidence (policy-research
//! connections and baseline demographic records) into one composite 0-100
//! score per US state, with a confidence band and a letter grade. The
//! computation is synchronous, deterministic, and free of I/O; callers hand
//! in fully materialized collections and get back a freshly built list.

mod accumulator;
mod assembler;
pub mod domain;
mod grade;
pub mod router;
mod summary;
mod synthesizer;

#[cfg(test)]
mod tests;

pub use assembler::assemble_rankings;
pub use domain::{
    BaselineWorkforceRecord, ConfidenceBand, Connection, ConnectionPolarity, DataQuality,
    GradeBand, Policy, RankingSortKey, StateRanking,
};
pub use grade::grade_for_score;
pub use router::{
    ranking_router, RankingDataSource, RankingReportRequest, RankingReportResponse,
};
pub use summary::{sort_rankings, summarize, RankingSummary};

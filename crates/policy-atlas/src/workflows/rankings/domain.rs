use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One evidence link tying a policy to a research finding, scoped to a state.
///
/// State identifiers are compared literally during grouping; callers (the
/// evidence import layer in this crate, or the hosted CRUD layer upstream)
/// normalize them before records reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub state: String,
    pub polarity: ConnectionPolarity,
    /// How strongly the policy affects the outcome, 1-10.
    pub strength: u8,
    /// How well the underlying research supports the link, 1-10.
    pub evidence_quality: u8,
    /// 1-10; treated as the midpoint 5 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workforce_relevance: Option<u8>,
    pub policy_id: String,
    pub paper_id: String,
}

/// Direction of a connection's claimed effect on the workforce outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionPolarity {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl ConnectionPolarity {
    pub const fn label(self) -> &'static str {
        match self {
            ConnectionPolarity::Positive => "positive",
            ConnectionPolarity::Negative => "negative",
            ConnectionPolarity::Neutral => "neutral",
            ConnectionPolarity::Mixed => "mixed",
        }
    }
}

/// Policy row as stored by the tracking layer. The engine reads only
/// `jurisdiction`, `status`, and `estimated_population_affected`; the rest
/// is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub jurisdiction: String,
    /// Free text; inspected for "enacted"/"signed"/"effective" markers.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_population_affected: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enacted_on: Option<NaiveDate>,
}

/// Connection-agnostic measure of a state's existing workforce health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineWorkforceRecord {
    pub state: String,
    /// 0-100; becomes the score outright when a state has no connections.
    pub baseline_workforce_score: f64,
    /// Physicians per 1,000 residents; below 2.5 earns the shortage bonus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physician_density: Option<f64>,
}

/// Letter grade band looked up from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeBand {
    pub letter: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Coarse label for how much independent evidence backs a state's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    InsufficientData,
    LimitedData,
    ReliableData,
}

impl DataQuality {
    pub const fn label(self) -> &'static str {
        match self {
            DataQuality::InsufficientData => "insufficient_data",
            DataQuality::LimitedData => "limited_data",
            DataQuality::ReliableData => "reliable_data",
        }
    }
}

/// Confidence metadata attached to every ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfidenceBand {
    pub data_points: usize,
    /// 0-100.
    pub confidence_level: u8,
    /// Score points of slack on either side of the composite.
    pub uncertainty_range: u8,
    pub data_quality: DataQuality,
    pub score_low: u8,
    pub score_high: u8,
}

/// One state's scored entry in the ranking output. Immutable value object;
/// recomputed from scratch on every engine call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRanking {
    pub state: String,
    /// Composite score, clamped to 0-100.
    pub workforce_impact_score: u8,
    pub grade: GradeBand,
    pub total_connections: usize,
    pub positive_connections: usize,
    pub negative_connections: usize,
    pub strong_evidence_count: usize,
    pub moderate_evidence_count: usize,
    pub weak_evidence_count: usize,
    pub distinct_policy_count: usize,
    pub distinct_paper_count: usize,
    pub average_strength: f64,
    pub average_workforce_relevance: f64,
    pub positive_connection_rate: f64,
    pub evidence_quality_score: f64,
    pub policy_effectiveness_score: i16,
    pub evidence_strength_score: i16,
    pub population_impact_score: i16,
    pub has_baseline_data: bool,
    pub confidence: ConfidenceBand,
}

/// Re-ordering keys accepted by the sort utility and the report surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingSortKey {
    #[default]
    Score,
    Alpha,
    Connections,
    Policies,
}

impl RankingSortKey {
    pub const fn label(self) -> &'static str {
        match self {
            RankingSortKey::Score => "score",
            RankingSortKey::Alpha => "alpha",
            RankingSortKey::Connections => "connections",
            RankingSortKey::Policies => "policies",
        }
    }
}

impl std::str::FromStr for RankingSortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "alpha" => Ok(Self::Alpha),
            "connections" => Ok(Self::Connections),
            "policies" => Ok(Self::Policies),
            other => Err(format!(
                "unknown sort key '{other}' (expected score, alpha, connections, or policies)"
            )),
        }
    }
}

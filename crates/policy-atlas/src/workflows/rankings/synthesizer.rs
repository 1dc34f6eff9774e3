use super::accumulator::StateAccumulator;
use super::domain::{
    BaselineWorkforceRecord, ConfidenceBand, DataQuality, Policy, StateRanking,
};
use super::grade::grade_for_score;

const DEFAULT_BASELINE_SCORE: f64 = 50.0;
const DEFAULT_POPULATION_AFFECTED: f64 = 100_000.0;
const POPULATION_SCALE_DENOMINATOR: f64 = 500_000.0;
const POPULATION_SCALE_CAP: f64 = 2.0;
const SHORTAGE_DENSITY_THRESHOLD: f64 = 2.5;
const SHORTAGE_BONUS: f64 = 1.15;
const RESEARCH_DIVERSITY_CAP: f64 = 1.0;
const NEUTRAL_POLICY_IMPACT: f64 = 50.0;

const BASELINE_WEIGHT: f64 = 0.40;
const POLICY_WEIGHT: f64 = 0.35;
const EVIDENCE_WEIGHT: f64 = 0.15;
const POPULATION_WEIGHT: f64 = 0.10;

const IMPLEMENTED_STATUS_MARKERS: &[&str] = &["enacted", "signed", "effective"];

/// Build one state's ranking from its accumulated connections, the policies
/// filed under its jurisdiction, and its optional baseline record.
///
/// Every division guards its denominator, so the function is total over
/// well-typed input: a zero-connection accumulator falls back to the
/// baseline score (or the 50-point neutral default).
pub(crate) fn synthesize_ranking(
    state: &str,
    accumulator: &StateAccumulator,
    policies: &[&Policy],
    baseline: Option<&BaselineWorkforceRecord>,
) -> StateRanking {
    let count = accumulator.total_connections;
    let count_f = count as f64;

    let (average_strength, average_relevance, positive_rate) = if count == 0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            accumulator.strength_sum / count_f,
            accumulator.relevance_sum / count_f,
            accumulator.positive_connections as f64 / count_f,
        )
    };

    let evidence_quality_score = evidence_quality(accumulator, average_strength);
    let baseline_score = baseline
        .map(|record| record.baseline_workforce_score)
        .unwrap_or(DEFAULT_BASELINE_SCORE);
    let population_scale_factor = population_scale(policies);
    let implementation_multiplier = implementation_multiplier(policies);

    let policy_impact_score = if count == 0 {
        NEUTRAL_POLICY_IMPACT
    } else {
        let negative_rate = accumulator.negative_connections as f64 / count_f;
        let net_positive_rate = positive_rate - negative_rate;
        let base = 50.0 + net_positive_rate * 25.0;
        let adjusted = base
            + (average_strength - 5.0) * 3.0
            + (average_relevance - 5.0) * 3.0
            + (evidence_quality_score - 1.5) * 5.0
            + (implementation_multiplier - 1.0) * 20.0
            + (population_scale_factor - 1.0) * 10.0;
        adjusted.clamp(0.0, 100.0)
    };

    let evidence_strength_score = (evidence_quality_score * 20.0).round();
    let population_impact_score = (population_scale_factor * 50.0).round();
    let policy_effectiveness_score = (policy_impact_score * implementation_multiplier).round();

    // The shortage bonus belongs to the connection-backed path only; a
    // baseline-only ranking scores exactly round(baseline_workforce_score).
    let composite = if count == 0 {
        baseline_score
    } else {
        let weighted = BASELINE_WEIGHT * baseline_score
            + POLICY_WEIGHT * policy_impact_score
            + EVIDENCE_WEIGHT * evidence_strength_score
            + POPULATION_WEIGHT * population_impact_score;
        weighted.round() * shortage_bonus(baseline)
    };

    let workforce_impact_score = composite.round().clamp(0.0, 100.0) as u8;
    let grade = grade_for_score(f64::from(workforce_impact_score));
    let confidence = confidence_band(accumulator, baseline.is_some(), workforce_impact_score);

    StateRanking {
        state: state.to_string(),
        workforce_impact_score,
        grade,
        total_connections: count,
        positive_connections: accumulator.positive_connections,
        negative_connections: accumulator.negative_connections,
        strong_evidence_count: accumulator.strong_evidence,
        moderate_evidence_count: accumulator.moderate_evidence,
        weak_evidence_count: accumulator.weak_evidence,
        distinct_policy_count: accumulator.policy_ids.len(),
        distinct_paper_count: accumulator.paper_ids.len(),
        average_strength,
        average_workforce_relevance: average_relevance,
        positive_connection_rate: positive_rate,
        evidence_quality_score,
        policy_effectiveness_score: policy_effectiveness_score as i16,
        evidence_strength_score: evidence_strength_score as i16,
        population_impact_score: population_impact_score as i16,
        has_baseline_data: baseline.is_some(),
        confidence,
    }
}

/// Tier-weighted evidence average with a methodology factor and a distinct-
/// paper diversity bonus.
fn evidence_quality(accumulator: &StateAccumulator, average_strength: f64) -> f64 {
    let denominator = accumulator.total_connections.max(1) as f64;
    let base = (3.0 * accumulator.strong_evidence as f64
        + 2.0 * accumulator.moderate_evidence as f64
        + accumulator.weak_evidence as f64)
        / denominator;

    let methodology_factor = if average_strength > 7.0 {
        1.2
    } else if average_strength < 4.0 {
        0.8
    } else {
        1.0
    };

    let diversity_bonus =
        (accumulator.paper_ids.len() as f64 * 0.1).min(RESEARCH_DIVERSITY_CAP);

    base * methodology_factor + diversity_bonus
}

fn population_scale(policies: &[&Policy]) -> f64 {
    let average_population = if policies.is_empty() {
        DEFAULT_POPULATION_AFFECTED
    } else {
        let total: f64 = policies
            .iter()
            .map(|policy| {
                policy
                    .estimated_population_affected
                    .map(|count| count as f64)
                    .unwrap_or(DEFAULT_POPULATION_AFFECTED)
            })
            .sum();
        total / policies.len() as f64
    };

    (average_population / POPULATION_SCALE_DENOMINATOR).min(POPULATION_SCALE_CAP)
}

/// 0.7 at zero implemented policies, 1.3 when every policy is implemented.
fn implementation_multiplier(policies: &[&Policy]) -> f64 {
    let implemented = policies
        .iter()
        .filter(|policy| is_implemented(&policy.status))
        .count() as f64;
    let denominator = policies.len().max(1) as f64;

    0.7 + 0.6 * (implemented / denominator)
}

fn is_implemented(status: &str) -> bool {
    let status = status.to_ascii_lowercase();
    IMPLEMENTED_STATUS_MARKERS
        .iter()
        .any(|marker| status.contains(marker))
}

fn shortage_bonus(baseline: Option<&BaselineWorkforceRecord>) -> f64 {
    match baseline.and_then(|record| record.physician_density) {
        Some(density) if density < SHORTAGE_DENSITY_THRESHOLD => SHORTAGE_BONUS,
        _ => 1.0,
    }
}

fn confidence_band(
    accumulator: &StateAccumulator,
    has_baseline: bool,
    score: u8,
) -> ConfidenceBand {
    let data_points = accumulator.total_connections
        + usize::from(has_baseline)
        + accumulator.paper_ids.len();

    let confidence = (data_points as f64 / 3.0).min(1.0);
    let uncertainty = ((1.0 - confidence) * 15.0).round();

    let data_quality = if data_points < 3 {
        DataQuality::InsufficientData
    } else if data_points < 6 {
        DataQuality::LimitedData
    } else {
        DataQuality::ReliableData
    };

    let score = f64::from(score);

    ConfidenceBand {
        data_points,
        confidence_level: (confidence * 100.0).round() as u8,
        uncertainty_range: uncertainty as u8,
        data_quality,
        score_low: (score - uncertainty).max(0.0) as u8,
        score_high: (score + uncertainty).min(100.0) as u8,
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{RankingSortKey, StateRanking};

/// Re-order a ranking list in place. Numeric keys sort descending, `alpha`
/// sorts ascending by the state string as given. The underlying sort is
/// stable, so equal keys keep their prior order.
pub fn sort_rankings(rankings: &mut [StateRanking], key: RankingSortKey) {
    match key {
        RankingSortKey::Score => rankings
            .sort_by(|a, b| b.workforce_impact_score.cmp(&a.workforce_impact_score)),
        RankingSortKey::Alpha => rankings.sort_by(|a, b| a.state.cmp(&b.state)),
        RankingSortKey::Connections => {
            rankings.sort_by(|a, b| b.total_connections.cmp(&a.total_connections))
        }
        RankingSortKey::Policies => {
            rankings.sort_by(|a, b| b.distinct_policy_count.cmp(&a.distinct_policy_count))
        }
    }
}

/// Aggregate statistics over a ranking list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingSummary {
    pub total_states: usize,
    pub average_score: u8,
    pub highest_score: u8,
    pub lowest_score: u8,
    /// States backed by at least one connection (as opposed to baseline-only).
    pub states_with_data: usize,
    pub grade_distribution: BTreeMap<&'static str, usize>,
}

/// Summarize a possibly-empty ranking list; an empty input yields the
/// all-zero summary with an empty grade histogram.
pub fn summarize(rankings: &[StateRanking]) -> RankingSummary {
    if rankings.is_empty() {
        return RankingSummary {
            total_states: 0,
            average_score: 0,
            highest_score: 0,
            lowest_score: 0,
            states_with_data: 0,
            grade_distribution: BTreeMap::new(),
        };
    }

    let total: u32 = rankings
        .iter()
        .map(|ranking| u32::from(ranking.workforce_impact_score))
        .sum();
    let average_score = (f64::from(total) / rankings.len() as f64).round() as u8;

    let mut grade_distribution: BTreeMap<&'static str, usize> = BTreeMap::new();
    for ranking in rankings {
        *grade_distribution.entry(ranking.grade.letter).or_insert(0) += 1;
    }

    RankingSummary {
        total_states: rankings.len(),
        average_score,
        highest_score: rankings
            .iter()
            .map(|ranking| ranking.workforce_impact_score)
            .max()
            .unwrap_or_default(),
        lowest_score: rankings
            .iter()
            .map(|ranking| ranking.workforce_impact_score)
            .min()
            .unwrap_or_default(),
        states_with_data: rankings
            .iter()
            .filter(|ranking| ranking.total_connections > 0)
            .count(),
        grade_distribution,
    }
}

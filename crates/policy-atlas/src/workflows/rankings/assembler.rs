use std::collections::BTreeSet;

use super::accumulator::{accumulate_by_state, StateAccumulator};
use super::domain::{BaselineWorkforceRecord, Connection, Policy, StateRanking};
use super::synthesizer::synthesize_ranking;

/// Score every state that has connections or baseline data and return the
/// list sorted by descending score, ties broken by ascending state name.
///
/// States with connections are scored through the connection path (their
/// baseline record, if any, feeds the composite); baseline-only states get
/// a zeroed accumulator and therefore score `round(baseline_workforce_score)`.
/// Each state appears at most once.
pub fn assemble_rankings(
    connections: &[Connection],
    policies: &[Policy],
    baselines: &[BaselineWorkforceRecord],
) -> Vec<StateRanking> {
    let accumulators = accumulate_by_state(connections);
    let mut rankings = Vec::with_capacity(accumulators.len());

    for (state, accumulator) in &accumulators {
        let state_policies = policies_for(policies, state);
        let baseline = baselines.iter().find(|record| record.state == *state);
        rankings.push(synthesize_ranking(state, accumulator, &state_policies, baseline));
    }

    let empty = StateAccumulator::default();
    let mut baseline_only: BTreeSet<&str> = BTreeSet::new();
    for record in baselines {
        if accumulators.contains_key(&record.state) || !baseline_only.insert(&record.state) {
            continue;
        }

        let state_policies = policies_for(policies, &record.state);
        rankings.push(synthesize_ranking(
            &record.state,
            &empty,
            &state_policies,
            Some(record),
        ));
    }

    rankings.sort_by(|a, b| {
        b.workforce_impact_score
            .cmp(&a.workforce_impact_score)
            .then_with(|| a.state.cmp(&b.state))
    });

    rankings
}

fn policies_for<'a>(policies: &'a [Policy], state: &str) -> Vec<&'a Policy> {
    policies
        .iter()
        .filter(|policy| policy.jurisdiction == state)
        .collect()
}

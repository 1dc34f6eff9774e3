use std::collections::{BTreeMap, BTreeSet};

use super::domain::{Connection, ConnectionPolarity};

/// Midpoint substituted when a connection carries no relevance value.
pub(crate) const DEFAULT_WORKFORCE_RELEVANCE: u8 = 5;

const STRONG_EVIDENCE_FLOOR: u8 = 8;
const MODERATE_EVIDENCE_FLOOR: u8 = 5;

/// Running per-state totals folded out of the connection list. Distinct
/// policy/paper identifiers are retained only for their cardinality.
#[derive(Debug, Default, Clone)]
pub(crate) struct StateAccumulator {
    pub(crate) total_connections: usize,
    pub(crate) positive_connections: usize,
    pub(crate) negative_connections: usize,
    pub(crate) strength_sum: f64,
    pub(crate) relevance_sum: f64,
    pub(crate) strong_evidence: usize,
    pub(crate) moderate_evidence: usize,
    pub(crate) weak_evidence: usize,
    pub(crate) policy_ids: BTreeSet<String>,
    pub(crate) paper_ids: BTreeSet<String>,
}

impl StateAccumulator {
    fn fold(&mut self, connection: &Connection) {
        self.total_connections += 1;

        match connection.polarity {
            ConnectionPolarity::Positive => self.positive_connections += 1,
            ConnectionPolarity::Negative => self.negative_connections += 1,
            ConnectionPolarity::Neutral | ConnectionPolarity::Mixed => {}
        }

        self.strength_sum += f64::from(connection.strength);
        self.relevance_sum += f64::from(
            connection
                .workforce_relevance
                .unwrap_or(DEFAULT_WORKFORCE_RELEVANCE),
        );

        if connection.evidence_quality >= STRONG_EVIDENCE_FLOOR {
            self.strong_evidence += 1;
        } else if connection.evidence_quality >= MODERATE_EVIDENCE_FLOOR {
            self.moderate_evidence += 1;
        } else {
            self.weak_evidence += 1;
        }

        self.policy_ids.insert(connection.policy_id.clone());
        self.paper_ids.insert(connection.paper_id.clone());
    }
}

/// Group connections by their literal state string. Connections with an
/// empty state are dropped; no normalization happens here.
pub(crate) fn accumulate_by_state(
    connections: &[Connection],
) -> BTreeMap<String, StateAccumulator> {
    let mut accumulators: BTreeMap<String, StateAccumulator> = BTreeMap::new();

    for connection in connections {
        if connection.state.is_empty() {
            continue;
        }

        accumulators
            .entry(connection.state.clone())
            .or_default()
            .fold(connection);
    }

    accumulators
}

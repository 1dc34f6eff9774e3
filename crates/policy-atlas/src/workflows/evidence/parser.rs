use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::rankings::{BaselineWorkforceRecord, Connection, ConnectionPolarity};

use super::mapping::canonical_state_name;
use super::EvidenceImportError;

pub(crate) fn parse_connections<R: Read>(
    reader: R,
) -> Result<Vec<Connection>, EvidenceImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut connections = Vec::new();

    // Data rows start at line 2; line 1 is the header.
    for (index, record) in csv_reader.deserialize::<ConnectionRow>().enumerate() {
        let row = record?;
        if let Some(connection) = row.into_connection(index + 2)? {
            connections.push(connection);
        }
    }

    Ok(connections)
}

pub(crate) fn parse_baselines<R: Read>(
    reader: R,
) -> Result<Vec<BaselineWorkforceRecord>, EvidenceImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<BaselineRow>().enumerate() {
        let row = record?;
        if let Some(baseline) = row.into_baseline(index + 2)? {
            records.push(baseline);
        }
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ConnectionRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Connection Type")]
    connection_type: String,
    #[serde(rename = "Strength")]
    strength: u8,
    #[serde(rename = "Evidence Quality")]
    evidence_quality: u8,
    #[serde(
        rename = "Workforce Relevance",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    workforce_relevance: Option<String>,
    #[serde(rename = "Policy ID")]
    policy_id: String,
    #[serde(rename = "Paper ID")]
    paper_id: String,
}

impl ConnectionRow {
    fn into_connection(self, row: usize) -> Result<Option<Connection>, EvidenceImportError> {
        let state = canonical_state_name(&self.state);
        if state.is_empty() {
            return Ok(None);
        }

        let polarity = parse_polarity(&self.connection_type).ok_or_else(|| {
            EvidenceImportError::InvalidRow {
                row,
                message: format!("unknown connection type '{}'", self.connection_type),
            }
        })?;

        let workforce_relevance = match self.workforce_relevance {
            Some(raw) => Some(raw.parse::<u8>().map_err(|_| {
                EvidenceImportError::InvalidRow {
                    row,
                    message: format!("workforce relevance '{raw}' is not an integer"),
                }
            })?),
            None => None,
        };

        Ok(Some(Connection {
            state,
            polarity,
            strength: self.strength,
            evidence_quality: self.evidence_quality,
            workforce_relevance,
            policy_id: self.policy_id,
            paper_id: self.paper_id,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct BaselineRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Baseline Workforce Score")]
    baseline_workforce_score: f64,
    #[serde(
        rename = "Physician Density",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    physician_density: Option<String>,
}

impl BaselineRow {
    fn into_baseline(
        self,
        row: usize,
    ) -> Result<Option<BaselineWorkforceRecord>, EvidenceImportError> {
        let state = canonical_state_name(&self.state);
        if state.is_empty() {
            return Ok(None);
        }

        let physician_density = match self.physician_density {
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| {
                EvidenceImportError::InvalidRow {
                    row,
                    message: format!("physician density '{raw}' is not a number"),
                }
            })?),
            None => None,
        };

        Ok(Some(BaselineWorkforceRecord {
            state,
            baseline_workforce_score: self.baseline_workforce_score,
            physician_density,
        }))
    }
}

fn parse_polarity(value: &str) -> Option<ConnectionPolarity> {
    match value.trim().to_ascii_lowercase().as_str() {
        "positive" => Some(ConnectionPolarity::Positive),
        "negative" => Some(ConnectionPolarity::Negative),
        "neutral" => Some(ConnectionPolarity::Neutral),
        "mixed" => Some(ConnectionPolarity::Mixed),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn parse_polarity_for_tests(value: &str) -> Option<ConnectionPolarity> {
    parse_polarity(value)
}

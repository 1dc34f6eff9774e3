//! CSV ingestion for hosted-database exports of the evidence tables.
//!
//! The ranking engine groups by exact state string, so this module owns the
//! normalization the engine deliberately does not do: state tokens are
//! BOM-stripped, whitespace-collapsed, uppercased, and USPS abbreviations
//! are mapped to full state names before records leave the importer.

mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::rankings::{BaselineWorkforceRecord, Connection};

#[derive(Debug, thiserror::Error)]
pub enum EvidenceImportError {
    #[error("failed to read evidence export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid evidence CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

pub struct EvidenceCsvImporter;

impl EvidenceCsvImporter {
    pub fn connections_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Connection>, EvidenceImportError> {
        let file = std::fs::File::open(path)?;
        Self::connections_from_reader(file)
    }

    pub fn connections_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<Connection>, EvidenceImportError> {
        parser::parse_connections(reader)
    }

    pub fn baselines_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<BaselineWorkforceRecord>, EvidenceImportError> {
        let file = std::fs::File::open(path)?;
        Self::baselines_from_reader(file)
    }

    pub fn baselines_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<BaselineWorkforceRecord>, EvidenceImportError> {
        parser::parse_baselines(reader)
    }
}

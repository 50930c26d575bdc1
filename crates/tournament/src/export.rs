//! JSON import/export of complete tournaments

use round_robin::Tournament;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version of the exported file layout
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported file version or layout")]
    UnsupportedVersion,

    #[error("tournament file is damaged: {0}")]
    Corrupted(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportPayload<'a> {
    schema_version: u32,
    tournament: &'a Tournament,
}

/// Loose mirror of the payload so version problems are reported before the
/// tournament itself is decoded.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportPayload {
    schema_version: Option<u32>,
    tournament: Option<serde_json::Value>,
}

pub fn serialize_tournament(tournament: &Tournament) -> Result<String, ExportError> {
    let payload = ExportPayload {
        schema_version: SCHEMA_VERSION,
        tournament,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

pub fn parse_tournament(json: &str) -> Result<Tournament, ExportError> {
    let payload: ImportPayload = serde_json::from_str(json)?;
    if payload.schema_version != Some(SCHEMA_VERSION) {
        return Err(ExportError::UnsupportedVersion);
    }
    let value = payload.tournament.ok_or(ExportError::UnsupportedVersion)?;

    let tournament: Tournament =
        serde_json::from_value(value).map_err(|e| ExportError::Corrupted(e.to_string()))?;
    if tournament.id.is_empty() || tournament.name.is_empty() {
        return Err(ExportError::Corrupted("missing id or name".to_string()));
    }
    Ok(tournament)
}

/// Suggested file name for an export.
pub fn export_file_name(tournament: &Tournament) -> String {
    let stem = if tournament.date.is_empty() {
        "export"
    } else {
        tournament.date.as_str()
    };
    format!("tournament_{stem}.json")
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;

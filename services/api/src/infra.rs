use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use ngdrs::error::AppError;
use ngdrs::workflows::cases::CaseRecord;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Dashboard exports hold either one case object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum CaseFile {
    Many(Vec<CaseRecord>),
    One(Box<CaseRecord>),
}

pub(crate) fn parse_case_json(raw: &str) -> Result<Vec<CaseRecord>, AppError> {
    let cases = match serde_json::from_str::<CaseFile>(raw)? {
        CaseFile::Many(cases) => cases,
        CaseFile::One(case) => vec![*case],
    };
    Ok(cases)
}

pub(crate) fn read_case_file(path: &Path) -> Result<Vec<CaseRecord>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_case_json(&raw)
}

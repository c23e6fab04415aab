//! Case-register import from long-format CSV exports.
//!
//! Each row carries one detail field of one stage. Rows are folded into
//! [`CaseRecord`]s keeping the order in which cases and stages first appear.

mod normalizer;
mod parser;

use crate::workflows::cases::domain::{CaseRecord, CaseType, TimelineStage};
use crate::workflows::cases::lookup::DetailKey;
use normalizer::normalize_field_name;
use parser::RegisterRow;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_MAX_ROWS: usize = 50_000;

#[derive(Debug, thiserror::Error)]
pub enum CaseRegisterImportError {
    #[error("failed to read case register: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid case register CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("case register exceeds the {limit} row limit")]
    TooManyRows { limit: usize },
    #[error("register row {row} has no case ID")]
    MissingCaseId { row: usize },
    #[error("case {case_id} has unknown case type '{value}' (expected GBV or TFGBV)")]
    UnknownCaseType { case_id: String, value: String },
}

#[derive(Debug, Clone)]
pub struct CaseRegisterImporter {
    max_rows: usize,
}

impl Default for CaseRegisterImporter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROWS)
    }
}

impl CaseRegisterImporter {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    pub fn from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<CaseRecord>, CaseRegisterImportError> {
        let file = std::fs::File::open(path)?;
        self.from_reader(file)
    }

    pub fn from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<Vec<CaseRecord>, CaseRegisterImportError> {
        let rows = parser::parse_rows(reader, self.max_rows)?;
        let row_count = rows.len();
        let mut cases: Vec<CaseRecord> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (index, row) in rows.into_iter().enumerate() {
            let case_id = row.case_id.trim();
            if case_id.is_empty() {
                return Err(CaseRegisterImportError::MissingCaseId { row: index + 1 });
            }

            let position = *positions.entry(case_id.to_string()).or_insert_with(|| {
                cases.push(CaseRecord {
                    case_id: case_id.to_string(),
                    ..CaseRecord::default()
                });
                cases.len() - 1
            });

            let case = &mut cases[position];
            apply_case_columns(case, &row)?;
            apply_stage_row(case, row);
        }

        debug!(rows = row_count, cases = cases.len(), "case register imported");
        Ok(cases)
    }
}

fn apply_case_columns(
    case: &mut CaseRecord,
    row: &RegisterRow,
) -> Result<(), CaseRegisterImportError> {
    if case.case_type.is_none() {
        if let Some(value) = row.case_type.as_deref() {
            let case_type = CaseType::from_code(value).ok_or_else(|| {
                CaseRegisterImportError::UnknownCaseType {
                    case_id: case.case_id.clone(),
                    value: value.to_string(),
                }
            })?;
            case.case_type = Some(case_type);
        }
    }

    fill_if_empty(&mut case.crime_code, row.crime_code.as_deref());
    fill_if_empty(&mut case.survivor_name, row.survivor_name.as_deref());
    fill_if_empty(&mut case.report_date, row.report_date.as_deref());
    fill_if_empty(&mut case.status, row.status.as_deref());
    Ok(())
}

fn apply_stage_row(case: &mut CaseRecord, row: RegisterRow) {
    let Some(stage_code) = row.stage_code else {
        if row.field.is_some() {
            warn!(case_id = %case.case_id, "register detail without a stage code ignored");
        }
        return;
    };

    let index = match case
        .timeline
        .iter()
        .position(|stage| stage.stage_code == stage_code)
    {
        Some(index) => index,
        None => {
            case.timeline.push(TimelineStage {
                stage_code,
                ..TimelineStage::default()
            });
            case.timeline.len() - 1
        }
    };

    let stage = &mut case.timeline[index];
    fill_if_empty(&mut stage.stage_name, row.stage_name.as_deref());
    fill_if_empty(&mut stage.stage_status, row.stage_status.as_deref());

    if let (Some(field), Some(value)) = (row.field, row.value) {
        let normalized = normalize_field_name(&field);
        let key = DetailKey::from_field_name(&normalized)
            .map(|key| key.as_str().to_string())
            .unwrap_or(normalized);
        stage.details.entry(key).or_insert(value);
    }
}

fn fill_if_empty(target: &mut String, value: Option<&str>) {
    if target.is_empty() {
        if let Some(value) = value {
            *target = value.to_string();
        }
    }
}

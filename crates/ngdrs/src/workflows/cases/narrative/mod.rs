//! Narrative case-summary synthesis.
//!
//! Turns a [`CaseRecord`] into ordered prose describing how the case was
//! reported, investigated, examined, tried and resolved. Every sentence block
//! is gated on the detail fields it needs; absent data omits the block rather
//! than failing. Only the four top-level identity fields are mandatory.
//!
//! Synthesis is a pure function of its input: no clock, no randomness, no I/O.

mod fields;
mod sections;
pub mod views;

use super::domain::{CaseProgress, CaseRecord};
use fields::CaseFields;
use serde::Serialize;
use std::fmt;

pub use views::{CaseSummaryView, ClosingAssessment, StageView};

/// Top-level case fields that must be present before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    SurvivorName,
    ReportDate,
    CrimeCode,
    CaseType,
}

impl RequiredField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SurvivorName => "survivorName",
            Self::ReportDate => "reportDate",
            Self::CrimeCode => "crimeCode",
            Self::CaseType => "caseType",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NarrativeError {
    #[error("case record is missing required field `{}`", .0.as_str())]
    MissingRequiredField(RequiredField),
}

/// Ordered sentence blocks plus the figures behind the closing sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeOutput {
    pub sentences: Vec<String>,
    pub progress: CaseProgress,
    pub assessment: ClosingAssessment,
}

impl NarrativeOutput {
    /// Sentences joined by single spaces.
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

impl fmt::Display for NarrativeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

type SectionBuilder = fn(&CaseFields<'_>) -> Option<String>;

/// Conditional blocks between the opening and closing sentences, in output order.
const BODY_SECTIONS: [SectionBuilder; 7] = [
    sections::incident,
    sections::risk,
    sections::police,
    sections::medical,
    sections::investigation,
    sections::arrest,
    sections::court,
];

/// Builds the narrative for `case`.
///
/// An empty timeline is not an error: the result holds the opening sentence
/// with the default reporting channel and a closing sentence at 0% progress.
pub fn synthesize(case: &CaseRecord) -> Result<NarrativeOutput, NarrativeError> {
    let opening = sections::Opening {
        survivor_name: required(&case.survivor_name, RequiredField::SurvivorName)?,
        report_date: required(&case.report_date, RequiredField::ReportDate)?,
        crime_code: required(&case.crime_code, RequiredField::CrimeCode)?,
        case_type: case
            .case_type
            .ok_or(NarrativeError::MissingRequiredField(RequiredField::CaseType))?,
    };

    let fields = CaseFields::new(&case.timeline);
    let mut sentences = Vec::with_capacity(BODY_SECTIONS.len() + 2);
    sentences.push(sections::opening(&opening, &fields));
    sentences.extend(BODY_SECTIONS.iter().filter_map(|section| section(&fields)));

    let progress = case.progress();
    let (closing, assessment) = sections::closing(&case.status, progress);
    sentences.push(closing);

    Ok(NarrativeOutput {
        sentences,
        progress,
        assessment,
    })
}

/// Narrative as a single block of text.
pub fn synthesize_text(case: &CaseRecord) -> Result<String, NarrativeError> {
    synthesize(case).map(|output| output.text())
}

/// Synthesizes and wraps the result in a serializable summary view.
pub fn summarize(case: &CaseRecord) -> Result<CaseSummaryView, NarrativeError> {
    let output = synthesize(case)?;
    Ok(CaseSummaryView::new(case, output))
}

fn required(value: &str, field: RequiredField) -> Result<&str, NarrativeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(NarrativeError::MissingRequiredField(field))
    } else {
        Ok(trimmed)
    }
}

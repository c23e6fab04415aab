use super::super::domain::{CaseProgress, CaseRecord, CaseType, TimelineStage};
use super::NarrativeOutput;
use serde::Serialize;

/// Which closing framing the narrative ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosingAssessment {
    Successful,
    NeedsAttention,
    ProgressingSteadily,
}

impl ClosingAssessment {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Successful => "Successful Outcome",
            Self::NeedsAttention => "Needs Attention",
            Self::ProgressingSteadily => "Progressing Steadily",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StageView {
    pub stage_code: String,
    pub stage_name: String,
    pub stage_status: String,
    pub completed: bool,
    pub detail_count: usize,
}

impl From<&TimelineStage> for StageView {
    fn from(stage: &TimelineStage) -> Self {
        Self {
            stage_code: stage.stage_code.clone(),
            stage_name: stage.stage_name.clone(),
            stage_status: stage.stage_status.clone(),
            completed: stage.is_completed(),
            detail_count: stage.details.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseSummaryView {
    pub case_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type_label: Option<&'static str>,
    pub status: String,
    pub progress: CaseProgress,
    pub assessment: ClosingAssessment,
    pub assessment_label: &'static str,
    pub stages: Vec<StageView>,
    pub sentences: Vec<String>,
    pub summary: String,
}

impl CaseSummaryView {
    pub fn new(case: &CaseRecord, output: NarrativeOutput) -> Self {
        let summary = output.text();
        let NarrativeOutput {
            sentences,
            progress,
            assessment,
        } = output;

        Self {
            case_id: case.case_id.clone(),
            case_type: case.case_type,
            case_type_label: case.case_type.map(CaseType::label),
            status: case.status.clone(),
            progress,
            assessment,
            assessment_label: assessment.label(),
            stages: case.timeline.iter().map(StageView::from).collect(),
            sentences,
            summary,
        }
    }
}

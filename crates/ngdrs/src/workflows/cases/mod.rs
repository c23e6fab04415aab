pub mod domain;
pub mod lookup;
pub mod narrative;
pub mod router;

pub use domain::{CaseProgress, CaseRecord, CaseType, TimelineStage};
pub use narrative::{
    summarize, synthesize, synthesize_text, CaseSummaryView, ClosingAssessment, NarrativeError,
    NarrativeOutput, RequiredField,
};
pub use router::case_router;

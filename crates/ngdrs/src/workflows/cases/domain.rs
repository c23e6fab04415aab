use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Stage status value that counts toward case progress.
pub const COMPLETED_STAGE_STATUS: &str = "Completed";

/// Case category. Decoded through [`CaseType::from_code`], which ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CaseType {
    #[serde(rename = "GBV")]
    Gbv,
    #[serde(rename = "TFGBV")]
    Tfgbv,
}

impl CaseType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Gbv, Self::Tfgbv]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Gbv => "GBV",
            Self::Tfgbv => "TFGBV",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gbv => "Gender-Based Violence",
            Self::Tfgbv => "Technology-Facilitated Gender-Based Violence",
        }
    }

    /// Description used when a crime code has no entry in the crime table.
    pub const fn generic_description(self) -> &'static str {
        match self {
            Self::Gbv => "gender-based violence",
            Self::Tfgbv => "technology-facilitated violence",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|case_type| case_type.code().eq_ignore_ascii_case(trimmed))
    }
}

/// A case as supplied by the case-management layer.
///
/// String fields default to empty when absent so that required-field checks
/// happen during synthesis rather than while decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    #[serde(default)]
    pub case_id: String,
    #[serde(default, deserialize_with = "blank_case_type_as_none")]
    pub case_type: Option<CaseType>,
    #[serde(default)]
    pub crime_code: String,
    #[serde(default)]
    pub survivor_name: String,
    #[serde(default)]
    pub report_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timeline: Vec<TimelineStage>,
}

fn blank_case_type_as_none<'de, D>(deserializer: D) -> Result<Option<CaseType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => CaseType::from_code(code)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown case type `{code}`"))),
    }
}

impl CaseRecord {
    pub fn progress(&self) -> CaseProgress {
        CaseProgress::from_timeline(&self.timeline)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStage {
    #[serde(default)]
    pub stage_code: String,
    #[serde(default)]
    pub stage_name: String,
    #[serde(default)]
    pub stage_status: String,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl TimelineStage {
    pub fn is_completed(&self) -> bool {
        self.stage_status == COMPLETED_STAGE_STATUS
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaseProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl CaseProgress {
    /// An empty timeline reports 0% rather than dividing by zero.
    pub fn from_timeline(timeline: &[TimelineStage]) -> Self {
        let total = timeline.len();
        let completed = timeline.iter().filter(|stage| stage.is_completed()).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0)
                .round()
                .clamp(0.0, 100.0) as u8
        };

        Self {
            completed,
            total,
            percent,
        }
    }
}

use super::super::domain::TimelineStage;
use super::super::lookup::DetailKey;

/// Read-only view over a timeline resolving detail fields by first match.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaseFields<'a> {
    timeline: &'a [TimelineStage],
}

impl<'a> CaseFields<'a> {
    pub(crate) fn new(timeline: &'a [TimelineStage]) -> Self {
        Self { timeline }
    }

    /// Value from the earliest stage carrying a non-blank entry for `key`.
    ///
    /// Later stages defining the same key are ignored.
    pub(crate) fn get(&self, key: DetailKey) -> Option<&'a str> {
        self.timeline.iter().find_map(|stage| {
            stage
                .details
                .get(key.as_str())
                .map(String::as_str)
                .filter(|value| !value.trim().is_empty())
        })
    }

    /// True when the field is present and contains `needle`, ignoring case.
    pub(crate) fn contains_ignore_case(&self, key: DetailKey, needle: &str) -> bool {
        self.get(key)
            .map(|value| contains_ignore_case(value, needle))
            .unwrap_or(false)
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

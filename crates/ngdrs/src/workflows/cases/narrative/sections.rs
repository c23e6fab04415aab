use super::super::domain::{CaseProgress, CaseType};
use super::super::lookup::{perpetrator_phrase, CrimeCategory, DetailKey};
use super::fields::{contains_ignore_case, CaseFields};
use super::views::ClosingAssessment;

const DEFAULT_REPORTING_CHANNEL: &str = "the local authorities";
const CHARGE_SHEET_PENDING: &str = "Pending";
const CONVICTED_STATUS: &str = "Convicted";
const PROGRESS_ATTENTION_THRESHOLD: u8 = 50;

/// Annotation prefixes rewritten into prose, e.g. `(PPC 337)` -> `under PPC 337`.
const LEGAL_CODE_REWRITES: [(&str, &str); 2] = [("(ppc", "under PPC"), ("(peca", "under PECA")];

pub(crate) struct Opening<'a> {
    pub(crate) survivor_name: &'a str,
    pub(crate) report_date: &'a str,
    pub(crate) crime_code: &'a str,
    pub(crate) case_type: CaseType,
}

pub(crate) fn opening(case: &Opening<'_>, fields: &CaseFields<'_>) -> String {
    let channel = fields
        .get(DetailKey::IntakeChannel)
        .or_else(|| fields.get(DetailKey::PoliceStation))
        .map(str::trim)
        .unwrap_or(DEFAULT_REPORTING_CHANNEL);
    let crime = CrimeCategory::from_code(case.crime_code)
        .map(CrimeCategory::description)
        .unwrap_or_else(|| case.case_type.generic_description());

    format!(
        "{} approached {} on {} to report a case of {}.",
        case.survivor_name, channel, case.report_date, crime
    )
}

pub(crate) fn incident(fields: &CaseFields<'_>) -> Option<String> {
    let perpetrator_type = fields.get(DetailKey::PerpetratorType);
    let location = fields.get(DetailKey::IncidentLocation);
    if perpetrator_type.is_none() && location.is_none() {
        return None;
    }

    let perpetrator = perpetrator_phrase(perpetrator_type);
    let violence = fields
        .get(DetailKey::ViolenceType)
        .or_else(|| fields.get(DetailKey::TfgbvType))
        .map(rewrite_legal_codes);

    let mut sentence = match violence {
        Some(violence) => format!("The incident involved {violence} perpetrated by {perpetrator}"),
        None => format!("The incident was perpetrated by {perpetrator}"),
    };

    if let Some(location) = location {
        sentence.push_str(" at the ");
        sentence.push_str(&location.trim().to_lowercase());
    }
    sentence.push('.');

    Some(sentence)
}

pub(crate) fn risk(fields: &CaseFields<'_>) -> Option<String> {
    let mut notes = Vec::new();

    if fields.contains_ignore_case(DetailKey::RiskLevel, "critical") {
        notes.push(
            "The case was assessed as critical risk, requiring urgent protective measures for the survivor.",
        );
    }
    if fields.contains_ignore_case(DetailKey::Recurrence, "repeat") {
        notes.push("Records indicate this was a repeat incident with a history of prior abuse.");
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.join(" "))
    }
}

pub(crate) fn police(fields: &CaseFields<'_>) -> Option<String> {
    let response_time = fields.get(DetailKey::PoliceResponseTime);
    let fir_no = fields.get(DetailKey::FirNo);
    if response_time.is_none() && fir_no.is_none() {
        return None;
    }

    let mut sentence = match response_time {
        Some(time) if time.contains("30") => "Police responded within 30 minutes".to_string(),
        Some(time) if time.contains("1-2") => "Police responded within 1-2 hours".to_string(),
        Some(time) => format!("Police responded {}", time.trim().to_lowercase()),
        None => "Police initiated the appropriate legal procedures".to_string(),
    };

    if let Some(fir_no) = fir_no {
        sentence.push_str(" and registered FIR No. ");
        sentence.push_str(fir_no.trim());
        if let Some(date) = fields.get(DetailKey::FirDate) {
            sentence.push_str(" on ");
            sentence.push_str(date.trim());
        }
        if let Some(sections) = fields.get(DetailKey::Sections) {
            sentence.push_str(" under sections ");
            sentence.push_str(sections.trim());
        }
        if let Some(station) = fields.get(DetailKey::PoliceStation) {
            sentence.push_str(" at ");
            sentence.push_str(station.trim());
        }
    }
    sentence.push('.');

    Some(sentence)
}

pub(crate) fn medical(fields: &CaseFields<'_>) -> Option<String> {
    let hospital = fields.get(DetailKey::Hospital);
    let mlo_name = fields.get(DetailKey::MloName);
    if hospital.is_none() && mlo_name.is_none() {
        return None;
    }

    let mut sentence = "The survivor underwent a medical examination".to_string();
    if let Some(hospital) = hospital {
        sentence.push_str(" at ");
        sentence.push_str(hospital.trim());
        if let Some(date) = fields.get(DetailKey::MedicalExamDate) {
            sentence.push_str(" on ");
            sentence.push_str(date.trim());
        }
    }
    if let Some(mlo_name) = mlo_name {
        sentence.push_str(", conducted by Dr. ");
        sentence.push_str(strip_doctor_prefix(mlo_name));
    }
    sentence.push('.');

    if let Some(report) = fields.get(DetailKey::DnaReport) {
        sentence.push_str(&format!(
            " DNA evidence was collected and the report was recorded as {}.",
            report.trim().to_lowercase()
        ));
    }

    Some(sentence)
}

pub(crate) fn investigation(fields: &CaseFields<'_>) -> Option<String> {
    let officer = fields.get(DetailKey::IoAssigned).map(str::trim);
    let charge_sheet = fields
        .get(DetailKey::ChargeSheetDate)
        .map(str::trim)
        .filter(|date| *date != CHARGE_SHEET_PENDING);

    match (officer, charge_sheet) {
        (Some(officer), Some(date)) => Some(format!(
            "The investigation was assigned to {officer}, and the charge sheet was submitted to the court on {date}."
        )),
        (Some(officer), None) => Some(format!("The investigation was assigned to {officer}.")),
        (None, Some(date)) => Some(format!(
            "The charge sheet was submitted to the court on {date}."
        )),
        (None, None) => None,
    }
}

pub(crate) fn arrest(fields: &CaseFields<'_>) -> Option<String> {
    let arrest_date = fields.get(DetailKey::ArrestDate)?;
    let mut sentence = format!("The accused was arrested on {}", arrest_date.trim());

    let remand = fields.get(DetailKey::RemandType);
    if let Some(remand) = remand {
        sentence.push_str(" and placed on ");
        sentence.push_str(&remand.trim().to_lowercase());
        sentence.push_str(" remand");
    }
    if let Some(jail) = fields.get(DetailKey::JailLocation) {
        sentence.push_str(if remand.is_some() {
            " at "
        } else {
            " and held at "
        });
        sentence.push_str(jail.trim());
    }
    sentence.push('.');

    if let Some(bail) = fields.get(DetailKey::BailStatus) {
        sentence.push_str(&format!(
            " The bail status of the accused is recorded as {}.",
            bail.trim().to_lowercase()
        ));
    }

    Some(sentence)
}

pub(crate) fn court(fields: &CaseFields<'_>) -> Option<String> {
    let outcome = fields.get(DetailKey::Outcome).map(str::trim);
    let judgment_date = fields.get(DetailKey::JudgmentDate).map(str::trim);
    if outcome.is_none() && judgment_date.is_none() {
        return None;
    }

    let mut parts = Vec::new();
    if let Some(judge) = fields.get(DetailKey::JudgeName) {
        parts.push(format!("The case was heard before {}.", judge.trim()));
    }

    let verdict = match (outcome, judgment_date) {
        (Some(outcome), _) if contains_ignore_case(outcome, "convicted") => {
            let mut verdict = "The court convicted the accused".to_string();
            if let Some(date) = judgment_date {
                verdict.push_str(" on ");
                verdict.push_str(date);
            }
            if let Some(detail) = fields.get(DetailKey::SentenceDetail) {
                verdict.push_str(", handing down a sentence of ");
                verdict.push_str(detail.trim());
            }
            verdict.push('.');
            verdict
        }
        (Some(outcome), _) if contains_ignore_case(outcome, "trial") => {
            "The case is currently under trial proceedings.".to_string()
        }
        (Some(outcome), _) => format!("Case outcome: {outcome}."),
        (None, Some(date)) => format!("Judgment was delivered on {date}."),
        (None, None) => return None,
    };
    parts.push(verdict);

    Some(parts.join(" "))
}

pub(crate) fn closing(status: &str, progress: CaseProgress) -> (String, ClosingAssessment) {
    let percent = progress.percent;
    if status == CONVICTED_STATUS {
        (
            format!(
                "This case represents a successful outcome for the survivor, with the perpetrator convicted and {percent}% of the case lifecycle completed."
            ),
            ClosingAssessment::Successful,
        )
    } else if percent < PROGRESS_ATTENTION_THRESHOLD {
        (
            format!(
                "With only {percent}% of the case lifecycle completed, this case needs attention to prevent delays in access to justice."
            ),
            ClosingAssessment::NeedsAttention,
        )
    } else {
        (
            format!(
                "The case is progressing steadily, with {percent}% of the case lifecycle completed."
            ),
            ClosingAssessment::ProgressingSteadily,
        )
    }
}

/// Lowercases a violence description and turns every `(PPC ...)`/`(PECA ...)`
/// annotation into `under PPC ...`/`under PECA ...`, dropping the closing
/// paren that follows each one.
pub(crate) fn rewrite_legal_codes(value: &str) -> String {
    let mut text = value.trim().to_lowercase();

    for (token, replacement) in LEGAL_CODE_REWRITES {
        while let Some(start) = text.find(token) {
            let token_end = start + token.len();
            if let Some(offset) = text[token_end..].find(')') {
                text.remove(token_end + offset);
            }
            text.replace_range(start..token_end, replacement);
        }
    }

    text
}

fn strip_doctor_prefix(name: &str) -> &str {
    let trimmed = name.trim();
    match trimmed.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("dr.") => trimmed[3..].trim_start(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::cases::domain::TimelineStage;

    fn timeline(pairs: &[(&str, &str)]) -> Vec<TimelineStage> {
        vec![TimelineStage {
            details: pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            ..TimelineStage::default()
        }]
    }

    #[test]
    fn legal_codes_are_rewritten_as_prose() {
        assert_eq!(
            rewrite_legal_codes("Physical Assault (PPC 337-A)"),
            "physical assault under PPC 337-a"
        );
        assert_eq!(
            rewrite_legal_codes("Cyber Stalking (PECA s.24)"),
            "cyber stalking under PECA s.24"
        );
        assert_eq!(rewrite_legal_codes("Verbal Threats"), "verbal threats");
    }

    #[test]
    fn every_legal_code_annotation_is_rewritten() {
        assert_eq!(
            rewrite_legal_codes("Hurt (PPC 337) and Threat (PPC 506)"),
            "hurt under PPC 337 and threat under PPC 506"
        );
        assert_eq!(
            rewrite_legal_codes("Stalking (PECA 24) with Assault (PPC 352)"),
            "stalking under PECA 24 with assault under PPC 352"
        );
    }

    #[test]
    fn doctor_prefix_is_not_duplicated() {
        assert_eq!(strip_doctor_prefix("Dr. Sana Malik"), "Sana Malik");
        assert_eq!(strip_doctor_prefix("dr. Sana Malik"), "Sana Malik");
        assert_eq!(strip_doctor_prefix("Sana Malik"), "Sana Malik");
        assert_eq!(strip_doctor_prefix("Dr.Sana Malik"), "Sana Malik");
        assert_eq!(strip_doctor_prefix("DR.  Sana Malik"), "Sana Malik");
        assert_eq!(strip_doctor_prefix("Dr"), "Dr");
        assert_eq!(strip_doctor_prefix("Drake Ali"), "Drake Ali");
    }

    #[test]
    fn police_response_time_branches() {
        let stages = timeline(&[("policeResponseTime", "Under 30 mins")]);
        let sentence = police(&CaseFields::new(&stages)).expect("police sentence");
        assert_eq!(sentence, "Police responded within 30 minutes.");

        let stages = timeline(&[("policeResponseTime", "1-2 Hours")]);
        let sentence = police(&CaseFields::new(&stages)).expect("police sentence");
        assert_eq!(sentence, "Police responded within 1-2 hours.");

        let stages = timeline(&[("policeResponseTime", "Next Day")]);
        let sentence = police(&CaseFields::new(&stages)).expect("police sentence");
        assert_eq!(sentence, "Police responded next day.");
    }

    #[test]
    fn fir_clause_appends_available_particulars() {
        let stages = timeline(&[
            ("firNo", "77/2024"),
            ("sections", "354 PPC"),
            ("policeStation", "PS Saddar"),
        ]);
        let sentence = police(&CaseFields::new(&stages)).expect("police sentence");
        assert_eq!(
            sentence,
            "Police initiated the appropriate legal procedures and registered FIR No. 77/2024 under sections 354 PPC at PS Saddar."
        );
    }

    #[test]
    fn pending_charge_sheet_is_not_reported() {
        let stages = timeline(&[("chargeSheetDate", "Pending")]);
        assert!(investigation(&CaseFields::new(&stages)).is_none());

        let stages = timeline(&[("ioAssigned", "SI Rashid"), ("chargeSheetDate", "Pending")]);
        assert_eq!(
            investigation(&CaseFields::new(&stages)).as_deref(),
            Some("The investigation was assigned to SI Rashid.")
        );
    }

    #[test]
    fn arrest_clause_carries_remand_jail_and_bail() {
        let stages = timeline(&[
            ("arrestDate", "2024-01-12"),
            ("remandType", "Judicial"),
            ("jailLocation", "Central Jail Lahore"),
            ("bailStatus", "Rejected"),
        ]);
        assert_eq!(
            arrest(&CaseFields::new(&stages)).as_deref(),
            Some("The accused was arrested on 2024-01-12 and placed on judicial remand at Central Jail Lahore. The bail status of the accused is recorded as rejected.")
        );
    }

    #[test]
    fn court_outcome_branches() {
        let stages = timeline(&[("outcome", "Under Trial")]);
        assert_eq!(
            court(&CaseFields::new(&stages)).as_deref(),
            Some("The case is currently under trial proceedings.")
        );

        let stages = timeline(&[("outcome", "Acquitted"), ("judgeName", "Justice A. Khan")]);
        assert_eq!(
            court(&CaseFields::new(&stages)).as_deref(),
            Some("The case was heard before Justice A. Khan. Case outcome: Acquitted.")
        );

        let stages = timeline(&[("judgmentDate", "2024-06-01")]);
        assert_eq!(
            court(&CaseFields::new(&stages)).as_deref(),
            Some("Judgment was delivered on 2024-06-01.")
        );
    }

    #[test]
    fn closing_branches_on_status_then_progress() {
        let progress = |percent| CaseProgress {
            completed: 0,
            total: 0,
            percent,
        };
        assert_eq!(
            closing("Convicted", progress(20)).1,
            ClosingAssessment::Successful
        );
        assert_eq!(
            closing("Trial", progress(49)).1,
            ClosingAssessment::NeedsAttention
        );
        assert_eq!(
            closing("Trial", progress(50)).1,
            ClosingAssessment::ProgressingSteadily
        );
        assert_eq!(
            closing("convicted", progress(10)).1,
            ClosingAssessment::NeedsAttention
        );
    }
}

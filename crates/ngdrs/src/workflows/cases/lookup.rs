//! Closed lookup tables backing narrative phrasing.
//!
//! Each table resolves a free-text code from the case record to a fixed
//! phrase. Unknown inputs resolve to `None` and the caller applies the
//! table's single fallback.

/// Known keys of a stage's `details` map.
///
/// The vocabulary is not enforced on input; stages may carry other keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKey {
    IntakeChannel,
    PoliceStation,
    PerpetratorType,
    IncidentLocation,
    ViolenceType,
    TfgbvType,
    RiskLevel,
    Recurrence,
    PoliceResponseTime,
    FirNo,
    FirDate,
    Sections,
    Hospital,
    MedicalExamDate,
    MloName,
    DnaReport,
    IoAssigned,
    ChargeSheetDate,
    ArrestDate,
    RemandType,
    JailLocation,
    BailStatus,
    JudgeName,
    JudgmentDate,
    Outcome,
    SentenceDetail,
}

impl DetailKey {
    pub const fn ordered() -> [Self; 26] {
        [
            Self::IntakeChannel,
            Self::PoliceStation,
            Self::PerpetratorType,
            Self::IncidentLocation,
            Self::ViolenceType,
            Self::TfgbvType,
            Self::RiskLevel,
            Self::Recurrence,
            Self::PoliceResponseTime,
            Self::FirNo,
            Self::FirDate,
            Self::Sections,
            Self::Hospital,
            Self::MedicalExamDate,
            Self::MloName,
            Self::DnaReport,
            Self::IoAssigned,
            Self::ChargeSheetDate,
            Self::ArrestDate,
            Self::RemandType,
            Self::JailLocation,
            Self::BailStatus,
            Self::JudgeName,
            Self::JudgmentDate,
            Self::Outcome,
            Self::SentenceDetail,
        ]
    }

    /// Key as it appears in a stage's `details` map.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IntakeChannel => "intakeChannel",
            Self::PoliceStation => "policeStation",
            Self::PerpetratorType => "perpetratorType",
            Self::IncidentLocation => "incidentLocation",
            Self::ViolenceType => "violenceType",
            Self::TfgbvType => "tfgbvType",
            Self::RiskLevel => "riskLevel",
            Self::Recurrence => "recurrence",
            Self::PoliceResponseTime => "policeResponseTime",
            Self::FirNo => "firNo",
            Self::FirDate => "firDate",
            Self::Sections => "sections",
            Self::Hospital => "hospital",
            Self::MedicalExamDate => "medicalExamDate",
            Self::MloName => "mloName",
            Self::DnaReport => "dnaReport",
            Self::IoAssigned => "ioAssigned",
            Self::ChargeSheetDate => "chargeSheetDate",
            Self::ArrestDate => "arrestDate",
            Self::RemandType => "remandType",
            Self::JailLocation => "jailLocation",
            Self::BailStatus => "bailStatus",
            Self::JudgeName => "judgeName",
            Self::JudgmentDate => "judgmentDate",
            Self::Outcome => "outcome",
            Self::SentenceDetail => "sentenceDetail",
        }
    }

    /// Column heading used by register exports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::IntakeChannel => "Intake Channel",
            Self::PoliceStation => "Police Station",
            Self::PerpetratorType => "Perpetrator Type",
            Self::IncidentLocation => "Incident Location",
            Self::ViolenceType => "Violence Type",
            Self::TfgbvType => "TFGBV Type",
            Self::RiskLevel => "Risk Level",
            Self::Recurrence => "Recurrence",
            Self::PoliceResponseTime => "Police Response Time",
            Self::FirNo => "FIR Number",
            Self::FirDate => "FIR Date",
            Self::Sections => "Sections",
            Self::Hospital => "Hospital",
            Self::MedicalExamDate => "Medical Exam Date",
            Self::MloName => "MLO Name",
            Self::DnaReport => "DNA Report",
            Self::IoAssigned => "IO Assigned",
            Self::ChargeSheetDate => "Charge Sheet Date",
            Self::ArrestDate => "Arrest Date",
            Self::RemandType => "Remand Type",
            Self::JailLocation => "Jail Location",
            Self::BailStatus => "Bail Status",
            Self::JudgeName => "Judge Name",
            Self::JudgmentDate => "Judgment Date",
            Self::Outcome => "Outcome",
            Self::SentenceDetail => "Sentence Detail",
        }
    }

    /// Matches either the map key or the heading, ignoring ASCII case.
    pub fn from_field_name(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered().into_iter().find(|key| {
            key.as_str().eq_ignore_ascii_case(trimmed) || key.label().eq_ignore_ascii_case(trimmed)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrimeCategory {
    Physical,
    Sexual,
    Domestic,
    Psychological,
    Economic,
    Honour,
    ForcedMarriage,
    AcidAttack,
    Cyberstalking,
    ImageBasedAbuse,
    OnlineHarassment,
    Sextortion,
    Doxxing,
    Impersonation,
}

impl CrimeCategory {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::Physical,
            Self::Sexual,
            Self::Domestic,
            Self::Psychological,
            Self::Economic,
            Self::Honour,
            Self::ForcedMarriage,
            Self::AcidAttack,
            Self::Cyberstalking,
            Self::ImageBasedAbuse,
            Self::OnlineHarassment,
            Self::Sextortion,
            Self::Doxxing,
            Self::Impersonation,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Physical => "GB-PH (Physical)",
            Self::Sexual => "GB-SX (Sexual)",
            Self::Domestic => "GB-DV (Domestic)",
            Self::Psychological => "GB-PS (Psychological)",
            Self::Economic => "GB-EC (Economic)",
            Self::Honour => "GB-HC (Honour Crime)",
            Self::ForcedMarriage => "GB-FM (Forced Marriage)",
            Self::AcidAttack => "GB-AA (Acid Attack)",
            Self::Cyberstalking => "TF-CS (Cyberstalking)",
            Self::ImageBasedAbuse => "TF-IB (Image-Based Abuse)",
            Self::OnlineHarassment => "TF-OH (Online Harassment)",
            Self::Sextortion => "TF-SE (Sextortion)",
            Self::Doxxing => "TF-DX (Doxxing)",
            Self::Impersonation => "TF-IM (Impersonation)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Physical => "physical violence and assault",
            Self::Sexual => "sexual violence",
            Self::Domestic => "domestic violence",
            Self::Psychological => "psychological and emotional abuse",
            Self::Economic => "economic abuse and deprivation",
            Self::Honour => "honour-based violence",
            Self::ForcedMarriage => "forced marriage",
            Self::AcidAttack => "an acid attack",
            Self::Cyberstalking => "cyberstalking",
            Self::ImageBasedAbuse => "non-consensual sharing of intimate images",
            Self::OnlineHarassment => "online harassment",
            Self::Sextortion => "sextortion",
            Self::Doxxing => "publication of private information (doxxing)",
            Self::Impersonation => "online impersonation",
        }
    }

    /// Bare code such as `GB-PH`, without the parenthetical name.
    fn short_code(self) -> &'static str {
        let code = self.code();
        match code.find(' ') {
            Some(index) => &code[..index],
            None => code,
        }
    }

    /// Resolves a crime code by full text or by its bare prefix.
    pub fn from_code(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        let prefix = trimmed.split_whitespace().next().unwrap_or(trimmed);
        Self::ordered().into_iter().find(|category| {
            category.code().eq_ignore_ascii_case(trimmed)
                || category.short_code().eq_ignore_ascii_case(prefix)
        })
    }
}

/// Phrase used when the perpetrator type is absent or unrecognized.
pub const UNKNOWN_PERPETRATOR: &str = "the accused";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerpetratorKind {
    IntimatePartner,
    FormerPartner,
    FamilyMember,
    InLaw,
    Acquaintance,
    Colleague,
    Neighbour,
    Stranger,
    OnlineContact,
    Anonymous,
}

impl PerpetratorKind {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::IntimatePartner,
            Self::FormerPartner,
            Self::FamilyMember,
            Self::InLaw,
            Self::Acquaintance,
            Self::Colleague,
            Self::Neighbour,
            Self::Stranger,
            Self::OnlineContact,
            Self::Anonymous,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::IntimatePartner => "Intimate Partner",
            Self::FormerPartner => "Former Partner",
            Self::FamilyMember => "Family Member",
            Self::InLaw => "In-Law",
            Self::Acquaintance => "Acquaintance",
            Self::Colleague => "Colleague",
            Self::Neighbour => "Neighbour",
            Self::Stranger => "Stranger",
            Self::OnlineContact => "Online Contact",
            Self::Anonymous => "Anonymous Account",
        }
    }

    pub const fn phrase(self) -> &'static str {
        match self {
            Self::IntimatePartner => "her intimate partner",
            Self::FormerPartner => "her former partner",
            Self::FamilyMember => "a family member",
            Self::InLaw => "a member of her in-laws",
            Self::Acquaintance => "an acquaintance",
            Self::Colleague => "a colleague",
            Self::Neighbour => "a neighbour",
            Self::Stranger => "a stranger",
            Self::OnlineContact => "an online contact",
            Self::Anonymous => "an anonymous account holder",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Perpetrator phrase with the table fallback applied.
pub fn perpetrator_phrase(value: Option<&str>) -> &'static str {
    value
        .and_then(PerpetratorKind::from_label)
        .map(PerpetratorKind::phrase)
        .unwrap_or(UNKNOWN_PERPETRATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crime_codes_resolve_by_full_text_and_prefix() {
        assert_eq!(
            CrimeCategory::from_code("GB-PH (Physical)"),
            Some(CrimeCategory::Physical)
        );
        assert_eq!(CrimeCategory::from_code("gb-ph"), Some(CrimeCategory::Physical));
        assert_eq!(
            CrimeCategory::from_code("TF-CS (Stalking online)"),
            Some(CrimeCategory::Cyberstalking)
        );
        assert_eq!(CrimeCategory::from_code("XX-99"), None);
        assert_eq!(CrimeCategory::from_code("   "), None);
    }

    #[test]
    fn every_crime_code_round_trips_through_the_table() {
        for category in CrimeCategory::ordered() {
            assert_eq!(CrimeCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn perpetrator_lookup_falls_back_to_accused() {
        assert_eq!(
            perpetrator_phrase(Some("intimate partner")),
            "her intimate partner"
        );
        assert_eq!(perpetrator_phrase(Some("Landlord")), UNKNOWN_PERPETRATOR);
        assert_eq!(perpetrator_phrase(None), UNKNOWN_PERPETRATOR);
    }

    #[test]
    fn detail_keys_accept_map_keys_and_headings() {
        assert_eq!(DetailKey::from_field_name("firNo"), Some(DetailKey::FirNo));
        assert_eq!(
            DetailKey::from_field_name(" fir number "),
            Some(DetailKey::FirNo)
        );
        assert_eq!(
            DetailKey::from_field_name("MLO Name"),
            Some(DetailKey::MloName)
        );
        assert_eq!(DetailKey::from_field_name("shoeSize"), None);
    }
}

use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::CaseRegisterImportError;

/// One line of a long-format register export: a single detail field of a
/// single stage, plus the case columns repeated (or left blank).
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterRow {
    #[serde(rename = "Case ID", default)]
    pub(crate) case_id: String,
    #[serde(rename = "Case Type", default, deserialize_with = "empty_string_as_none")]
    pub(crate) case_type: Option<String>,
    #[serde(rename = "Crime Code", default, deserialize_with = "empty_string_as_none")]
    pub(crate) crime_code: Option<String>,
    #[serde(
        rename = "Survivor Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) survivor_name: Option<String>,
    #[serde(rename = "Report Date", default, deserialize_with = "empty_string_as_none")]
    pub(crate) report_date: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    pub(crate) status: Option<String>,
    #[serde(rename = "Stage Code", default, deserialize_with = "empty_string_as_none")]
    pub(crate) stage_code: Option<String>,
    #[serde(rename = "Stage Name", default, deserialize_with = "empty_string_as_none")]
    pub(crate) stage_name: Option<String>,
    #[serde(
        rename = "Stage Status",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) stage_status: Option<String>,
    #[serde(rename = "Field", default, deserialize_with = "empty_string_as_none")]
    pub(crate) field: Option<String>,
    #[serde(rename = "Value", default, deserialize_with = "empty_string_as_none")]
    pub(crate) value: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(
    reader: R,
    max_rows: usize,
) -> Result<Vec<RegisterRow>, CaseRegisterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<RegisterRow>() {
        if rows.len() == max_rows {
            return Err(CaseRegisterImportError::TooManyRows { limit: max_rows });
        }
        rows.push(record?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Case ID,Case Type,Crime Code,Survivor Name,Report Date,Status,Stage Code,Stage Name,Stage Status,Field,Value\n";

    #[test]
    fn blank_cells_parse_as_none() {
        let data = format!("{HEADER}C-1,GBV,, ,2024-01-01,,S1,Intake,Completed,,\n");
        let rows = parse_rows(data.as_bytes(), 10).expect("rows parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].case_id, "C-1");
        assert_eq!(rows[0].case_type.as_deref(), Some("GBV"));
        assert!(rows[0].crime_code.is_none());
        assert!(rows[0].survivor_name.is_none());
        assert!(rows[0].field.is_none());
    }

    #[test]
    fn row_cap_is_enforced() {
        let data = format!("{HEADER}C-1,GBV,,,,,S1,,,,\nC-1,GBV,,,,,S2,,,,\n");
        match parse_rows(data.as_bytes(), 1) {
            Err(CaseRegisterImportError::TooManyRows { limit }) => assert_eq!(limit, 1),
            other => panic!("expected row cap error, got {other:?}"),
        }
    }
}

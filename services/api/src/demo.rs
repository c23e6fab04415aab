use crate::infra::read_case_file;
use clap::Args;
use ngdrs::config::AppConfig;
use ngdrs::error::AppError;
use ngdrs::workflows::cases::router::{summarize_register, RegisterSummaryResponse};
use ngdrs::workflows::cases::{summarize, CaseRecord, CaseSummaryView, CaseType, TimelineStage};
use ngdrs::workflows::register::CaseRegisterImporter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CaseSummaryArgs {
    /// JSON file holding one case record or an array of records
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the summary views as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RegisterSummaryArgs {
    /// Case-register CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Only summarize the case with this ID
    #[arg(long)]
    pub(crate) case_id: Option<String>,
    /// Print the summaries as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the summary view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_case_summary(args: CaseSummaryArgs) -> Result<(), AppError> {
    let CaseSummaryArgs { input, json } = args;
    let cases = read_case_file(&input)?;

    let views = cases
        .iter()
        .map(summarize)
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for (index, view) in views.iter().enumerate() {
            if index > 0 {
                println!();
            }
            render_case_summary(view);
        }
    }

    Ok(())
}

pub(crate) fn run_register_summary(args: RegisterSummaryArgs) -> Result<(), AppError> {
    let RegisterSummaryArgs { csv, case_id, json } = args;
    let config = AppConfig::load()?;

    let mut cases = CaseRegisterImporter::new(config.register.max_rows).from_path(csv)?;
    if let Some(case_id) = case_id.as_deref() {
        cases.retain(|case| case.case_id == case_id);
    }

    let response = summarize_register(&cases);
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_register_summary(&response);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let case = sample_case();
    let view = summarize(&case)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("Case narrative demo");
        println!();
        render_case_summary(&view);
    }

    Ok(())
}

fn render_case_summary(view: &CaseSummaryView) {
    let case_type = view.case_type_label.unwrap_or("Unclassified");
    println!("Case {} ({})", view.case_id, case_type);
    println!(
        "Status: {} | {}/{} stages completed ({}%) | {}",
        view.status,
        view.progress.completed,
        view.progress.total,
        view.progress.percent,
        view.assessment_label
    );

    if !view.stages.is_empty() {
        println!("\nStages");
        for stage in &view.stages {
            let marker = if stage.completed { "x" } else { " " };
            println!(
                "- [{}] {} {}: {}",
                marker, stage.stage_code, stage.stage_name, stage.stage_status
            );
        }
    }

    println!("\nNarrative");
    println!("{}", view.summary);
}

fn render_register_summary(response: &RegisterSummaryResponse) {
    println!(
        "Case register: {} summarized, {} rejected",
        response.summaries.len(),
        response.rejected.len()
    );

    for view in &response.summaries {
        println!();
        render_case_summary(view);
    }

    if !response.rejected.is_empty() {
        println!("\nRejected cases");
        for rejected in &response.rejected {
            println!("- {}: {}", rejected.case_id, rejected.error);
        }
    }
}

fn stage(code: &str, name: &str, status: &str, details: &[(&str, &str)]) -> TimelineStage {
    TimelineStage {
        stage_code: code.to_string(),
        stage_name: name.to_string(),
        stage_status: status.to_string(),
        details: details
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    }
}

fn sample_case() -> CaseRecord {
    CaseRecord {
        case_id: "GBV-LHR-2024-0112".to_string(),
        case_type: Some(CaseType::Gbv),
        crime_code: "GB-PH (Physical)".to_string(),
        survivor_name: "Ayesha K.".to_string(),
        report_date: "2024-01-10".to_string(),
        status: "Convicted".to_string(),
        timeline: vec![
            stage(
                "INT",
                "Complaint Intake",
                "Completed",
                &[
                    ("intakeChannel", "District Help Desk"),
                    ("perpetratorType", "Intimate Partner"),
                    ("incidentLocation", "Residence"),
                    ("violenceType", "Grievous Hurt (PPC 337-A)"),
                    ("riskLevel", "Critical"),
                ],
            ),
            stage(
                "FIR",
                "FIR Registration",
                "Completed",
                &[
                    ("policeResponseTime", "Within 30 minutes"),
                    ("firNo", "112/2024"),
                    ("firDate", "2024-01-11"),
                    ("sections", "337-A(i)"),
                    ("policeStation", "PS Model Town"),
                ],
            ),
            stage(
                "MED",
                "Medico-Legal Examination",
                "Completed",
                &[
                    ("hospital", "Services Hospital Lahore"),
                    ("medicalExamDate", "2024-01-11"),
                    ("mloName", "Dr. Sana Malik"),
                ],
            ),
            stage(
                "INV",
                "Investigation",
                "Completed",
                &[
                    ("ioAssigned", "SI Rashid Mehmood"),
                    ("chargeSheetDate", "2024-02-20"),
                    ("arrestDate", "2024-01-13"),
                    ("remandType", "Judicial"),
                    ("jailLocation", "Camp Jail Lahore"),
                    ("bailStatus", "Rejected"),
                ],
            ),
            stage(
                "JDG",
                "Judgment",
                "Completed",
                &[
                    ("judgeName", "Additional Sessions Judge Nadia Iqbal"),
                    ("judgmentDate", "2024-08-05"),
                    ("outcome", "Convicted"),
                    ("sentenceDetail", "3 years imprisonment"),
                ],
            ),
        ],
    }
}

use crate::demo::{
    run_case_summary, run_demo, run_register_summary, CaseSummaryArgs, DemoArgs,
    RegisterSummaryArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ngdrs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "NGDRS Case Narratives",
    about = "Generate and serve case narrative summaries for the National Gender Data Reporting System",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Summarize case records exported from the dashboard as JSON
    Case {
        #[command(subcommand)]
        command: CaseCommand,
    },
    /// Summarize every case in a case-register CSV export
    Register {
        #[command(subcommand)]
        command: RegisterCommand,
    },
    /// Print the narrative for a built-in sample case
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CaseCommand {
    /// Generate the narrative for one case record or an array of records
    Summarize(CaseSummaryArgs),
}

#[derive(Subcommand, Debug)]
enum RegisterCommand {
    /// Import a register export and generate a narrative per case
    Summarize(RegisterSummaryArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Case {
            command: CaseCommand::Summarize(args),
        } => run_case_summary(args),
        Command::Register {
            command: RegisterCommand::Summarize(args),
        } => run_register_summary(args),
        Command::Demo(args) => run_demo(args),
    }
}

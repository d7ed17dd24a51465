use crate::candidates::{
    run_export, run_intake_submit, run_list, ExportArgs, IntakeSubmitArgs, ListArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_search::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "TalentSearch",
    about = "Serve and query the TalentSearch candidate dashboard",
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
    /// Inspect or export the ranked candidate list
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
    /// Send job intakes to the sourcing workflow
    Intake {
        #[command(subcommand)]
        command: IntakeCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CandidatesCommand {
    /// Print one page of the ranked candidate table
    List(ListArgs),
    /// Write every matching candidate, in ranked order, to a CSV file
    Export(ExportArgs),
}

#[derive(Subcommand, Debug)]
enum IntakeCommand {
    /// Validate a JSON intake form and post it to the webhook
    Submit(IntakeSubmitArgs),
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
        Command::Candidates {
            command: CandidatesCommand::List(args),
        } => run_list(args).await,
        Command::Candidates {
            command: CandidatesCommand::Export(args),
        } => run_export(args).await,
        Command::Intake {
            command: IntakeCommand::Submit(args),
        } => run_intake_submit(args).await,
    }
}

use crate::demo::{run_cohort, run_demo, run_evaluate, CohortArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use five_good::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Student 5 Good readiness",
    about = "Evaluate Student 5 Good readiness from the command line or over HTTP",
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
    /// Evaluate one student's criteria from a JSON file
    Evaluate(EvaluateArgs),
    /// Evaluate every student in a roster CSV
    Cohort(CohortArgs),
    /// Walk sample students through the save-and-evaluate flow
    Demo,
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Cohort(args) => run_cohort(args),
        Command::Demo => run_demo(),
    }
}

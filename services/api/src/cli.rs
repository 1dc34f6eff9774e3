use crate::demo::{run_demo, run_ranking_report, DemoArgs, RankingReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};

use policy_atlas::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Policy Atlas",
    about = "Run and demo the state workforce impact ranking service from the command line",
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
    /// Score states from exported evidence data
    Rankings {
        #[command(subcommand)]
        command: RankingsCommand,
    },
    /// Run a CLI demo over a built-in synthetic dataset
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RankingsCommand {
    /// Build the state ranking report from CSV exports
    Report(RankingReportArgs),
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
        Command::Rankings {
            command: RankingsCommand::Report(args),
        } => run_ranking_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::demo::{
    run_assessment_score, run_check_in_evaluation, run_demo, run_history_report,
    AssessmentScoreArgs, CheckInEvaluateArgs, HistoryReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use safespace::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SafeSpace",
    about = "Run the SafeSpace wellbeing check-in service or evaluate check-ins from the command line",
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
    /// Evaluate a single wellbeing check-in
    Checkin {
        #[command(subcommand)]
        command: CheckInCommand,
    },
    /// Score the twelve-question stress assessment
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Summarize exported check-in history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Walk through a check-in, an assessment and a history trend with sample data
    Demo,
}

#[derive(Subcommand, Debug)]
enum CheckInCommand {
    /// Print insights and resource recommendations for one check-in
    Evaluate(CheckInEvaluateArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Print category scores, the stress level and the matching recovery plan
    Score(AssessmentScoreArgs),
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// Print the wellbeing trend for a CSV export
    Report(HistoryReportArgs),
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
        Command::Checkin {
            command: CheckInCommand::Evaluate(args),
        } => {
            run_check_in_evaluation(args);
            Ok(())
        }
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_assessment_score(args),
        Command::History {
            command: HistoryCommand::Report(args),
        } => run_history_report(args),
        Command::Demo => run_demo(),
    }
}

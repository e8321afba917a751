use crate::decide::{run_decide, DecideArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Engine",
    about = "Serve or run loan decisions for personal identity codes",
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
    /// Decide a single loan application and print the outcome
    Decide(DecideArgs),
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
        Command::Decide(args) => run_decide(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["loan-decision-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn decide_accepts_negative_amounts() {
        let cli = Cli::try_parse_from([
            "loan-decision-api",
            "decide",
            "--personal-code",
            "39001013002",
            "--amount",
            "-100",
            "--period",
            "12",
            "--today",
            "2024-06-15",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Decide(args)) => {
                assert_eq!(args.amount, -100);
                assert_eq!(args.period, 12);
                assert!(args.today.is_some());
            }
            other => panic!("expected decide command, got {other:?}"),
        }
    }
}

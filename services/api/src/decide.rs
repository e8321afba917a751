use crate::infra::parse_date;
use chrono::NaiveDate;
use clap::Args;
use loan_decision::decision::{
    Clock, Decision, DecisionConfig, DecisionEngine, DecisionResponse,
    EstonianPersonalCodeValidator, FixedClock, SystemClock,
};
use loan_decision::error::AppError;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Applicant's personal identity code
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) period: i64,
    /// Date used for the age calculation (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the JSON response body instead of a summary line
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let decision = decide(&args);
    let mut stdout = io::stdout().lock();
    render_decision(&mut stdout, &decision, args.json)
}

fn decide(args: &DecideArgs) -> Decision {
    let today = args.today.unwrap_or_else(|| SystemClock.today());
    let engine = DecisionEngine::with_collaborators(
        EstonianPersonalCodeValidator::new(),
        FixedClock(today),
        DecisionConfig::default(),
    );

    engine.decide(&args.personal_code, args.amount, args.period)
}

fn render_decision<W: Write>(
    out: &mut W,
    decision: &Decision,
    json: bool,
) -> Result<(), AppError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &DecisionResponse::from(decision))?;
        writeln!(out)?;
        return Ok(());
    }

    match decision {
        Decision::Approved {
            loan_amount,
            loan_period,
        } => writeln!(out, "Approved: {loan_amount} over {loan_period} months")?,
        Decision::Rejected { reason } => writeln!(out, "Rejected: {reason}")?,
    }
    Ok(())
}

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::config::ReconcileConfig;
use crate::constants::sources::{
    DEFAULT_PAYMENTS_PATH, DEFAULT_TICKETS_PATH, PAYMENTS_PATH_ENV, TICKETS_PATH_ENV,
};
use crate::ledger::DedupLedger;
use crate::output::{render_diagnostics, render_events};
use crate::pipeline::{ReconcileReport, ReconcileRun};
use crate::types::PathString;

#[derive(Debug, Parser)]
#[command(
    name = "reconcile_tickets",
    disable_help_subcommand = true,
    about = "Find paid transactions without a ticket and synthesize Ticket Issued events",
    long_about = "Compare a payments log against a tickets log (one JSON object per line, keyed by transaction_id) and print one corrective Ticket Issued event per payment that never got a ticket.",
    after_help = "Log paths are optional and resolved in order by explicit arg, environment variables (TICKET_RECONCILE_PAYMENTS, TICKET_RECONCILE_TICKETS), then payments.json and tickets.json in the working directory."
)]
struct ReconcileCli {
    #[arg(
        long = "payments",
        value_name = "PATH",
        help = "Optional payments log override"
    )]
    payments: Option<PathBuf>,
    #[arg(long = "tickets", value_name = "PATH", help = "Optional tickets log override")]
    tickets: Option<PathBuf>,
}

/// Command-line entry point used by the `reconcile_tickets` binary.
///
/// Missing logs and skipped lines are printed to stderr and never change the
/// exit status. Events (or the "no missing tickets" message) go to stdout.
pub fn run_reconcile<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let Some(cli) = parse_cli::<ReconcileCli, _>(
        std::iter::once("reconcile_tickets".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = resolve_config(cli, |key| std::env::var(key).ok());
    let stdout = io::stdout();
    let stderr = io::stderr();
    reconcile_to(&config, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(())
}

/// Run one reconciliation with a fresh ledger and print its outcome.
///
/// Diagnostics are written to `err`, one per line; rendered events to `out`.
pub fn reconcile_to(
    config: &ReconcileConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<ReconcileReport, Box<dyn Error>> {
    config.validate()?;
    let mut ledger = DedupLedger::new();
    let report = ReconcileRun::from_config(config).run(&mut ledger)?;
    for line in render_diagnostics(&report.diagnostics) {
        writeln!(err, "{line}")?;
    }
    writeln!(out, "{}", render_events(&report.events)?)?;
    Ok(report)
}

fn resolve_config(
    cli: ReconcileCli,
    env: impl Fn(&str) -> Option<PathString>,
) -> ReconcileConfig {
    ReconcileConfig::default()
        .with_payments_path(resolve_path(
            cli.payments,
            PAYMENTS_PATH_ENV,
            DEFAULT_PAYMENTS_PATH,
            &env,
        ))
        .with_tickets_path(resolve_path(
            cli.tickets,
            TICKETS_PATH_ENV,
            DEFAULT_TICKETS_PATH,
            &env,
        ))
}

fn resolve_path(
    explicit: Option<PathBuf>,
    env_key: &str,
    default: &str,
    env: &impl Fn(&str) -> Option<PathString>,
) -> PathBuf {
    explicit
        .or_else(|| env(env_key).filter(|value| !value.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

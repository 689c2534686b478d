/*
 * Responsibility
 * - Parse the command line
 * - Call app::run() (no logic here)
 */
use std::process::ExitCode;

use anyhow::Result;
use auth_chain::app::{self, Attempt};
use clap::Parser;

/// Run credentials through the authentication processor chain.
///
/// Without arguments the demonstration attempts are run against the
/// configured chain (see AUTH_CHAIN_ORDER).
#[derive(Parser, Debug)]
#[command(name = "auth-chain", version, about)]
struct Args {
    /// Identifier to validate (requires --secret)
    #[arg(long, requires = "secret")]
    identifier: Option<String>,

    /// Secret to validate (requires --identifier)
    #[arg(long, requires = "identifier")]
    secret: Option<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let attempt = match (args.identifier, args.secret) {
        (Some(identifier), Some(secret)) => Some(Attempt { identifier, secret }),
        _ => None,
    };

    let accepted = app::run(attempt)?;
    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

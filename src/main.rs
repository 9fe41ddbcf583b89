//! awsutil - AWS account administration utilities
//!
//! Automates occasional IAM tasks: bootstrapping a new (GovCloud) account with
//! an administration group, policy and user, giving an existing user console
//! access, and resetting a user's console password.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod error;
mod iam;
mod logging;
mod operations;
mod prompt;
mod secret;
#[cfg(test)]
mod test_fixtures;

use cli::{CLI_NAME, Cli, Commands};
use operations::RotationKind;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::BootstrapGovcloud(args) => commands::bootstrap_govcloud::run(args).await,
        Commands::BootstrapUser(args) => {
            commands::password::run(args, RotationKind::Provision).await
        }
        Commands::ResetUserPassword(args) => {
            commands::password::run(args, RotationKind::Reset).await
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{CLI_NAME}: {e}");
        if let Some(help) = e.help() {
            eprintln!("help: {help}");
        }
        eprintln!("Try {CLI_NAME} --help for more information.");
        std::process::exit(1);
    }
}

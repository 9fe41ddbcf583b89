//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bootstrap_govcloud: Bootstrap account arguments
//! - password: Arguments shared by bootstrap-user and reset-user-password
//! - completions: Completions command arguments
//!
//! Every flag can also be supplied through an environment variable named after
//! it with an `AWSUTIL_` prefix and dashes replaced by underscores.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod bootstrap_govcloud;
pub mod completions;
pub mod password;

pub use bootstrap_govcloud::BootstrapGovcloudArgs;
pub use completions::CompletionsArgs;
pub use password::{GeneratorKind, PasswordArgs};

/// Name of the binary, used in messages and completions
pub const CLI_NAME: &str = "awsutil";

/// awsutil - utilities for managing AWS accounts
#[derive(Parser, Debug)]
#[command(
    name = "awsutil",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "This is a set of utilities for managing AWS accounts",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  awsutil bootstrap-govcloud --profile gov --user alice   \x1b[90m# Bootstrap a new account\x1b[0m\n   \
                  awsutil bootstrap-user --user bob                       \x1b[90m# Give bob console access\x1b[0m\n   \
                  awsutil reset-user-password --user bob                  \x1b[90m# Reset bob's password\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output (logs every AWS call)
    #[arg(long, short = 'v', global = true, env = "AWSUTIL_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap a new AWS govcloud account
    BootstrapGovcloud(BootstrapGovcloudArgs),

    /// Bootstrap an IAM user
    BootstrapUser(PasswordArgs),

    /// Reset the password for an IAM user
    ResetUserPassword(PasswordArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

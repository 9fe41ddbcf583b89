//! Shell completions command

use clap::CommandFactory;

use crate::cli::{CLI_NAME, Cli, CompletionsArgs};
use crate::error::Result;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, CLI_NAME, &mut std::io::stdout().lock());

    Ok(())
}

use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    awsutil completions bash > ~/.bash_completion.d/awsutil\n\n\
                  Generate zsh completions:\n    awsutil completions zsh > ~/.zfunc/_awsutil\n\n\
                  Generate fish completions:\n    awsutil completions fish > ~/.config/fish/completions/awsutil.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}

use clap::{Parser, ValueEnum};

/// Where generated passwords come from
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// AWS Secrets Manager GetRandomPassword
    #[default]
    SecretsManager,
    /// In-process random generator
    Local,
}

/// Arguments for the bootstrap-user and reset-user-password commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Give a user console access:\n    awsutil bootstrap-user --user bob\n\n\
                  Reset a password in GovCloud:\n    AWS_REGION=us-gov-west-1 awsutil reset-user-password --user bob\n\n\
                  Generate the password locally:\n    awsutil reset-user-password --user bob --password-generator local")]
pub struct PasswordArgs {
    /// The name of the IAM user to update
    #[arg(long, env = "AWSUTIL_USER")]
    pub user: Option<String>,

    /// The AWS Profile name to use from ~/.aws/config (defaults to the SDK credential chain)
    #[arg(long, env = "AWSUTIL_PROFILE")]
    pub profile: Option<String>,

    /// AWS region, also used to pick the console sign-in domain
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Password generator to use
    #[arg(
        long,
        env = "AWSUTIL_PASSWORD_GENERATOR",
        value_enum,
        default_value_t = GeneratorKind::SecretsManager
    )]
    pub password_generator: GeneratorKind,
}

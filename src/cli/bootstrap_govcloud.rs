use clap::Parser;

/// Arguments for the bootstrap-govcloud command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bootstrap with the default admin group and policy:\n    awsutil bootstrap-govcloud --profile gov --user alice\n\n\
                  Use custom group and policy names:\n    awsutil bootstrap-govcloud --profile gov --user alice --group-name ops --policy-name ops\n\n\
                  Configure through the environment:\n    AWSUTIL_PROFILE=gov AWSUTIL_USER=alice awsutil bootstrap-govcloud")]
pub struct BootstrapGovcloudArgs {
    /// The AWS Profile name to use from ~/.aws/config
    #[arg(long, env = "AWSUTIL_PROFILE")]
    pub profile: Option<String>,

    /// The name of the first IAM user to create
    #[arg(long, env = "AWSUTIL_USER")]
    pub user: Option<String>,

    /// The name of the IAM group used for administration
    #[arg(long, env = "AWSUTIL_GROUP_NAME", default_value = "admin")]
    pub group_name: String,

    /// The name of the IAM policy used for administration
    #[arg(long, env = "AWSUTIL_POLICY_NAME", default_value = "admin")]
    pub policy_name: String,

    /// AWS region (defaults to the profile's region)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,
}

//! Bootstrap command CLI wrapper
//!
//! Validates the arguments before any AWS configuration is loaded, then
//! delegates to BootstrapOperation.

use console::Style;

use super::helpers;
use crate::cli::BootstrapGovcloudArgs;
use crate::config::BootstrapRequest;
use crate::error::Result;
use crate::iam::AwsIdentityProvider;
use crate::operations::BootstrapOperation;
use crate::prompt::TerminalPrompt;

/// Run bootstrap-govcloud command
pub async fn run(args: BootstrapGovcloudArgs) -> Result<()> {
    let request = BootstrapRequest::try_from(&args)?;

    let sdk_config =
        helpers::load_sdk_config(Some(request.profile()), args.region.as_deref()).await;
    let provider = AwsIdentityProvider::new(&sdk_config);

    let identity = BootstrapOperation::new(&provider, &TerminalPrompt)
        .execute(&request)
        .await?;

    let bold = Style::new().bold();
    println!();
    println!("{} {}", bold.apply_to("User:"), identity.user_name);
    if let Some(group_name) = &identity.group_name {
        println!("{} {}", bold.apply_to("Group:"), group_name);
    }
    if let Some(arn) = &identity.arn {
        println!("{} {}", bold.apply_to("ARN:"), arn);
    }

    Ok(())
}

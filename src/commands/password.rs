//! bootstrap-user and reset-user-password CLI wrapper
//!
//! Both commands share their arguments and differ only in the rotation kind
//! handed to PasswordOperation.

use super::helpers;
use crate::cli::{GeneratorKind, PasswordArgs};
use crate::config::PasswordRequest;
use crate::error::Result;
use crate::iam::AwsIdentityProvider;
use crate::operations::{PasswordOperation, RotationKind, instructions};
use crate::secret::{LocalGenerator, SecretGenerator, SecretsManagerGenerator};

/// Run bootstrap-user (`Provision`) or reset-user-password (`Reset`)
pub async fn run(args: PasswordArgs, kind: RotationKind) -> Result<()> {
    let request = PasswordRequest::try_from(&args)?;

    let sdk_config = helpers::load_sdk_config(request.profile(), request.region()).await;
    let provider = AwsIdentityProvider::new(&sdk_config);
    let generator: Box<dyn SecretGenerator> = match args.password_generator {
        GeneratorKind::SecretsManager => Box::new(SecretsManagerGenerator::new(&sdk_config)),
        GeneratorKind::Local => Box::new(LocalGenerator),
    };

    let outcome = PasswordOperation::new(&provider, generator.as_ref())
        .with_region(helpers::resolved_region(&sdk_config))
        .execute(&request, kind)
        .await?;

    print!(
        "{}",
        instructions::render(&outcome.identity, &outcome.endpoint, kind)
    );

    Ok(())
}

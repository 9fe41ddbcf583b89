//! Password provisioning and reset workflow
//!
//! Both entry points generate a password first. Provisioning then checks that
//! the user exists and creates its login profile; a reset goes straight to
//! updating the existing login profile. Either way the account aliases are
//! read afterwards to build the console sign-in URL.

use super::{ProvisionedIdentity, RegionEndpoint, RotationKind};
use crate::config::PasswordRequest;
use crate::error::{Result, provider as provider_error};
use crate::iam::IdentityProvider;
use crate::secret::{PasswordPolicy, SecretGenerator};

/// What a password workflow hands back for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOutcome {
    pub identity: ProvisionedIdentity,
    pub endpoint: RegionEndpoint,
}

pub struct PasswordOperation<'a, P: ?Sized, G: ?Sized> {
    provider: &'a P,
    generator: &'a G,
    policy: PasswordPolicy,
    region: Option<String>,
}

impl<'a, P, G> PasswordOperation<'a, P, G>
where
    P: IdentityProvider + ?Sized,
    G: SecretGenerator + ?Sized,
{
    pub fn new(provider: &'a P, generator: &'a G) -> Self {
        Self {
            provider,
            generator,
            policy: PasswordPolicy::default(),
            region: None,
        }
    }

    /// Region used to choose the sign-in domain; falls back to the request's
    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub async fn execute(
        &self,
        request: &PasswordRequest,
        kind: RotationKind,
    ) -> Result<PasswordOutcome> {
        let user_name = request.user_name();
        let password = self.generator.generate(&self.policy).await?;

        let arn = match kind {
            RotationKind::Provision => {
                let user = self
                    .provider
                    .get_user(user_name)
                    .await?
                    .ok_or_else(|| provider_error::user_not_provisioned(user_name))?;
                self.provider
                    .create_login_profile(user_name, &password)
                    .await?;
                user.arn
            }
            RotationKind::Reset => {
                self.provider
                    .update_login_profile(user_name, &password)
                    .await?;
                None
            }
        };
        tracing::info!(user_name, ?kind, "login profile updated");

        let aliases = self.provider.list_account_aliases().await?;
        let region = self.region.as_deref().or(request.region());
        let endpoint = RegionEndpoint::derive(&aliases, region, user_name, kind);

        Ok(PasswordOutcome {
            identity: ProvisionedIdentity {
                user_name: user_name.to_string(),
                group_name: None,
                arn,
                temporary_password: password,
            },
            endpoint,
        })
    }
}

//! Account bootstrap workflow
//!
//! Creates the administration group, attaches the full-access inline policy,
//! creates the first user, adds it to the group, lists the account's users
//! and finally sets the user's console password from operator input.
//!
//! The sequence is fail-fast: the first error is returned and nothing that was
//! already created is removed, so a failed run needs manual inspection. The
//! user listing has no side effect but still aborts the run when it fails.

use console::Style;

use super::ProvisionedIdentity;
use crate::config::BootstrapRequest;
use crate::error::Result;
use crate::iam::{IdentityProvider, PolicyDocument, ROOT_PATH};
use crate::prompt::SecretPrompt;

pub struct BootstrapOperation<'a, P: ?Sized, S: ?Sized> {
    provider: &'a P,
    prompt: &'a S,
}

fn step(message: &str) {
    println!("{}", Style::new().bold().apply_to(message));
}

impl<'a, P, S> BootstrapOperation<'a, P, S>
where
    P: IdentityProvider + ?Sized,
    S: SecretPrompt + ?Sized,
{
    pub fn new(provider: &'a P, prompt: &'a S) -> Self {
        Self { provider, prompt }
    }

    pub async fn execute(&self, request: &BootstrapRequest) -> Result<ProvisionedIdentity> {
        let group_name = request.group_name();
        let policy_name = request.policy_name();
        let user_name = request.user_name();

        step(&format!("Create Group {group_name}"));
        let group = self.provider.create_group(group_name, ROOT_PATH).await?;
        tracing::debug!(group = %group.group_name, arn = ?group.arn, "group created");

        step(&format!("Create Policy {policy_name} in Group {group_name}"));
        let policy_document = PolicyDocument::administrator().to_json()?;
        self.provider
            .put_group_policy(group_name, policy_name, &policy_document)
            .await?;

        step(&format!("Create User {user_name}"));
        let user = self.provider.create_user(user_name, ROOT_PATH).await?;

        step(&format!("Add User {user_name} to Group {group_name}"));
        self.provider
            .add_user_to_group(group_name, user_name)
            .await?;

        step("List Users");
        for listed in self.provider.list_users(ROOT_PATH).await? {
            println!(
                "{} {}",
                listed.user_name,
                listed.arn.as_deref().unwrap_or_default()
            );
        }

        println!();
        let password = self
            .prompt
            .prompt_secret(&format!("Enter a new password for {user_name}:"))?;

        println!();
        step(&format!("Set password for user {user_name}"));
        self.provider
            .create_login_profile(user_name, &password)
            .await?;

        tracing::info!(user_name, group_name, "account bootstrap complete");
        println!("COMPLETE!");

        Ok(ProvisionedIdentity {
            user_name: user_name.to_string(),
            group_name: Some(group_name.to_string()),
            arn: user.arn,
            temporary_password: password,
        })
    }
}

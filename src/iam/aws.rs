//! IAM provider backed by the AWS SDK
//!
//! Every call is issued once and awaited before returning. Provider errors are
//! rendered with the SDK's full error context so the caller sees the service
//! message (error code, request id) verbatim.

use async_trait::async_trait;
use aws_sdk_iam::Client;
use aws_sdk_iam::error::{DisplayErrorContext, SdkError};
use aws_sdk_iam::operation::get_user::{GetUserError, GetUserOutput};
use aws_sdk_iam::operation::list_users::ListUsersOutput;
use aws_sdk_iam::operation::update_login_profile::{
    UpdateLoginProfileError, UpdateLoginProfileOutput,
};
use aws_sdk_iam::types::User;

use super::{GroupSummary, IdentityProvider, UserSummary};
use crate::error::{AwsutilError, Result, provider};

pub struct AwsIdentityProvider {
    client: Client,
}

impl AwsIdentityProvider {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

fn sdk_failure<E: std::error::Error>(operation: &'static str, err: &E) -> AwsutilError {
    provider::call_failed(operation, DisplayErrorContext(err).to_string())
}

fn user_summary(user: &User) -> UserSummary {
    UserSummary {
        user_name: user.user_name().to_string(),
        arn: Some(user.arn().to_string()),
    }
}

/// Marker of the next ListUsers page, if the listing was truncated
fn next_marker(output: &ListUsersOutput) -> Option<String> {
    output
        .marker()
        .filter(|_| output.is_truncated())
        .map(str::to_string)
}

/// GetUser outcome; `NoSuchEntity` means the user does not exist
fn user_lookup(
    user_name: &str,
    result: std::result::Result<GetUserOutput, SdkError<GetUserError>>,
) -> Result<Option<UserSummary>> {
    match result {
        Ok(output) => Ok(Some(output.user().map_or_else(
            || UserSummary {
                user_name: user_name.to_string(),
                arn: None,
            },
            user_summary,
        ))),
        Err(e)
            if e.as_service_error()
                .is_some_and(GetUserError::is_no_such_entity_exception) =>
        {
            tracing::debug!(user_name, "iam:GetUser reported NoSuchEntity");
            Ok(None)
        }
        Err(e) => Err(sdk_failure("GetUser", &e)),
    }
}

/// UpdateLoginProfile outcome; `NoSuchEntity` means there is no login profile
fn login_profile_update(
    user_name: &str,
    result: std::result::Result<UpdateLoginProfileOutput, SdkError<UpdateLoginProfileError>>,
) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e)
            if e.as_service_error()
                .is_some_and(UpdateLoginProfileError::is_no_such_entity_exception) =>
        {
            Err(provider::login_profile_not_found(
                user_name,
                DisplayErrorContext(&e).to_string(),
            ))
        }
        Err(e) => Err(sdk_failure("UpdateLoginProfile", &e)),
    }
}

#[async_trait]
impl IdentityProvider for AwsIdentityProvider {
    async fn create_group(&self, group_name: &str, path: &str) -> Result<GroupSummary> {
        tracing::debug!(group_name, path, "iam:CreateGroup");
        let output = self
            .client
            .create_group()
            .group_name(group_name)
            .path(path)
            .send()
            .await
            .map_err(|e| sdk_failure("CreateGroup", &e))?;

        Ok(GroupSummary {
            group_name: group_name.to_string(),
            arn: output.group().map(|g| g.arn().to_string()),
        })
    }

    async fn put_group_policy(
        &self,
        group_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> Result<()> {
        tracing::debug!(group_name, policy_name, "iam:PutGroupPolicy");
        self.client
            .put_group_policy()
            .group_name(group_name)
            .policy_name(policy_name)
            .policy_document(policy_document)
            .send()
            .await
            .map_err(|e| sdk_failure("PutGroupPolicy", &e))?;
        Ok(())
    }

    async fn create_user(&self, user_name: &str, path: &str) -> Result<UserSummary> {
        tracing::debug!(user_name, path, "iam:CreateUser");
        let output = self
            .client
            .create_user()
            .user_name(user_name)
            .path(path)
            .send()
            .await
            .map_err(|e| sdk_failure("CreateUser", &e))?;

        Ok(output.user().map_or_else(
            || UserSummary {
                user_name: user_name.to_string(),
                arn: None,
            },
            user_summary,
        ))
    }

    async fn add_user_to_group(&self, group_name: &str, user_name: &str) -> Result<()> {
        tracing::debug!(group_name, user_name, "iam:AddUserToGroup");
        self.client
            .add_user_to_group()
            .group_name(group_name)
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| sdk_failure("AddUserToGroup", &e))?;
        Ok(())
    }

    async fn list_users(&self, path_prefix: &str) -> Result<Vec<UserSummary>> {
        let mut users = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            tracing::debug!(path_prefix, marker = ?marker, "iam:ListUsers");
            let output = self
                .client
                .list_users()
                .path_prefix(path_prefix)
                .set_marker(marker.take())
                .send()
                .await
                .map_err(|e| sdk_failure("ListUsers", &e))?;

            users.extend(output.users().iter().map(user_summary));

            marker = next_marker(&output);
            if marker.is_none() {
                break;
            }
        }

        Ok(users)
    }

    async fn get_user(&self, user_name: &str) -> Result<Option<UserSummary>> {
        tracing::debug!(user_name, "iam:GetUser");
        let result = self.client.get_user().user_name(user_name).send().await;
        user_lookup(user_name, result)
    }

    async fn create_login_profile(&self, user_name: &str, password: &str) -> Result<()> {
        tracing::debug!(user_name, "iam:CreateLoginProfile");
        self.client
            .create_login_profile()
            .user_name(user_name)
            .password(password)
            .send()
            .await
            .map_err(|e| sdk_failure("CreateLoginProfile", &e))?;
        Ok(())
    }

    async fn update_login_profile(&self, user_name: &str, password: &str) -> Result<()> {
        tracing::debug!(user_name, "iam:UpdateLoginProfile");
        let result = self
            .client
            .update_login_profile()
            .user_name(user_name)
            .password(password)
            .send()
            .await;
        login_profile_update(user_name, result)
    }

    async fn list_account_aliases(&self) -> Result<Vec<String>> {
        tracing::debug!("iam:ListAccountAliases");
        let output = self
            .client
            .list_account_aliases()
            .send()
            .await
            .map_err(|e| sdk_failure("ListAccountAliases", &e))?;
        Ok(output.account_aliases().to_vec())
    }
}

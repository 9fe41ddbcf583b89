//! Identity provider capability
//!
//! Workflows talk to IAM only through the [`IdentityProvider`] trait so they
//! can run against the AWS SDK ([`aws::AwsIdentityProvider`]) or against a
//! deterministic fake in tests.

pub mod aws;
pub mod policy;

use async_trait::async_trait;

use crate::error::Result;

pub use aws::AwsIdentityProvider;
pub use policy::PolicyDocument;

/// Path used for every group and user this tool creates or lists
pub const ROOT_PATH: &str = "/";

/// A group as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub group_name: String,
    pub arn: Option<String>,
}

/// A user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub user_name: String,
    pub arn: Option<String>,
}

/// Operations the workflows need from a cloud identity service
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_group(&self, group_name: &str, path: &str) -> Result<GroupSummary>;

    /// Attach an inline policy to a group, replacing any policy with the same name
    async fn put_group_policy(
        &self,
        group_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> Result<()>;

    async fn create_user(&self, user_name: &str, path: &str) -> Result<UserSummary>;

    async fn add_user_to_group(&self, group_name: &str, user_name: &str) -> Result<()>;

    /// List every user under `path_prefix`, in provider order
    async fn list_users(&self, path_prefix: &str) -> Result<Vec<UserSummary>>;

    /// Look up a user; `Ok(None)` means the user does not exist
    async fn get_user(&self, user_name: &str) -> Result<Option<UserSummary>>;

    /// Create a console password; fails if the user already has one
    async fn create_login_profile(&self, user_name: &str, password: &str) -> Result<()>;

    /// Replace the console password; fails if the user has none
    async fn update_login_profile(&self, user_name: &str, password: &str) -> Result<()>;

    async fn list_account_aliases(&self) -> Result<Vec<String>>;
}

//! Operations module for the IAM workflows
//!
//! This module provides the high-level workflows:
//! - BootstrapOperation: group, policy, user and first password for a new account
//! - PasswordOperation: generate a password and create or reset a login profile
//!
//! The operations coordinate with:
//! - IdentityProvider: IAM calls (from iam module)
//! - SecretGenerator: random passwords (from secret module)
//! - SecretPrompt: operator input (from prompt module)
//!
//! Every step is awaited before the next one starts and the first failure is
//! returned as is. Nothing already created is rolled back.

pub mod bootstrap;
pub mod instructions;
pub mod login_url;
pub mod password;

pub use bootstrap::BootstrapOperation;
pub use login_url::RegionEndpoint;
pub use password::PasswordOperation;

/// Which login-profile call a password workflow ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationKind {
    /// First console password for an existing user
    Provision,
    /// Replace the password of a user who already has one
    Reset,
}

/// Identity produced by a workflow, kept only long enough to display it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedIdentity {
    pub user_name: String,
    pub group_name: Option<String>,
    pub arn: Option<String>,
    pub temporary_password: String,
}

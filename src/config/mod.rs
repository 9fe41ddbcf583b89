//! Validated per-invocation configuration
//!
//! Command-line flags and their `AWSUTIL_*` environment fallbacks are merged
//! by clap. The structs here are built once from those arguments, reject empty
//! required values before any AWS call is made, and are immutable afterwards.

use crate::cli::{BootstrapGovcloudArgs, PasswordArgs};
use crate::error::{Result, config};

fn required(value: Option<&str>, what: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(config::empty(what)),
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Parameters for bootstrapping an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapRequest {
    profile: String,
    user_name: String,
    group_name: String,
    policy_name: String,
}

impl BootstrapRequest {
    /// Validate the parameters in order: profile, user, group, policy
    pub fn new(
        profile: Option<&str>,
        user_name: Option<&str>,
        group_name: Option<&str>,
        policy_name: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            profile: required(profile, "AWS Profile")?,
            user_name: required(user_name, "IAM user name")?,
            group_name: required(group_name, "IAM group name")?,
            policy_name: required(policy_name, "IAM policy name")?,
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }
}

impl TryFrom<&BootstrapGovcloudArgs> for BootstrapRequest {
    type Error = crate::error::AwsutilError;

    fn try_from(args: &BootstrapGovcloudArgs) -> Result<Self> {
        Self::new(
            args.profile.as_deref(),
            args.user.as_deref(),
            Some(args.group_name.as_str()),
            Some(args.policy_name.as_str()),
        )
    }
}

/// Parameters for provisioning or resetting a user's console password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    user_name: String,
    profile: Option<String>,
    region: Option<String>,
}

impl PasswordRequest {
    pub fn new(user_name: Option<&str>, profile: Option<&str>, region: Option<&str>) -> Result<Self> {
        Ok(Self {
            user_name: required(user_name, "IAM user name")?,
            profile: optional(profile),
            region: optional(region),
        })
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl TryFrom<&PasswordArgs> for PasswordRequest {
    type Error = crate::error::AwsutilError;

    fn try_from(args: &PasswordArgs) -> Result<Self> {
        Self::new(
            args.user.as_deref(),
            args.profile.as_deref(),
            args.region.as_deref(),
        )
    }
}

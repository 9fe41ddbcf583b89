//! Console sign-in URL derivation
//!
//! The sign-in domain depends on the partition: GovCloud regions use
//! `amazonaws-us-gov.com`, everything else uses the commercial domain.

use super::RotationKind;

/// Regions served by the GovCloud partition
pub const GOVCLOUD_REGIONS: [&str; 2] = ["us-gov-east-1", "us-gov-west-1"];

/// Used when the account has no alias
pub const DEFAULT_CONSOLE_URL: &str = "https://console.aws.amazon.com/";

/// Where a user signs in and manages their credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEndpoint {
    pub console_login_url: String,
    /// Only set for newly provisioned users of an aliased account
    pub security_credentials_url: Option<String>,
}

pub fn is_govcloud(region: &str) -> bool {
    GOVCLOUD_REGIONS.contains(&region)
}

impl RegionEndpoint {
    /// Derive the endpoint from the first account alias, if any
    pub fn derive(
        aliases: &[String],
        region: Option<&str>,
        user_name: &str,
        kind: RotationKind,
    ) -> Self {
        let Some(alias) = aliases.first() else {
            return Self {
                console_login_url: DEFAULT_CONSOLE_URL.to_string(),
                security_credentials_url: None,
            };
        };

        let (console_login_url, security_credentials_url) = match region {
            Some(region) if is_govcloud(region) => (
                format!("https://{alias}.signin.amazonaws-us-gov.com/console"),
                format!(
                    "https://console.amazonaws-us-gov.com/iam/home?region={region}#/users/{user_name}?section=security_credentials"
                ),
            ),
            _ => (
                format!("https://{alias}.signin.aws.amazon.com/console"),
                format!(
                    "https://console.aws.amazon.com/iam/home?#/users/{user_name}?section=security_credentials"
                ),
            ),
        };

        Self {
            console_login_url,
            security_credentials_url: match kind {
                RotationKind::Provision => Some(security_credentials_url),
                RotationKind::Reset => None,
            },
        }
    }
}

//! Shared setup for commands that talk to AWS

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load the AWS SDK configuration from the default provider chain
///
/// `profile` selects a named profile from `~/.aws/config`; `region`, when
/// given, overrides whatever region the chain would resolve.
pub async fn load_sdk_config(profile: Option<&str>, region: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }

    let config = loader.load().await;
    tracing::debug!(
        profile = profile.unwrap_or("default"),
        region = ?config.region(),
        "loaded AWS configuration"
    );
    config
}

/// Region the SDK resolved, as a plain string
pub fn resolved_region(config: &SdkConfig) -> Option<String> {
    config.region().map(ToString::to_string)
}

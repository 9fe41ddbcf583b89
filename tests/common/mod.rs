//! Common test utilities for awsutil integration tests

use assert_cmd::Command;

/// Environment variables the CLI reads, cleared so the host setup cannot leak in
const CLI_ENV_VARS: &[&str] = &[
    "AWSUTIL_PROFILE",
    "AWSUTIL_USER",
    "AWSUTIL_GROUP_NAME",
    "AWSUTIL_POLICY_NAME",
    "AWSUTIL_PASSWORD_GENERATOR",
    "AWSUTIL_VERBOSE",
    "AWS_REGION",
    "RUST_LOG",
];

/// Command for the real awsutil binary with a clean environment
#[allow(deprecated)]
pub fn awsutil_cmd() -> Command {
    let mut cmd = Command::cargo_bin("awsutil").expect("awsutil binary should be built");
    for var in CLI_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

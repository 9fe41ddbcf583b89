//! Password generation through AWS Secrets Manager `GetRandomPassword`

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::DisplayErrorContext;

use super::{PasswordPolicy, SecretGenerator};
use crate::error::{Result, provider};

pub struct SecretsManagerGenerator {
    client: Client,
}

impl SecretsManagerGenerator {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl SecretGenerator for SecretsManagerGenerator {
    async fn generate(&self, policy: &PasswordPolicy) -> Result<String> {
        let length = i64::try_from(policy.length).map_err(|_| {
            provider::password_generation_failed(format!(
                "password length {} is out of range",
                policy.length
            ))
        })?;

        tracing::debug!(length, "secretsmanager:GetRandomPassword");
        let output = self
            .client
            .get_random_password()
            .password_length(length)
            .require_each_included_type(policy.require_each_included_type)
            .send()
            .await
            .map_err(|e| provider::call_failed("GetRandomPassword", DisplayErrorContext(&e).to_string()))?;

        output
            .random_password()
            .map(str::to_string)
            .ok_or_else(|| provider::password_generation_failed("response contained no password"))
    }
}

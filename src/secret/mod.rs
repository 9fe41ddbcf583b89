//! Random password generation
//!
//! Two generators are available: AWS Secrets Manager's `GetRandomPassword`
//! (the default, see [`secrets_manager`]) and an in-process generator
//! ([`local`]) for environments where Secrets Manager is unavailable.

pub mod local;
pub mod secrets_manager;

use async_trait::async_trait;

use crate::error::Result;

pub use local::LocalGenerator;
pub use secrets_manager::SecretsManagerGenerator;

/// Length and character-class requirements for generated passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub length: usize,
    /// Require at least one uppercase, lowercase, digit and symbol
    pub require_each_included_type: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 24,
            require_each_included_type: true,
        }
    }
}

#[async_trait]
pub trait SecretGenerator: Send + Sync {
    async fn generate(&self, policy: &PasswordPolicy) -> Result<String>;
}

/// Symbols Secrets Manager may include in generated passwords
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Whether `password` has at least one character from every class
pub fn covers_all_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SYMBOLS.contains(c))
}

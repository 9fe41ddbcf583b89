//! Operator prompts
//!
//! The bootstrap workflow asks the operator for the first user's password.
//! The prompt blocks the calling thread until input arrives; there is no
//! timeout.

use inquire::{Password, PasswordDisplayMode};

use crate::error::{Result, interaction};

/// Obtains a secret from a human operator
pub trait SecretPrompt: Send + Sync {
    fn prompt_secret(&self, message: &str) -> Result<String>;
}

/// Masked terminal prompt using inquire
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn prompt_secret(&self, message: &str) -> Result<String> {
        let secret = Password::new(message)
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_help_message("The password must satisfy the account's password policy")
            .prompt()?;

        if secret.is_empty() {
            return Err(interaction::input_failed("no password was entered"));
        }
        Ok(secret)
    }
}

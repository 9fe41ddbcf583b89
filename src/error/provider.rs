//! Identity provider and secret generator errors

use super::AwsutilError;

/// Creates a provider call failure, keeping the provider's message verbatim
pub fn call_failed(operation: &'static str, message: impl Into<String>) -> AwsutilError {
    AwsutilError::Provider {
        operation,
        message: message.into(),
    }
}

/// Creates a user not provisioned error
pub fn user_not_provisioned(user: impl Into<String>) -> AwsutilError {
    AwsutilError::UserNotProvisioned { user: user.into() }
}

/// Creates a login profile not found error
pub fn login_profile_not_found(user: impl Into<String>, reason: impl Into<String>) -> AwsutilError {
    AwsutilError::LoginProfileNotFound {
        user: user.into(),
        reason: reason.into(),
    }
}

/// Creates a password generation error
pub fn password_generation_failed(message: impl Into<String>) -> AwsutilError {
    AwsutilError::PasswordGeneration {
        message: message.into(),
    }
}

//! Error types and handling for awsutil
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration validation errors
//! - [`provider`]: Identity provider and secret generator errors
//! - [`interaction`]: Operator prompt errors

pub mod config;
pub mod interaction;
pub mod provider;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for awsutil operations
#[derive(Error, Diagnostic, Debug)]
pub enum AwsutilError {
    // Configuration errors
    #[error("{message}")]
    #[diagnostic(code(awsutil::config::invalid))]
    ConfigInvalid { message: String },

    // Provider errors
    #[error("{operation} failed: {message}")]
    #[diagnostic(code(awsutil::provider::call_failed))]
    Provider {
        operation: &'static str,
        message: String,
    },

    #[error("User {user} has not yet been provisioned")]
    #[diagnostic(
        code(awsutil::provider::user_not_provisioned),
        help("Create the IAM user first, e.g. with 'awsutil bootstrap-govcloud'")
    )]
    UserNotProvisioned { user: String },

    #[error("User {user} has no login profile: {reason}")]
    #[diagnostic(
        code(awsutil::provider::login_profile_not_found),
        help("Check that the user exists and has console access (see 'awsutil bootstrap-user')")
    )]
    LoginProfileNotFound { user: String, reason: String },

    #[error("Failed to generate password: {message}")]
    #[diagnostic(code(awsutil::provider::password_generation_failed))]
    PasswordGeneration { message: String },

    // Interaction errors
    #[error("Failed to read input: {message}")]
    #[diagnostic(code(awsutil::interaction::input_failed))]
    Interaction { message: String },
}

impl From<inquire::InquireError> for AwsutilError {
    fn from(err: inquire::InquireError) -> Self {
        AwsutilError::Interaction {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AwsutilError {
    fn from(err: serde_json::Error) -> Self {
        AwsutilError::ConfigInvalid {
            message: format!("Failed to serialize policy document: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AwsutilError>;

//! Configuration errors

use super::AwsutilError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AwsutilError {
    AwsutilError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates the error reported when a required parameter is empty
pub fn empty(what: &str) -> AwsutilError {
    invalid(format!("The {what} should not be empty"))
}

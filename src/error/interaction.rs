//! Operator interaction errors

use super::AwsutilError;

/// Creates an input failure error
pub fn input_failed(message: impl Into<String>) -> AwsutilError {
    AwsutilError::Interaction {
        message: message.into(),
    }
}

//! Command implementations for awsutil CLI

pub mod bootstrap_govcloud;
pub mod completions;
pub mod helpers;
pub mod password;
pub mod version;

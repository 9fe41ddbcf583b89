//! Inline policy documents
//!
//! Field names follow the IAM policy grammar (`Version`, `Statement`,
//! `Effect`, `Action`, `Resource`) exactly.

use serde::Serialize;

/// Policy language version understood by IAM
pub const POLICY_VERSION: &str = "2012-10-17";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<StatementEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatementEntry {
    pub effect: String,
    pub action: Vec<String>,
    pub resource: String,
}

impl PolicyDocument {
    /// Full access to every action on every resource
    pub fn administrator() -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![StatementEntry {
                effect: "Allow".to_string(),
                action: vec!["*".to_string()],
                resource: "*".to_string(),
            }],
        }
    }

    /// Serialize to the compact JSON form IAM accepts
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

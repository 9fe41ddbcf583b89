//! Test doubles for the workflow seams.
//!
//! [`FakeProvider`] is an in-memory identity provider that records every call
//! in order, [`CannedPrompt`] answers the password prompt with a fixed value
//! and [`FixedGenerator`] hands out a known password.
//!
//! # Usage
//!
//! ```ignore
//! let provider = FakeProvider::new().with_user("bob").failing_on("ListUsers");
//! // ... run a workflow ...
//! assert_eq!(provider.operations(), vec!["GetUser", "CreateLoginProfile"]);
//! ```

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, interaction, provider};
use crate::iam::{GroupSummary, IdentityProvider, UserSummary};
use crate::prompt::SecretPrompt;
use crate::secret::{PasswordPolicy, SecretGenerator};

const ACCOUNT_ID: &str = "123456789012";

/// A provider call with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateGroup {
        group_name: String,
        path: String,
    },
    PutGroupPolicy {
        group_name: String,
        policy_name: String,
        policy_document: String,
    },
    CreateUser {
        user_name: String,
        path: String,
    },
    AddUserToGroup {
        group_name: String,
        user_name: String,
    },
    ListUsers {
        path_prefix: String,
    },
    GetUser {
        user_name: String,
    },
    CreateLoginProfile {
        user_name: String,
        password: String,
    },
    UpdateLoginProfile {
        user_name: String,
        password: String,
    },
    ListAccountAliases,
}

impl Call {
    /// IAM action name of the call
    pub fn operation(&self) -> &'static str {
        match self {
            Call::CreateGroup { .. } => "CreateGroup",
            Call::PutGroupPolicy { .. } => "PutGroupPolicy",
            Call::CreateUser { .. } => "CreateUser",
            Call::AddUserToGroup { .. } => "AddUserToGroup",
            Call::ListUsers { .. } => "ListUsers",
            Call::GetUser { .. } => "GetUser",
            Call::CreateLoginProfile { .. } => "CreateLoginProfile",
            Call::UpdateLoginProfile { .. } => "UpdateLoginProfile",
            Call::ListAccountAliases => "ListAccountAliases",
        }
    }
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    groups: BTreeSet<String>,
    users: Vec<String>,
    login_profiles: BTreeSet<String>,
}

/// In-memory identity provider that records calls
#[derive(Default)]
pub struct FakeProvider {
    state: Mutex<State>,
    aliases: Vec<String>,
    failing: BTreeSet<&'static str>,
}

fn arn(user_name: &str) -> String {
    format!("arn:aws:iam::{ACCOUNT_ID}:user/{user_name}")
}

fn summary(user_name: &str) -> UserSummary {
    UserSummary {
        user_name: user_name.to_string(),
        arn: Some(arn(user_name)),
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(self, group_name: &str) -> Self {
        self.state.lock().unwrap().groups.insert(group_name.to_string());
        self
    }

    pub fn with_user(self, user_name: &str) -> Self {
        self.state.lock().unwrap().users.push(user_name.to_string());
        self
    }

    /// Add a user that already has a console password
    pub fn with_login_profile(self, user_name: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.users.push(user_name.to_string());
            state.login_profiles.insert(user_name.to_string());
        }
        self
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Make every call of `operation` fail after being recorded
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::operation).collect()
    }

    pub fn has_group(&self, group_name: &str) -> bool {
        self.state.lock().unwrap().groups.contains(group_name)
    }

    pub fn has_user(&self, user_name: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .any(|u| u == user_name)
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, State>> {
        let operation = call.operation();
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if self.failing.contains(operation) {
            return Err(provider::call_failed(operation, "injected failure"));
        }
        Ok(state)
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn create_group(&self, group_name: &str, path: &str) -> Result<GroupSummary> {
        let mut state = self.record(Call::CreateGroup {
            group_name: group_name.to_string(),
            path: path.to_string(),
        })?;
        if !state.groups.insert(group_name.to_string()) {
            return Err(provider::call_failed(
                "CreateGroup",
                format!("EntityAlreadyExists: Group with name {group_name} already exists."),
            ));
        }
        Ok(GroupSummary {
            group_name: group_name.to_string(),
            arn: Some(format!("arn:aws:iam::{ACCOUNT_ID}:group/{group_name}")),
        })
    }

    async fn put_group_policy(
        &self,
        group_name: &str,
        policy_name: &str,
        policy_document: &str,
    ) -> Result<()> {
        let state = self.record(Call::PutGroupPolicy {
            group_name: group_name.to_string(),
            policy_name: policy_name.to_string(),
            policy_document: policy_document.to_string(),
        })?;
        if !state.groups.contains(group_name) {
            return Err(provider::call_failed(
                "PutGroupPolicy",
                format!("NoSuchEntity: The group with name {group_name} cannot be found."),
            ));
        }
        Ok(())
    }

    async fn create_user(&self, user_name: &str, path: &str) -> Result<UserSummary> {
        let mut state = self.record(Call::CreateUser {
            user_name: user_name.to_string(),
            path: path.to_string(),
        })?;
        if state.users.iter().any(|u| u == user_name) {
            return Err(provider::call_failed(
                "CreateUser",
                format!("EntityAlreadyExists: User with name {user_name} already exists."),
            ));
        }
        state.users.push(user_name.to_string());
        Ok(summary(user_name))
    }

    async fn add_user_to_group(&self, group_name: &str, user_name: &str) -> Result<()> {
        let state = self.record(Call::AddUserToGroup {
            group_name: group_name.to_string(),
            user_name: user_name.to_string(),
        })?;
        if !state.groups.contains(group_name) || !state.users.iter().any(|u| u == user_name) {
            return Err(provider::call_failed(
                "AddUserToGroup",
                "NoSuchEntity: group or user not found",
            ));
        }
        Ok(())
    }

    async fn list_users(&self, path_prefix: &str) -> Result<Vec<UserSummary>> {
        let state = self.record(Call::ListUsers {
            path_prefix: path_prefix.to_string(),
        })?;
        Ok(state.users.iter().map(|u| summary(u)).collect())
    }

    async fn get_user(&self, user_name: &str) -> Result<Option<UserSummary>> {
        let state = self.record(Call::GetUser {
            user_name: user_name.to_string(),
        })?;
        Ok(state
            .users
            .iter()
            .any(|u| u == user_name)
            .then(|| summary(user_name)))
    }

    async fn create_login_profile(&self, user_name: &str, password: &str) -> Result<()> {
        let mut state = self.record(Call::CreateLoginProfile {
            user_name: user_name.to_string(),
            password: password.to_string(),
        })?;
        if !state.users.iter().any(|u| u == user_name) {
            return Err(provider::call_failed(
                "CreateLoginProfile",
                format!("NoSuchEntity: The user with name {user_name} cannot be found."),
            ));
        }
        if !state.login_profiles.insert(user_name.to_string()) {
            return Err(provider::call_failed(
                "CreateLoginProfile",
                format!("EntityAlreadyExists: Login Profile for user {user_name} already exists."),
            ));
        }
        Ok(())
    }

    async fn update_login_profile(&self, user_name: &str, password: &str) -> Result<()> {
        let state = self.record(Call::UpdateLoginProfile {
            user_name: user_name.to_string(),
            password: password.to_string(),
        })?;
        if !state.login_profiles.contains(user_name) {
            return Err(provider::login_profile_not_found(
                user_name,
                format!("NoSuchEntity: Login Profile for User {user_name} cannot be found."),
            ));
        }
        Ok(())
    }

    async fn list_account_aliases(&self) -> Result<Vec<String>> {
        let _state = self.record(Call::ListAccountAliases)?;
        Ok(self.aliases.clone())
    }
}

/// Answers every prompt with the same secret
pub struct CannedPrompt {
    secret: Option<String>,
    prompted: Mutex<usize>,
}

impl CannedPrompt {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Some(secret.to_string()),
            prompted: Mutex::new(0),
        }
    }

    /// A prompt whose input stream is closed
    pub fn failing() -> Self {
        Self {
            secret: None,
            prompted: Mutex::new(0),
        }
    }

    pub fn times_prompted(&self) -> usize {
        *self.prompted.lock().unwrap()
    }
}

impl SecretPrompt for CannedPrompt {
    fn prompt_secret(&self, _message: &str) -> Result<String> {
        *self.prompted.lock().unwrap() += 1;
        self.secret
            .clone()
            .ok_or_else(|| interaction::input_failed("input stream closed"))
    }
}

/// Generator that always returns the same password
pub struct FixedGenerator {
    password: Option<String>,
}

impl FixedGenerator {
    pub fn new(password: &str) -> Self {
        Self {
            password: Some(password.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { password: None }
    }
}

#[async_trait]
impl SecretGenerator for FixedGenerator {
    async fn generate(&self, _policy: &PasswordPolicy) -> Result<String> {
        self.password
            .clone()
            .ok_or_else(|| provider::password_generation_failed("service unavailable"))
    }
}

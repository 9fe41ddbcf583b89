//! In-process password generator
//!
//! Characters are drawn uniformly from the combined alphabet. When every class
//! is required the whole candidate is discarded and redrawn until it covers
//! all of them, so no position is biased towards a particular class.

use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;

use super::{PasswordPolicy, SYMBOLS, SecretGenerator, covers_all_classes};
use crate::error::{Result, provider};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Upper bound on redraws before giving up
const MAX_ATTEMPTS: usize = 1000;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalGenerator;

impl LocalGenerator {
    fn alphabet() -> Vec<char> {
        UPPERCASE
            .chars()
            .chain(LOWERCASE.chars())
            .chain(DIGITS.chars())
            .chain(SYMBOLS.chars())
            .collect()
    }

    /// Generate a password synchronously with the given random source
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, policy: &PasswordPolicy) -> Result<String> {
        if policy.require_each_included_type && policy.length < 4 {
            return Err(provider::password_generation_failed(format!(
                "length {} is too short to include every character type",
                policy.length
            )));
        }

        let alphabet = Self::alphabet();
        for _ in 0..MAX_ATTEMPTS {
            let candidate: String = (0..policy.length)
                .filter_map(|_| alphabet.choose(rng))
                .collect();
            if !policy.require_each_included_type || covers_all_classes(&candidate) {
                return Ok(candidate);
            }
        }

        Err(provider::password_generation_failed(format!(
            "no password covering every character type after {MAX_ATTEMPTS} attempts"
        )))
    }
}

#[async_trait]
impl SecretGenerator for LocalGenerator {
    async fn generate(&self, policy: &PasswordPolicy) -> Result<String> {
        tracing::debug!(length = policy.length, "generating password locally");
        Self::generate_with(&mut rand::thread_rng(), policy)
    }
}

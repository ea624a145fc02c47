//! Password strength checking and hashing.
//!
//! The seed tool is the only place passwords are set, so the API is shaped
//! around its prompt loop: [ValidatedPassword::new] rejects weak passwords
//! with feedback the tool can print, and [PasswordHash::from_raw_password]
//! produces the bcrypt hash that is stored on the user row.

use std::fmt::{Debug, Display};

use bcrypt::{BcryptError, hash, verify};
use serde::{Deserialize, Serialize};
use zxcvbn::{Score, zxcvbn};

use crate::Error;

/// A password that has passed the strength check but has not been hashed yet.
#[derive(Clone, PartialEq)]
pub struct ValidatedPassword(String);

impl ValidatedPassword {
    /// Check the strength of a candidate password.
    ///
    /// # Errors
    ///
    /// Returns [Error::TooWeak] when the password is too easy to guess. The
    /// error message carries the suggestions to show at the seed prompt.
    pub fn new(raw_password_string: &str) -> Result<Self, Error> {
        let password_analysis = zxcvbn(raw_password_string, &[]);

        match password_analysis.score() {
            Score::Three | Score::Four => Ok(Self(raw_password_string.to_string())),
            _ => {
                let feedback = match password_analysis.feedback() {
                    Some(feedback) => feedback.to_string(),
                    None => "Pick something longer or less predictable.".to_string(),
                };

                Err(Error::TooWeak(feedback))
            }
        }
    }
}

// The wrapped password must not end up in logs or error output.
impl Debug for ValidatedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ValidatedPassword({})", str::repeat("*", 8))
    }
}

/// A salted and hashed password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a validated password with bcrypt at the default cost.
    ///
    /// # Errors
    ///
    /// This function will return an error if the password could not be hashed.
    pub fn new(password: ValidatedPassword) -> Result<Self, Error> {
        Self::with_cost(password, bcrypt::DEFAULT_COST)
    }

    fn with_cost(password: ValidatedPassword, cost: u32) -> Result<Self, Error> {
        match hash(&password.0, cost) {
            Ok(password_hash) => Ok(Self(password_hash)),
            Err(e) => Err(Error::HashingError(e.to_string())),
        }
    }

    /// Create a new `PasswordHash` without any validation.
    ///
    /// The caller should ensure that `raw_password_hash` is a valid password hash.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if an invalid hash is provided it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(raw_password_hash: &str) -> Self {
        Self(raw_password_hash.to_string())
    }

    /// Check the strength of a raw password and hash it in one step.
    ///
    /// This is what the seed tool calls once both of its prompts agree.
    ///
    /// # Errors
    ///
    /// Returns [Error::TooWeak] for a weak password, or [Error::HashingError]
    /// if hashing fails.
    pub fn from_raw_password(raw_password: &str) -> Result<Self, Error> {
        let validated_password = ValidatedPassword::new(raw_password)?;
        PasswordHash::new(validated_password)
    }

    /// Check that `raw_password` matches the stored password.
    pub fn verify(&self, raw_password: &str) -> Result<bool, BcryptError> {
        verify(raw_password, &self.0)
    }
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

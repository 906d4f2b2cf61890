//! Credential verification.
//!
//! The session store never inspects credentials itself; it delegates to a
//! [`CredentialVerifier`] so a real backend can be substituted without
//! touching the store's shape. The bundled [`DemoVerifier`] implements the
//! original demo behavior: every login succeeds with a fabricated profile.
//! This is explicitly not a security boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use thiserror::Error;

use adstore_core::{Email, UserId};

use crate::models::User;

/// Errors that can occur during credential verification.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email/password pair was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The verification backend failed.
    #[error("verification backend error: {0}")]
    Backend(String),
}

/// Pluggable credential verification capability.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify an email/password pair, returning the account's user record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair is rejected, or
    /// `AuthError::Backend` if verification itself fails.
    async fn verify(&self, email: &Email, password: &SecretString) -> Result<User, AuthError>;
}

/// Demo verifier: accepts any credentials and fabricates the canned profile.
#[derive(Debug, Default)]
pub struct DemoVerifier;

impl DemoVerifier {
    /// Registration timestamp of the fabricated demo account.
    const DEMO_REGISTERED_AT: &'static str = "2024-01-15T10:00:00Z";

    /// Create a new demo verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialVerifier for DemoVerifier {
    async fn verify(&self, email: &Email, _password: &SecretString) -> Result<User, AuthError> {
        let registered_at: DateTime<Utc> = Self::DEMO_REGISTERED_AT
            .parse()
            .map_err(|e| AuthError::Backend(format!("bad demo timestamp: {e}")))?;

        Ok(User {
            id: UserId::new("1"),
            name: "Иван Петров".to_owned(),
            email: email.clone(),
            company: Some("ООО Инновации".to_owned()),
            phone: Some("+7 (999) 123-45-67".to_owned()),
            registered_at,
        })
    }
}

//! User domain types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use adstore_core::{Email, UserId};

/// A storefront customer account.
///
/// Exactly one user is live at a time, owned by the session store. The record
/// is fabricated on login (demo verifier) or built from registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Company, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Contact phone, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// When the account was registered.
    pub registered_at: DateTime<Utc>,
}

/// Input for account registration.
///
/// Password strength and confirmation matching are checked by the calling
/// form, not here; the password itself is never persisted.
#[derive(Debug)]
pub struct RegisterData {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Chosen password (unused by the demo verifier).
    pub password: SecretString,
    /// Company, if provided.
    pub company: Option<String>,
    /// Contact phone, if provided.
    pub phone: Option<String>,
}

/// Partial profile update; only `Some` fields are applied.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<Email>,
    /// New company.
    pub company: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// Merge this update into an existing user record.
    pub(crate) fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(company) = self.company {
            user.company = Some(company);
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
    }
}

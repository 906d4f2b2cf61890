//! Email address type.
//!
//! Validation here is deliberately shallow: the address must look like
//! `local@domain` and fit the RFC 5321 length limit. Anything stricter
//! belongs to whatever backend eventually verifies the account, not to a
//! demo storefront that never sends mail.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string exceeds the length limit.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// No @ symbol anywhere in the input.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// Nothing before the @.
    #[error("email local part cannot be empty")]
    EmptyLocalPart,
    /// Nothing after the @.
    #[error("email domain cannot be empty")]
    EmptyDomain,
}

/// A structurally valid email address.
///
/// ```
/// use adstore_core::Email;
///
/// let email = Email::parse("ivan@innovatsii.ru")?;
/// assert_eq!(email.as_str(), "ivan@innovatsii.ru");
///
/// assert!(Email::parse("not-an-address").is_err());
/// assert!(Email::parse("@nobody.ru").is_err());
/// # Ok::<(), adstore_core::EmailError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns the [`EmailError`] naming the first structural problem found:
    /// empty input, over-length input, a missing @, or an empty local/domain
    /// part.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let at_pos = s.find('@').ok_or(EmailError::MissingAtSymbol)?;

        if at_pos == 0 {
            return Err(EmailError::EmptyLocalPart);
        }

        if at_pos == s.len() - 1 {
            return Err(EmailError::EmptyDomain);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        for candidate in [
            "ivan@innovatsii.ru",
            "anna.petrova@example.com",
            "user+adstore@mail.ru",
            "a@b.c",
        ] {
            assert!(Email::parse(candidate).is_ok(), "rejected {candidate}");
        }
    }

    #[test]
    fn test_rejects_structurally_broken_input() {
        assert!(matches!(Email::parse(""), Err(EmailError::Empty)));
        assert!(matches!(
            Email::parse("ivan.innovatsii.ru"),
            Err(EmailError::MissingAtSymbol)
        ));
        assert!(matches!(
            Email::parse("@innovatsii.ru"),
            Err(EmailError::EmptyLocalPart)
        ));
        assert!(matches!(Email::parse("ivan@"), Err(EmailError::EmptyDomain)));
    }

    #[test]
    fn test_rejects_over_length_input() {
        let long = format!("{}@mail.ru", "i".repeat(Email::MAX_LENGTH));
        assert!(matches!(
            Email::parse(&long),
            Err(EmailError::TooLong { max: 254 })
        ));
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        // Exactly MAX_LENGTH characters still parses
        let local = "i".repeat(Email::MAX_LENGTH - "@mail.ru".len());
        let exact = format!("{local}@mail.ru");
        assert_eq!(exact.len(), Email::MAX_LENGTH);
        assert!(Email::parse(&exact).is_ok());
    }

    #[test]
    fn test_display_and_from_str() {
        let email: Email = "ivan@innovatsii.ru".parse().unwrap();
        assert_eq!(email.to_string(), "ivan@innovatsii.ru");
        assert_eq!(email.as_ref(), "ivan@innovatsii.ru");
    }

    #[test]
    fn test_serde_transparent() {
        let email = Email::parse("ivan@innovatsii.ru").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"ivan@innovatsii.ru\"");

        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }
}

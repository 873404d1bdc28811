use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered account. The password is held only as an Argon2id
/// hash; exposed operations never mutate or delete a user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. The email doubles
/// as the login identifier and is unique per user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque bearer credential for one authenticated session.
///
/// Issued on login and registration, bound to exactly one user. Valid until
/// revoked by logout; there is no expiry. A user may hold several live tokens
/// at once (one per session).
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub id: Uuid,
    pub user_id: UserId,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

impl AccessToken {
    /// Bind a freshly generated token value to its owning user.
    pub fn new(user_id: UserId, token: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token,
            created_at: Utc::now(),
        }
    }
}

/// Command to register a new user.
///
/// Fields arrive raw from the HTTP boundary; the auth service validates them
/// as a set so every violation is reported at once, field by field.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_accepts_valid_email() {
        let email = EmailAddress::new("pedromoura@mail.com".to_string());
        assert!(email.is_ok());
        assert_eq!(email.unwrap().as_str(), "pedromoura@mail.com");
    }

    #[test]
    fn test_email_address_rejects_invalid_email() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("missing@tld@".to_string()).is_err());
    }

    #[test]
    fn test_access_token_binds_user() {
        let user_id = UserId::new();
        let token = AccessToken::new(user_id, "abc123".to_string());

        assert_eq!(token.user_id, user_id);
        assert_eq!(token.token, "abc123");
    }
}

use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for the authentication flow.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate by email and password, issuing a new session token.
    ///
    /// # Returns
    /// Freshly persisted access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (identical in
    ///   both cases)
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Register a new user and issue a session token (auto-login).
    ///
    /// # Errors
    /// * `Validation` - One or more fields rejected; nothing persisted
    /// * `EmailAlreadyExists` - Uniqueness race at insert time
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<AccessToken, AuthError>;

    /// Revoke exactly the invoking session token.
    ///
    /// Other tokens held by the same user stay valid.
    ///
    /// # Errors
    /// * `InvalidToken` - Token was already revoked or never existed
    /// * `DatabaseError` - Database operation failed
    async fn logout(&self, token: &str) -> Result<(), AuthError>;

    /// Resolve a bearer token to its owning user.
    ///
    /// # Errors
    /// * `InvalidToken` - Token absent, revoked, or unknown
    /// * `DatabaseError` - Database operation failed
    async fn authenticated_user(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for user records (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// Persistence operations for issued session tokens (the token store).
#[async_trait]
pub trait AccessTokenRepository: Send + Sync + 'static {
    /// Persist a newly issued token.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, token: AccessToken) -> Result<AccessToken, AuthError>;

    /// Look up a token by its opaque value.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, AuthError>;

    /// Delete a token by its opaque value.
    ///
    /// # Returns
    /// True when a token was deleted, false when none matched
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_token(&self, token: &str) -> Result<bool, AuthError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::AuthError;
use crate::domain::user::errors::ValidationErrors;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AccessTokenRepository;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

const MIN_PASSWORD_LENGTH: usize = 6;

const NAME_REQUIRED: &str = "The name field is required.";
const EMAIL_REQUIRED: &str = "The email field is required.";
const EMAIL_INVALID: &str = "The email field must be a valid email address.";
const EMAIL_TAKEN: &str = "The email has already been taken.";
const PASSWORD_REQUIRED: &str = "The password field is required.";
const PASSWORD_TOO_SHORT: &str = "The password field must be at least 6 characters.";

/// Domain service implementing the authentication flow.
///
/// Coordinates the credential store and the token store. Sessions are opaque
/// bearer tokens: issued on login/registration, valid until revoked, resolved
/// back to a user on every authenticated request.
pub struct AuthService<UR, TR>
where
    UR: UserRepository,
    TR: AccessTokenRepository,
{
    users: Arc<UR>,
    tokens: Arc<TR>,
    password_hasher: auth::PasswordHasher,
    token_generator: auth::TokenGenerator,
}

impl<UR, TR> AuthService<UR, TR>
where
    UR: UserRepository,
    TR: AccessTokenRepository,
{
    pub fn new(users: Arc<UR>, tokens: Arc<TR>) -> Self {
        Self {
            users,
            tokens,
            password_hasher: auth::PasswordHasher::new(),
            token_generator: auth::TokenGenerator::new(),
        }
    }

    async fn issue_token(&self, user_id: UserId) -> Result<AccessToken, AuthError> {
        let token = AccessToken::new(user_id, self.token_generator.generate());
        self.tokens.insert(token).await
    }

    async fn validate_registration(
        &self,
        command: &RegisterUserCommand,
    ) -> Result<EmailAddress, AuthError> {
        let mut errors = ValidationErrors::new();
        let mut email = None;

        if command.name.trim().is_empty() {
            errors.add("name", NAME_REQUIRED);
        }

        if command.email.trim().is_empty() {
            errors.add("email", EMAIL_REQUIRED);
        } else {
            match EmailAddress::new(command.email.clone()) {
                Ok(parsed) => {
                    // Uniqueness pre-check; the unique index still backstops
                    // concurrent registration.
                    if self.users.find_by_email(parsed.as_str()).await?.is_some() {
                        errors.add("email", EMAIL_TAKEN);
                    } else {
                        email = Some(parsed);
                    }
                }
                Err(_) => errors.add("email", EMAIL_INVALID),
            }
        }

        if command.password.is_empty() {
            errors.add("password", PASSWORD_REQUIRED);
        } else if command.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add("password", PASSWORD_TOO_SHORT);
        }

        match email {
            Some(email) if errors.is_empty() => Ok(email),
            _ => Err(AuthError::Validation(errors)),
        }
    }
}

#[async_trait]
impl<UR, TR> AuthServicePort for AuthService<UR, TR>
where
    UR: UserRepository,
    TR: AccessTokenRepository,
{
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let is_valid = self.password_hasher.verify(password, &user.password_hash)?;
        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(user.id).await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    async fn register(&self, command: RegisterUserCommand) -> Result<AccessToken, AuthError> {
        let email = self.validate_registration(&command).await?;

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.users.create(user).await?;
        let token = self.issue_token(created.id).await?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(token)
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        // Revokes just this session; sibling tokens for the same user stay
        // live. A repeated logout finds nothing to delete and fails.
        let deleted = self.tokens.delete_by_token(token).await?;
        if !deleted {
            return Err(AuthError::InvalidToken);
        }

        Ok(())
    }

    async fn authenticated_user(&self, token: &str) -> Result<User, AuthError> {
        let access_token = self
            .tokens
            .find_by_token(token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        self.users
            .find_by_id(&access_token.user_id)
            .await?
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, AuthError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
        }
    }

    mock! {
        pub TestAccessTokenRepository {}

        #[async_trait]
        impl AccessTokenRepository for TestAccessTokenRepository {
            async fn insert(&self, token: AccessToken) -> Result<AccessToken, AuthError>;
            async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, AuthError>;
            async fn delete_by_token(&self, token: &str) -> Result<bool, AuthError>;
        }
    }

    fn existing_user(email: &str, password: &str) -> User {
        let hasher = auth::PasswordHasher::new();
        User {
            id: UserId::new(),
            name: "Pedro Moura".to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: hasher.hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let user = existing_user("pedromoura@mail.com", "123456");
        let user_id = user.id;

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("pedromoura@mail.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let mut tokens = MockTestAccessTokenRepository::new();
        tokens
            .expect_insert()
            .withf(move |token| token.user_id == user_id && token.token.len() == 40)
            .times(1)
            .returning(|token| Ok(token));

        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let token = service.login("pedromoura@mail.com", "123456").await.unwrap();
        assert!(!token.token.is_empty());
        assert_eq!(token.user_id, user_id);
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_are_identical() {
        let user = existing_user("pedromoura@mail.com", "123456");

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("pedromoura@mail.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        users
            .expect_find_by_email()
            .with(eq("nobody@mail.com"))
            .times(1)
            .returning(|_| Ok(None));

        let mut tokens = MockTestAccessTokenRepository::new();
        tokens.expect_insert().times(0);

        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let wrong_password = service
            .login("pedromoura@mail.com", "wrong")
            .await
            .unwrap_err();
        let unknown_email = service.login("nobody@mail.com", "123456").await.unwrap_err();

        // Enumeration resistance: both failure modes surface the same way.
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_success_creates_user_and_token() {
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("pedromoura@mail.com"))
            .times(1)
            .returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|user| {
                user.name == "Pedro Moura"
                    && user.email.as_str() == "pedromoura@mail.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let mut tokens = MockTestAccessTokenRepository::new();
        tokens.expect_insert().times(1).returning(|token| Ok(token));

        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let command = RegisterUserCommand::new(
            "Pedro Moura".to_string(),
            "pedromoura@mail.com".to_string(),
            "123456".to_string(),
        );

        let token = service.register(command).await.unwrap();
        assert!(!token.token.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let users = MockTestUserRepository::new();
        let tokens = MockTestAccessTokenRepository::new();
        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let command = RegisterUserCommand::new(String::new(), String::new(), String::new());

        let err = service.register(command).await.unwrap_err();
        let AuthError::Validation(errors) = err else {
            panic!("expected validation error");
        };

        assert_eq!(
            errors.messages_for("name").unwrap(),
            ["The name field is required."]
        );
        assert_eq!(
            errors.messages_for("email").unwrap(),
            ["The email field is required."]
        );
        assert_eq!(
            errors.messages_for("password").unwrap(),
            ["The password field is required."]
        );
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_email_and_short_password() {
        let users = MockTestUserRepository::new();
        let tokens = MockTestAccessTokenRepository::new();
        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let command = RegisterUserCommand::new(
            "Pedro Moura".to_string(),
            "not-an-email".to_string(),
            "12345".to_string(),
        );

        let err = service.register(command).await.unwrap_err();
        let AuthError::Validation(errors) = err else {
            panic!("expected validation error");
        };

        assert_eq!(
            errors.messages_for("email").unwrap(),
            ["The email field must be a valid email address."]
        );
        assert_eq!(
            errors.messages_for("password").unwrap(),
            ["The password field must be at least 6 characters."]
        );
    }

    #[tokio::test]
    async fn test_register_rejects_taken_email_without_persisting() {
        let existing = existing_user("pedromoura@mail.com", "123456");

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("pedromoura@mail.com"))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        users.expect_create().times(0);

        let mut tokens = MockTestAccessTokenRepository::new();
        tokens.expect_insert().times(0);

        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let command = RegisterUserCommand::new(
            "Pedro Moura".to_string(),
            "pedromoura@mail.com".to_string(),
            "123456".to_string(),
        );

        let err = service.register(command).await.unwrap_err();
        let AuthError::Validation(errors) = err else {
            panic!("expected validation error");
        };

        assert_eq!(
            errors.messages_for("email").unwrap(),
            ["The email has already been taken."]
        );
    }

    #[tokio::test]
    async fn test_logout_deletes_only_invoking_token() {
        let mut tokens = MockTestAccessTokenRepository::new();
        tokens
            .expect_delete_by_token()
            .with(eq("session-one"))
            .times(1)
            .returning(|_| Ok(true));

        let users = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        assert!(service.logout("session-one").await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_with_revoked_token_fails() {
        let mut tokens = MockTestAccessTokenRepository::new();
        tokens
            .expect_delete_by_token()
            .with(eq("already-gone"))
            .times(1)
            .returning(|_| Ok(false));

        let users = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let err = service.logout("already-gone").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_authenticated_user_resolves_owner() {
        let user = existing_user("pedromoura@mail.com", "123456");
        let user_id = user.id;
        let access_token = AccessToken::new(user_id, "live-token".to_string());

        let mut tokens = MockTestAccessTokenRepository::new();
        tokens
            .expect_find_by_token()
            .with(eq("live-token"))
            .times(1)
            .returning(move |_| Ok(Some(access_token.clone())));

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(user_id))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let resolved = service.authenticated_user("live-token").await.unwrap();
        assert_eq!(resolved.id, user_id);
    }

    #[tokio::test]
    async fn test_authenticated_user_rejects_unknown_token() {
        let mut tokens = MockTestAccessTokenRepository::new();
        tokens
            .expect_find_by_token()
            .with(eq("revoked"))
            .times(1)
            .returning(|_| Ok(None));

        let users = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(users), Arc::new(tokens));

        let err = service.authenticated_user("revoked").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}

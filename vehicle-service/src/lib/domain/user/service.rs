use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for registration, login and user lookup.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

/// Translate a uniqueness violation reported by the store into the
/// registration conflict the caller sees.
///
/// The pre-insert lookups cannot see a concurrent registration that commits
/// between the check and the insert; the store constraint catches it and this
/// mapping names the field.
pub fn conflict_from_constraint(constraint: Option<&str>, user: &User) -> UserError {
    match constraint {
        Some(name) if name.contains("email") => UserError::EmailTaken(user.email.to_string()),
        Some(name) if name.contains("username") => {
            UserError::UsernameTaken(user.username.to_string())
        }
        other => UserError::RegistrationConflict(other.map(str::to_string)),
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            tracing::info!(username = %command.username, "Registration rejected: username taken");
            return Err(UserError::UsernameTaken(command.username.to_string()));
        }

        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            tracing::info!(email = %command.email, "Registration rejected: email registered");
            return Err(UserError::EmailTaken(command.email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        match self.repository.create(user.clone()).await {
            Ok(created_user) => {
                tracing::info!(
                    user_id = %created_user.id,
                    username = %created_user.username,
                    "User registered"
                );
                Ok(created_user)
            }
            Err(UserError::Duplicate { constraint }) => {
                let err = conflict_from_constraint(constraint.as_deref(), &user);
                tracing::warn!(
                    constraint = ?constraint,
                    error = %err,
                    "Registration lost a uniqueness race"
                );
                Err(err)
            }
            Err(e) => Err(e),
        }
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AccessToken, UserError> {
        // Unknown users skip the password hash, so this path answers faster
        // than a wrong password. The messages are identical.
        let Ok(username) = Username::new(username.to_string()) else {
            tracing::debug!("Login rejected: username fails validation");
            return Err(UserError::InvalidCredentials);
        };

        let Some(user) = self.repository.find_by_username(&username).await? else {
            tracing::debug!(username = %username, "Login rejected: unknown username");
            return Err(UserError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &user.id.to_string())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(username = %username, "Login rejected: wrong password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => UserError::Token(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Access token issued");

        Ok(AccessToken::bearer(result.access_token))
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Password;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET, "HS256", 60).unwrap())
    }

    fn command(username: &str, email: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand::new(
            Username::new(username.to_string()).unwrap(),
            EmailAddress::new(email.to_string()).unwrap(),
            Password::new(password.to_string()).unwrap(),
        )
    }

    fn stored_user(username: &str, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{}@x.com", username)).unwrap(),
            password_hash: authenticator().hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.email.as_str() == "alice@x.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(Ok);

        let authenticator = authenticator();
        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let user = service
            .register_user(command("alice", "alice@x.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(user.username.as_str(), "alice");
        assert_ne!(user.password_hash, "secret1");
        assert!(authenticator.verify_password("secret1", &user.password_hash));
    }

    #[tokio::test]
    async fn test_register_user_username_taken() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "secret1"))));
        repository.expect_find_by_email().times(0);
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let err = service
            .register_user(command("alice", "other@x.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::UsernameTaken(_)));
        assert_eq!(err.to_string(), "Username already taken");
    }

    #[tokio::test]
    async fn test_register_user_email_taken() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "secret1"))));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let err = service
            .register_user(command("bob", "alice@x.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_register_user_race_on_username_constraint() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .returning(|_| Ok(None));
        repository.expect_find_by_email().returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|_| {
            Err(UserError::Duplicate {
                constraint: Some("users_username_key".to_string()),
            })
        });

        let service = UserService::new(Arc::new(repository), authenticator());

        let err = service
            .register_user(command("alice", "alice@x.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(err, UserError::UsernameTaken("alice".to_string()));
    }

    #[tokio::test]
    async fn test_register_user_race_on_email_constraint() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .returning(|_| Ok(None));
        repository.expect_find_by_email().returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|_| {
            Err(UserError::Duplicate {
                constraint: Some("users_email_key".to_string()),
            })
        });

        let service = UserService::new(Arc::new(repository), authenticator());

        let err = service
            .register_user(command("alice", "alice@x.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(err, UserError::EmailTaken("alice@x.com".to_string()));
    }

    #[tokio::test]
    async fn test_register_user_race_on_unknown_constraint() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .returning(|_| Ok(None));
        repository.expect_find_by_email().returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(UserError::Duplicate { constraint: None }));

        let service = UserService::new(Arc::new(repository), authenticator());

        let err = service
            .register_user(command("alice", "alice@x.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "User registration failed due to constraint violation"
        );
    }

    #[tokio::test]
    async fn test_register_user_database_error_passes_through() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .returning(|_| Err(UserError::DatabaseError("connection reset".to_string())));

        let service = UserService::new(Arc::new(repository), authenticator());

        let err = service
            .register_user(command("alice", "alice@x.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_authenticate_success_token_resolves_to_user() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "secret1");
        let user_id = user.id;

        repository
            .expect_find_by_username()
            .withf(|u| u.as_str() == "alice")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let authenticator = authenticator();
        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let token = service.authenticate("alice", "secret1").await.unwrap();

        assert_eq!(token.token_type, "bearer");
        let claims = authenticator.validate_token(&token.access_token).unwrap();
        assert_eq!(claims.subject(), Some(user_id.to_string().as_str()));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_and_unknown_user_look_alike() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "secret1");

        repository
            .expect_find_by_username()
            .returning(move |username| {
                if username.as_str() == "alice" {
                    Ok(Some(user.clone()))
                } else {
                    Ok(None)
                }
            });

        let service = UserService::new(Arc::new(repository), authenticator());

        let wrong_password = service.authenticate("alice", "wrong").await.unwrap_err();
        let unknown_user = service.authenticate("mallory", "secret1").await.unwrap_err();
        let invalid_name = service.authenticate("x", "secret1").await.unwrap_err();

        assert_eq!(wrong_password, UserError::InvalidCredentials);
        assert_eq!(unknown_user, UserError::InvalidCredentials);
        assert_eq!(invalid_name, UserError::InvalidCredentials);
        assert_eq!(wrong_password.to_string(), "Invalid credentials");
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let err = service.get_user(&UserId::new()).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(_)));
    }

    #[test]
    fn test_conflict_from_constraint() {
        let user = stored_user("alice", "secret1");

        assert_eq!(
            conflict_from_constraint(Some("users_email_key"), &user),
            UserError::EmailTaken("alice@x.com".to_string())
        );
        assert_eq!(
            conflict_from_constraint(Some("ix_users_username"), &user),
            UserError::UsernameTaken("alice".to_string())
        );
        assert_eq!(
            conflict_from_constraint(Some("users_pkey"), &user),
            UserError::RegistrationConflict(Some("users_pkey".to_string()))
        );
    }
}

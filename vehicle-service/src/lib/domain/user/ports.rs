use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Validated username, email and password
    ///
    /// # Returns
    /// Persisted user entity
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `EmailTaken` - Email is already registered
    /// * `RegistrationConflict` - Insert hit another uniqueness constraint
    /// * `Hashing` / `DatabaseError` - Infrastructure failure
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Check credentials and mint a bearer token for the user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Token` / `DatabaseError` - Infrastructure failure
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<AccessToken, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence operations for the user directory.
///
/// Lookups report absence as `Ok(None)`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `Duplicate` - A uniqueness constraint rejected the insert
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}

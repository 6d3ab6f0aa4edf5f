use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl_minutes: i64,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub const MIN_TTL_MINUTES: i64 = 1;
    pub const MAX_TTL_MINUTES: i64 = 10080;
    pub const DEFAULT_TTL_MINUTES: i64 = 60;

    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing (at least 32 bytes)
    /// * `algorithm` - HMAC algorithm name (`HS256`, `HS384`, `HS512`)
    /// * `token_ttl_minutes` - Default token lifetime, 1 to 10080 minutes
    ///
    /// # Errors
    /// * `WeakSecret` / `UnsupportedAlgorithm` - Rejected signing setup
    /// * `InvalidTtl` - Lifetime outside the allowed range
    pub fn new(
        jwt_secret: &[u8],
        algorithm: &str,
        token_ttl_minutes: i64,
    ) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret, algorithm)?,
            token_ttl_minutes: Self::checked_ttl(token_ttl_minutes)?,
        })
    }

    pub fn token_ttl_minutes(&self) -> i64 {
        self.token_ttl_minutes
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token for `subject` with the configured lifetime.
    pub fn issue_token(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_token_with_ttl(subject, self.token_ttl_minutes)
    }

    /// Issue a token for `subject` expiring `ttl_minutes` from now.
    ///
    /// # Errors
    /// * `InvalidTtl` - Lifetime outside 1 to 10080 minutes
    /// * `EncodingFailed` - Signing failed
    pub fn issue_token_with_ttl(&self, subject: &str, ttl_minutes: i64) -> Result<String, JwtError> {
        let ttl_minutes = Self::checked_ttl(ttl_minutes)?;
        self.jwt_handler
            .encode(&Claims::for_subject(subject, ttl_minutes))
    }

    /// Validate a token and return its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    fn checked_ttl(ttl_minutes: i64) -> Result<i64, JwtError> {
        if (Self::MIN_TTL_MINUTES..=Self::MAX_TTL_MINUTES).contains(&ttl_minutes) {
            Ok(ttl_minutes)
        } else {
            Err(JwtError::InvalidTtl {
                min: Self::MIN_TTL_MINUTES,
                max: Self::MAX_TTL_MINUTES,
                actual: ttl_minutes,
            })
        }
    }
}

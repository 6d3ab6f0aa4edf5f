use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },

    #[error("Username must be at most {max} characters long, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email must be at most {max} characters long, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("{0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    InvalidPassword(#[from] PasswordError),

    // Domain-level errors
    #[error("User not found")]
    NotFound(String),

    #[error("Username already taken")]
    UsernameTaken(String),

    #[error("Email already registered")]
    EmailTaken(String),

    #[error("User registration failed due to constraint violation")]
    RegistrationConflict(Option<String>),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Raised by the store when an insert violates a uniqueness constraint
    #[error("Duplicate record violates constraint {constraint:?}")]
    Duplicate { constraint: Option<String> },

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

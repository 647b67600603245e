//! Error types for authentication, product storage and form validation.

use thiserror::Error;

/// Errors from the credential store.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with a username that already exists
    #[error("Username already taken")]
    DuplicateUsername,
    /// Login lookup miss or hash mismatch; the two are indistinguishable
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// Password hashing infrastructure failed
    #[error("Password hashing failed: {0}")]
    Hash(String),
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// The database could not be opened at startup
    #[error("Database unavailable")]
    Unavailable,
}

/// Errors from product storage and report generation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Constraint violation or I/O fault on a database statement
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// Report serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Report file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The database could not be opened at startup
    #[error("Database unavailable")]
    Unavailable,
}

/// Recoverable form-input errors, surfaced through the same dialog path
/// as store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be a whole number")]
    InvalidInteger { field: &'static str },
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(AuthError::DuplicateUsername.to_string(), "Username already taken");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(StoreError::Unavailable.to_string(), "Database unavailable");
        assert_eq!(
            ValidationError::Empty { field: "Name" }.to_string(),
            "Name must not be empty"
        );
        assert_eq!(
            ValidationError::InvalidInteger { field: "Quantity" }.to_string(),
            "Quantity must be a whole number"
        );
    }
}

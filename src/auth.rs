//! Credential store: user registration and login verification.
//!
//! Passwords are hashed with Argon2id into PHC strings, so the per-call
//! random salt travels inside the stored value. Verification never tells
//! the caller whether the username was unknown or the password wrong; an
//! unknown username still pays for one hash verification so the two paths
//! cost the same.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rusqlite::{params, Connection, OptionalExtension};

use crate::db;
use crate::error::AuthError;
use crate::models::User;

/// A well-formed Argon2id hash that matches no password. Verified against
/// when a username does not exist, keeping the miss path as slow as a
/// genuine mismatch.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Persists user identities and verifies login attempts.
///
/// Owns one SQLite connection for its whole lifetime; each operation is a
/// single statement.
pub struct CredentialStore {
    conn: Connection,
}

impl CredentialStore {
    /// Opens the store against the default database location.
    pub fn open() -> Result<Self, AuthError> {
        Ok(Self::with_connection(db::open_default()?))
    }

    /// Wraps an already-open connection. The schema must exist.
    pub fn with_connection(conn: Connection) -> Self {
        CredentialStore { conn }
    }

    /// Registers a new user with a freshly salted password hash.
    ///
    /// Fails with [`AuthError::DuplicateUsername`] when the username is
    /// already taken; the existing row is left untouched.
    pub fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let hash = hash_password(password)?;

        match self.conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, hash],
        ) {
            Ok(_) => {
                log::info!("Registered user '{username}'");
                Ok(())
            }
            Err(e) if e.sqlite_error_code() == Some(rusqlite::ErrorCode::ConstraintViolation) => {
                log::debug!("Registration rejected, username '{username}' exists");
                Err(AuthError::DuplicateUsername)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Checks a login attempt. `Ok(false)` covers both an unknown username
    /// and a wrong password.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        match self.lookup(username)? {
            Some(user) => verify_password(password, &user.password_hash),
            None => {
                let _ = verify_password(password, DUMMY_HASH);
                Ok(false)
            }
        }
    }

    fn lookup(&self, username: &str) -> Result<Option<User>, AuthError> {
        let user = self
            .conn
            .query_row(
                "SELECT id, username, password FROM users WHERE username = ?1",
                params![username],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }
}

/// Hashes a password with Argon2id and a random 16-byte salt, producing a
/// PHC string (`$argon2id$v=19$...`).
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a password against a PHC hash string. The salt and parameters
/// are read back out of the hash itself.
fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hash(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hash(e.to_string())),
    }
}

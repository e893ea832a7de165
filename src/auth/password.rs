//! Argon2id password hashing and verification.
//!
//! Passwords are stored as PHC strings (salt and parameters embedded), so
//! verification needs no extra state. A mismatch is a normal `Ok(false)`;
//! only malformed digests or hasher failures are errors.

use crate::error::AppError;
use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

/// Hash a plaintext password into a PHC digest string.
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|e| AppError::Internal(format!("Password hash failed: {}", e)))
}

/// Verify a plaintext password against a stored PHC digest.
///
/// # Returns
/// * `Ok(true)` if the password matches
/// * `Ok(false)` if it does not
/// * `Err(AppError)` if the digest is malformed
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(digest)
        .map_err(|e| AppError::Internal(format!("Invalid password digest: {}", e)))?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!("Password verify failed: {}", e))),
    }
}

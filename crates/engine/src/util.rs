//! Internal helpers.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::{EngineError, ResultEngine};

/// Hash a clear-text password with Argon2id and a fresh random salt.
pub(crate) fn hash_password(clear: &str) -> ResultEngine<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(clear.as_bytes(), &salt)
        .map_err(|err| EngineError::PasswordHash(err.to_string()))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_argon2id() {
        let first = hash_password("password").unwrap();
        let second = hash_password("password").unwrap();

        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, "password");
        // A fresh salt per call means two hashes of the same input differ.
        assert_ne!(first, second);
    }
}

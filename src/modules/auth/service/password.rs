use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

#[derive(Debug)]
pub enum Error {
    HashingFailed,
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::HashingFailed
        })
}

pub fn verify(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(err) => {
            tracing::warn!("Stored password hash could not be parsed: {}", err);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hashed = hash("burger123").unwrap();

        assert_ne!(hashed, "burger123");
        assert!(verify("burger123", &hashed));
        assert!(!verify("burger124", &hashed));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify("burger123", "not-a-phc-string"));
    }
}

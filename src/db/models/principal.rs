//! Principal Model
//!
//! The single administrative identity. Created by the seed step only;
//! no public endpoint creates, updates or deletes principals.

use serde::{Deserialize, Serialize};

/// Normalize a username for storage and lookup (lowercased, trimmed)
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Principal {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl Principal {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2 with a fresh random salt
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_username() {
        assert_eq!(normalize_username("  Admin@Example.COM "), "admin@example.com");
    }

    #[test]
    fn password_round_trip() {
        let hash = Principal::hash_password("secret123").unwrap();
        let principal = Principal {
            id: "p1".into(),
            username: "admin@example.com".into(),
            password_hash: hash,
        };
        assert!(principal.verify_password("secret123").unwrap());
        assert!(!principal.verify_password("wrong").unwrap());
    }
}

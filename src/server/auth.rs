//! Credential checks for joining players.

use std::collections::HashMap;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use parking_lot::RwLock;
use tracing::warn;

/// Checks player credentials during login.
pub trait Authenticator: Send + Sync {
    /// Returns whether `secret` is valid for `username`.
    fn verify(&self, username: &str, secret: &str) -> bool;

    /// Creates or replaces an account.
    fn register(&self, username: &str, email: &str, secret: &str);
}

/// Accepts every login. Registration is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAuthenticator;

impl Authenticator for OpenAuthenticator {
    fn verify(&self, _username: &str, _secret: &str) -> bool {
        true
    }

    fn register(&self, _username: &str, _email: &str, _secret: &str) {}
}

#[derive(Debug, Clone)]
struct Account {
    email: String,
    /// Argon2id hash in PHC string format, salted per account.
    secret: String,
}

/// Keeps accounts in memory with salted Argon2 hashes of their secrets.
///
/// ```
/// use watten::server::{Authenticator, MemoryAuthenticator};
///
/// let accounts = MemoryAuthenticator::new();
/// accounts.register("Marcel", "marcel@example.com", "toast");
/// assert!(accounts.verify("Marcel", "toast"));
/// assert!(!accounts.verify("Marcel", "bread"));
/// assert!(!accounts.verify("Thomas", "toast"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryAuthenticator {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAuthenticator {
    /// Creates an authenticator without accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the email registered for `username`.
    #[must_use]
    pub fn email(&self, username: &str) -> Option<String> {
        self.accounts
            .read()
            .get(username)
            .map(|account| account.email.clone())
    }

    /// Returns the number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    /// Returns whether no account is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

impl Authenticator for MemoryAuthenticator {
    fn verify(&self, username: &str, secret: &str) -> bool {
        self.accounts
            .read()
            .get(username)
            .is_some_and(|account| {
                PasswordHash::new(&account.secret).is_ok_and(|hash| {
                    Argon2::default()
                        .verify_password(secret.as_bytes(), &hash)
                        .is_ok()
                })
            })
    }

    fn register(&self, username: &str, email: &str, secret: &str) {
        let hashed = match hash_secret(secret) {
            Ok(hashed) => hashed,
            Err(err) => {
                warn!(user = %username, error = %err, "failed to hash secret, account not registered");
                return;
            }
        };
        self.accounts.write().insert(
            username.to_owned(),
            Account {
                email: email.to_owned(),
                secret: hashed,
            },
        );
    }
}

fn hash_secret(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())?;
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_salted_per_account() {
        let accounts = MemoryAuthenticator::new();
        accounts.register("Marcel", "", "toast");
        accounts.register("Thomas", "", "toast");

        let stored = accounts.accounts.read();
        let marcel = &stored["Marcel"].secret;
        let thomas = &stored["Thomas"].secret;
        assert!(marcel.starts_with("$argon2id$"));
        assert!(!marcel.contains("toast"));
        assert_ne!(marcel, thomas);
        drop(stored);

        assert!(accounts.verify("Marcel", "toast"));
        assert!(accounts.verify("Thomas", "toast"));
        assert!(!accounts.verify("Thomas", "Toast"));
    }

    #[test]
    fn register_replaces_the_secret() {
        let accounts = MemoryAuthenticator::new();
        accounts.register("Daniel", "daniel@example.com", "old");
        accounts.register("Daniel", "daniel@example.com", "new");
        assert_eq!(accounts.len(), 1);
        assert!(!accounts.verify("Daniel", "old"));
        assert!(accounts.verify("Daniel", "new"));
        assert_eq!(accounts.email("Daniel").as_deref(), Some("daniel@example.com"));
    }
}

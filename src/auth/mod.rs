use std::collections::HashMap;

use crate::config::Config;
use crate::utils::sha256_hex;

/// Fixed username -> password-hash map, built once at startup from the
/// configured secrets and never mutated.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    pub fn from_config(config: &Config) -> Self {
        Self::from_entries([
            ("admin", config.admin_pass_hash.as_str()),
            ("analyst", config.analyst_pass_hash.as_str()),
        ])
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            users: entries
                .into_iter()
                .map(|(user, hash)| (user.to_string(), hash.to_string()))
                .collect(),
        }
    }

    /// Digests the submitted password and compares it against the stored hash.
    /// Unknown usernames fail the same way as wrong passwords.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(stored) => *stored == sha256_hex(password),
            None => false,
        }
    }
}

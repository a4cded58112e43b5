//! User-record store abstraction and the in-memory implementation

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::SystemTime;

use joblist_core::{AccountStatus, JoblistError, JoblistResult, UserRecord};

/// The external user-record store, keyed by email (case-insensitive).
///
/// `update_credential` replaces the salt and hash together; there is
/// deliberately no way to update one without the other.
pub trait UserStore: Send + Sync + 'static {
    fn find_by_email(&self, email: &str) -> JoblistResult<Option<UserRecord>>;

    /// Insert a new record; fails on duplicate email.
    fn insert(&self, record: UserRecord) -> JoblistResult<()>;

    /// Replace the stored salt/hash pair and bump `updated_at`.
    fn update_credential(&self, email: &str, salt_hex: &str, hash_hex: &str) -> JoblistResult<()>;

    fn set_status(&self, email: &str, status: AccountStatus) -> JoblistResult<()>;
}

/// Canonical store key: trimmed, lowercased email.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// In-memory store for tests and local tooling.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_user<T>(
        &self,
        email: &str,
        f: impl FnOnce(&mut UserRecord) -> T,
    ) -> JoblistResult<T> {
        let mut users = self
            .users
            .write()
            .map_err(|_| JoblistError::Store("user store lock poisoned".into()))?;
        let record = users
            .get_mut(&normalize_email(email))
            .ok_or_else(|| JoblistError::Store(format!("no user record for {email}")))?;
        Ok(f(record))
    }
}

impl UserStore for MemoryStore {
    fn find_by_email(&self, email: &str) -> JoblistResult<Option<UserRecord>> {
        let users = self
            .users
            .read()
            .map_err(|_| JoblistError::Store("user store lock poisoned".into()))?;
        Ok(users.get(&normalize_email(email)).cloned())
    }

    fn insert(&self, record: UserRecord) -> JoblistResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| JoblistError::Store("user store lock poisoned".into()))?;
        let key = normalize_email(&record.email);
        if users.contains_key(&key) {
            return Err(JoblistError::Store(format!(
                "duplicate email: {}",
                record.email
            )));
        }
        users.insert(key, record);
        Ok(())
    }

    fn update_credential(&self, email: &str, salt_hex: &str, hash_hex: &str) -> JoblistResult<()> {
        self.with_user(email, |record| {
            record.password_salt = salt_hex.to_string();
            record.password_hash = hash_hex.to_string();
            record.updated_at = SystemTime::now();
        })
    }

    fn set_status(&self, email: &str, status: AccountStatus) -> JoblistResult<()> {
        self.with_user(email, |record| {
            record.status = status;
            record.updated_at = SystemTime::now();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joblist_core::Role;
    use uuid::Uuid;

    fn record(email: &str) -> UserRecord {
        let now = SystemTime::now();
        UserRecord {
            id: Uuid::new_v4(),
            full_name: "Test User".into(),
            email: email.into(),
            password_salt: "00".repeat(16),
            password_hash: "11".repeat(32),
            role: Role::JobSeeker,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn insert_and_find_is_case_insensitive() {
        let store = MemoryStore::new();
        store.insert(record("Ada@Example.com")).unwrap();

        let found = store.find_by_email("  ada@example.com ").unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "Ada@Example.com");
    }

    #[test]
    fn insert_duplicate_email_fails() {
        let store = MemoryStore::new();
        store.insert(record("ada@example.com")).unwrap();
        let result = store.insert(record("ADA@example.com"));
        assert!(matches!(result, Err(JoblistError::Store(_))));
    }

    #[test]
    fn update_credential_replaces_pair() {
        let store = MemoryStore::new();
        store.insert(record("ada@example.com")).unwrap();

        let new_salt = "22".repeat(16);
        let new_hash = "33".repeat(32);
        store
            .update_credential("ada@example.com", &new_salt, &new_hash)
            .unwrap();

        let user = store.find_by_email("ada@example.com").unwrap().unwrap();
        assert_eq!(user.password_salt, new_salt);
        assert_eq!(user.password_hash, new_hash);
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn update_unknown_user_fails() {
        let store = MemoryStore::new();
        let result = store.update_credential("ghost@example.com", "00", "11");
        assert!(matches!(result, Err(JoblistError::Store(_))));
    }

    #[test]
    fn set_status_deactivates() {
        let store = MemoryStore::new();
        store.insert(record("ada@example.com")).unwrap();
        store
            .set_status("ada@example.com", AccountStatus::Deactivated)
            .unwrap();

        let user = store.find_by_email("ada@example.com").unwrap().unwrap();
        assert_eq!(user.status, AccountStatus::Deactivated);
    }
}

use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Account role in the job board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Posts and manages job listings
    JobLister,
    /// Browses listings and submits applications
    JobSeeker,
    /// Moderates pending listings and user accounts
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::JobLister => "job_lister",
            Role::JobSeeker => "job_seeker",
            Role::Admin => "admin",
        }
    }
}

/// Account lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    /// Set by an admin; the account can no longer log in
    Deactivated,
}

/// A user row as persisted in the user-record store.
///
/// `password_salt` and `password_hash` are opaque lowercase hex strings
/// produced together by credential derivation. They are replaced only as a
/// pair (registration or password change), never independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// Registration input, before a credential exists
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

/// Canonical user view-model handed to presentation layers.
///
/// This is the single normalized shape; consumers must not branch on field
/// presence or reach back into the stored record. Credential fields are
/// deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl UserProfile {
    /// The one mapping point from stored record to view-model.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            role: record.role,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        let now = SystemTime::now();
        UserRecord {
            id: Uuid::new_v4(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password_salt: "00".repeat(16),
            password_hash: "11".repeat(32),
            role: Role::JobLister,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn role_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::JobLister).unwrap(),
            "\"job_lister\""
        );
        let role: Role = serde_json::from_str("\"job_seeker\"").unwrap();
        assert_eq!(role, Role::JobSeeker);
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn status_serde_roundtrip() {
        let s: AccountStatus = serde_json::from_str("\"deactivated\"").unwrap();
        assert_eq!(s, AccountStatus::Deactivated);
    }

    #[test]
    fn profile_never_exposes_credential_fields() {
        let record = sample_record();
        let profile = UserProfile::from_record(&record);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password_salt"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains(&record.password_hash));
        assert_eq!(profile.email, record.email);
        assert_eq!(profile.role, record.role);
    }
}

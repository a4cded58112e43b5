//! Registration, login, and password-change workflows

use std::sync::Arc;
use std::time::SystemTime;

use secrecy::SecretString;
use tracing::{debug, info};
use uuid::Uuid;

use joblist_core::{
    AccountStatus, JoblistError, JoblistResult, NewUser, UserProfile, UserRecord,
};
use joblist_credential::{derive_credential, verify_credential, Credential, Pbkdf2Params};

use crate::session::Session;
use crate::store::UserStore;

/// Single generic login failure. Unknown email, wrong password, deactivated
/// account, and garbled stored credential must all look identical to the
/// caller; the real cause is only logged.
const LOGIN_FAILED: &str = "incorrect email or password";

pub struct AuthService<S: UserStore> {
    store: Arc<S>,
    params: Pbkdf2Params,
    session: Session,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_params(store, Pbkdf2Params::default())
    }

    pub fn with_params(store: Arc<S>, params: Pbkdf2Params) -> Self {
        Self {
            store,
            params,
            session: Session::new(),
        }
    }

    /// Handle to the shared session; clones observe logins and logouts.
    pub fn session(&self) -> Session {
        self.session.clone()
    }

    /// Register a new account: derive a credential for the password and
    /// insert the user row. The plaintext is dropped when this returns.
    pub async fn register(
        &self,
        new_user: NewUser,
        password: SecretString,
    ) -> JoblistResult<UserProfile> {
        if self.store.find_by_email(&new_user.email)?.is_some() {
            return Err(JoblistError::Auth(
                "an account with this email already exists".into(),
            ));
        }

        let credential = self.derive_blocking(password).await?;

        let now = SystemTime::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            full_name: new_user.full_name,
            email: new_user.email,
            password_salt: credential.salt,
            password_hash: credential.hash,
            role: new_user.role,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        };
        let profile = UserProfile::from_record(&record);
        self.store.insert(record)?;

        info!(user_id = %profile.id, role = profile.role.as_str(), "registered new user");
        Ok(profile)
    }

    /// Log in: verify the password against the stored salt/hash pair and
    /// populate the shared session on success.
    pub async fn login(
        &self,
        email: &str,
        password: SecretString,
    ) -> JoblistResult<UserProfile> {
        let record = match self.store.find_by_email(email)? {
            Some(record) => record,
            None => {
                debug!("login rejected: unknown email");
                return Err(JoblistError::Auth(LOGIN_FAILED.into()));
            }
        };

        if record.status == AccountStatus::Deactivated {
            debug!(user_id = %record.id, "login rejected: account deactivated");
            return Err(JoblistError::Auth(LOGIN_FAILED.into()));
        }

        let verified = self
            .verify_blocking(password, record.password_salt.clone(), record.password_hash.clone())
            .await?;
        if !verified {
            debug!(user_id = %record.id, "login rejected: password verification failed");
            return Err(JoblistError::Auth(LOGIN_FAILED.into()));
        }

        let profile = UserProfile::from_record(&record);
        self.session.set(profile.clone()).await;
        info!(user_id = %profile.id, "login successful");
        Ok(profile)
    }

    pub async fn logout(&self) {
        self.session.clear().await;
    }

    /// Verify the old password, then replace the stored salt and hash as a
    /// pair. The two fields are never updated independently.
    pub async fn change_password(
        &self,
        email: &str,
        old_password: SecretString,
        new_password: SecretString,
    ) -> JoblistResult<()> {
        let record = self
            .store
            .find_by_email(email)?
            .ok_or_else(|| JoblistError::Auth(LOGIN_FAILED.into()))?;

        let verified = self
            .verify_blocking(
                old_password,
                record.password_salt.clone(),
                record.password_hash.clone(),
            )
            .await?;
        if !verified {
            debug!(user_id = %record.id, "password change rejected: old password invalid");
            return Err(JoblistError::Auth(LOGIN_FAILED.into()));
        }

        let credential = self.derive_blocking(new_password).await?;
        self.store
            .update_credential(email, &credential.salt, &credential.hash)?;

        info!(user_id = %record.id, "password changed");
        Ok(())
    }

    // PBKDF2 at production iteration counts takes hundreds of milliseconds,
    // so both KDF calls run on the blocking pool.

    async fn derive_blocking(&self, password: SecretString) -> JoblistResult<Credential> {
        let params = self.params.clone();
        tokio::task::spawn_blocking(move || derive_credential(&password, &params))
            .await
            .map_err(|e| {
                JoblistError::CryptoUnavailable(format!("derivation task failed: {e}"))
            })?
    }

    async fn verify_blocking(
        &self,
        password: SecretString,
        salt_hex: String,
        hash_hex: String,
    ) -> JoblistResult<bool> {
        let params = self.params.clone();
        tokio::task::spawn_blocking(move || {
            verify_credential(&password, &salt_hex, &hash_hex, &params)
        })
        .await
        .map_err(|e| JoblistError::CryptoUnavailable(format!("verification task failed: {e}")))?
    }
}

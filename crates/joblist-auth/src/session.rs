//! Shared login session: set at login, cleared at logout, read on every
//! protected view. Cloned handles share the same state.

use std::sync::Arc;
use tokio::sync::RwLock;

use joblist_core::UserProfile;

#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<UserProfile>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, profile: UserProfile) {
        *self.inner.write().await = Some(profile);
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    pub async fn current(&self) -> Option<UserProfile> {
        self.inner.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

//! Key derivation: PBKDF2-HMAC-SHA256 password → derived key

use hmac::Hmac;
use pbkdf2::pbkdf2;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use joblist_core::{JoblistError, JoblistResult};

use crate::{KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};

/// A 256-bit key derived from a password via PBKDF2-HMAC-SHA256.
///
/// Zeroized on drop to prevent secrets lingering in memory. Equality is
/// constant-time.
#[derive(Clone)]
pub struct DerivedKey {
    bytes: [u8; KEY_SIZE],
}

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Lowercase hex, two characters per byte, no separators (64 chars).
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for DerivedKey {}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// PBKDF2 parameters
#[derive(Debug, Clone)]
pub struct Pbkdf2Params {
    /// Iteration count (default: 310000)
    pub iterations: u32,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

/// Derive a 256-bit key from a password and salt using PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same password, salt, and iteration count always yield
/// the same key. The salt is 16 bytes, randomly generated per credential and
/// stored alongside the derived key (it does not need to be secret).
pub fn derive_with_salt(
    password: &SecretString,
    salt: &[u8; SALT_SIZE],
    params: &Pbkdf2Params,
) -> JoblistResult<DerivedKey> {
    if params.iterations == 0 {
        return Err(JoblistError::CryptoUnavailable(
            "PBKDF2 iteration count must be at least 1".into(),
        ));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2::<Hmac<Sha256>>(
        password.expose_secret().as_bytes(),
        salt,
        params.iterations,
        &mut key,
    )
    .map_err(|e| JoblistError::CryptoUnavailable(format!("PBKDF2-HMAC-SHA256 failed: {e}")))?;

    Ok(DerivedKey::from_bytes(key))
}

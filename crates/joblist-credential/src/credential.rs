//! Storable credentials: derive at registration, verify at login

use rand::RngCore;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::warn;

use joblist_core::JoblistResult;

use crate::kdf::{derive_with_salt, Pbkdf2Params};
use crate::{KEY_SIZE, SALT_SIZE};

/// A storable password credential: per-credential random salt plus the
/// PBKDF2 output, both lowercase hex (32 and 64 characters respectively).
///
/// Persisted as a pair and replaced as a pair; never contains the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub salt: String,
    pub hash: String,
}

/// Derive a fresh credential from a plaintext password.
///
/// Generates a new random 16-byte salt from the OS CSPRNG on every call, so
/// two derivations of the same password are never comparable.
pub fn derive_credential(
    password: &SecretString,
    params: &Pbkdf2Params,
) -> JoblistResult<Credential> {
    let mut salt = [0u8; SALT_SIZE];
    rand::thread_rng().fill_bytes(&mut salt);

    let key = derive_with_salt(password, &salt, params)?;

    Ok(Credential {
        salt: hex::encode(salt),
        hash: key.to_hex(),
    })
}

/// Verify a plaintext password against a stored salt/hash pair.
///
/// Re-derives with the stored salt and compares the derived keys in constant
/// time. Malformed or wrong-length hex in either stored field resolves to
/// `Ok(false)` with a warning, never an error or panic: a garbled row must
/// look the same to an observer as a wrong password.
pub fn verify_credential(
    password: &SecretString,
    salt_hex: &str,
    stored_hash_hex: &str,
    params: &Pbkdf2Params,
) -> JoblistResult<bool> {
    let salt: [u8; SALT_SIZE] = match decode_fixed(salt_hex) {
        Some(salt) => salt,
        None => {
            warn!(len = salt_hex.len(), "stored salt is not valid 32-char hex");
            return Ok(false);
        }
    };

    let stored: [u8; KEY_SIZE] = match decode_fixed(stored_hash_hex) {
        Some(stored) => stored,
        None => {
            warn!(
                len = stored_hash_hex.len(),
                "stored password hash is not valid 64-char hex"
            );
            return Ok(false);
        }
    };

    let computed = derive_with_salt(password, &salt, params)?;
    Ok(computed.as_bytes().ct_eq(&stored).into())
}

/// Decode hex into a fixed-size array, or None on bad hex or wrong length.
fn decode_fixed<const N: usize>(hex_str: &str) -> Option<[u8; N]> {
    let bytes = hex::decode(hex_str).ok()?;
    bytes.try_into().ok()
}

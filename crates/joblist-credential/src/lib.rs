//! joblist-credential: password credential derivation and verification
//!
//! Pipeline: plaintext password → PBKDF2-HMAC-SHA256 (310k iterations,
//! per-credential 16-byte random salt) → 256-bit derived key → lowercase hex
//!
//! The plaintext is never persisted; the stored credential is the salt/key
//! hex pair, replaced only together. Derivation is intentionally slow
//! (hundreds of milliseconds at the default iteration count) to resist
//! offline dictionary attacks; async callers should wrap it in
//! `spawn_blocking`.

pub mod credential;
pub mod kdf;

pub use credential::{derive_credential, verify_credential, Credential};
pub use kdf::{derive_with_salt, DerivedKey, Pbkdf2Params};

/// Size of the per-credential random salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of the derived key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Default PBKDF2-HMAC-SHA256 iteration count
pub const PBKDF2_ITERATIONS: u32 = 310_000;

use thiserror::Error;

pub type JoblistResult<T> = Result<T, JoblistError>;

#[derive(Debug, Error)]
pub enum JoblistError {
    /// The PBKDF2 backend could not be invoked. Fatal to the calling
    /// operation; never retried here (a retry would fail the same way).
    #[error("cryptographic backend unavailable: {0}")]
    CryptoUnavailable(String),

    /// A stored salt or derived-key string is not valid hex of the
    /// expected length. Verification treats this as "not verified".
    #[error("malformed stored credential: {0}")]
    MalformedCredential(String),

    #[error("user store error: {0}")]
    Store(String),

    /// Authentication failure. The message is deliberately generic so
    /// callers cannot distinguish wrong-password from unknown-email or
    /// garbled-credential causes.
    #[error("{0}")]
    Auth(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

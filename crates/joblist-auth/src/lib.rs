//! joblist-auth: account workflows over a user-record store
//!
//! Registration derives a credential and inserts the user row; login looks
//! up by email, verifies the password, and populates the shared session;
//! password change replaces the salt/hash pair atomically. Every login
//! failure collapses to one generic message so callers cannot tell an
//! unknown email from a wrong password or a garbled stored credential.

pub mod service;
pub mod session;
pub mod store;

pub use service::AuthService;
pub use session::Session;
pub use store::{MemoryStore, UserStore};

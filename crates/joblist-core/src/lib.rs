pub mod config;
pub mod error;
pub mod types;

pub use error::{JoblistError, JoblistResult};
pub use types::{AccountStatus, NewUser, Role, UserProfile, UserRecord};

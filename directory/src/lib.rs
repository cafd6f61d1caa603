//! Domain library for the mock user directory.
//!
//! Holds the user record type, the repository port and the error type. The
//! mock operations live in [`users`], validation in [`validate`], and the
//! in-memory store in [`adapters::memory_repo`]. Nothing here performs IO.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user as returned by every directory operation.
///
/// All three fields are always present. When read from a mapping, `email`
/// may be omitted (it defaults to empty) and unknown keys are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserRecord {
    pub fn new<I, N, E>(id: I, name: N, email: E) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        E: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Record without an email address.
    pub fn without_email<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self::new(id, name, String::new())
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

/// Repository port for storing and loading user records.
///
/// Implementations hold at most one record per id; `add` overwrites.
pub trait UserRepository {
    fn add(&mut self, record: UserRecord);
    fn get(&self, id: &str) -> Option<UserRecord>;
}

/// Errors raised at the mapping boundary. Lookup misses are `None`, not errors.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("could not decode user record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} - mock user directory", pkg, ver)
}

pub mod adapters;
pub mod service;
pub mod users;
pub mod validate;

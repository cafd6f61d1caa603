use serde_json::Value;
use tracing::{debug, warn};

use crate::validate::{record_from_mapping, validate_input};
use crate::{DirectoryError, UserRecord, UserRepository};

/// Application service over a user repository.
///
/// Generic over the repository so tests and the CLI can hand in the
/// in-memory store while other backends remain possible.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_user(&mut self, record: UserRecord) {
        debug!(id = %record.id, "adding user");
        self.repo.add(record);
    }

    pub fn get_user(&self, id: &str) -> Option<UserRecord> {
        self.repo.get(id)
    }

    /// Validate a JSON object, convert it to a record and store it.
    pub fn import(&mut self, value: &Value) -> Result<UserRecord, DirectoryError> {
        let Value::Object(map) = value else {
            warn!("import rejected: not a JSON object");
            return Err(DirectoryError::InvalidInput("expected an object".into()));
        };
        if !validate_input(map) {
            warn!("import rejected: name and email are required");
            return Err(DirectoryError::InvalidInput(
                "expected an object with name and email".into(),
            ));
        }
        let record = record_from_mapping(map)?;
        self.add_user(record.clone());
        Ok(record)
    }

    pub fn into_inner(self) -> R {
        self.repo
    }
}

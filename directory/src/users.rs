//! Mock list, lookup and create operations.
//!
//! Everything here is synthesized from the arguments; no store is consulted.

use tracing::{debug, warn};

use crate::UserRecord;

/// Page size used when the caller gives none.
pub const DEFAULT_LIMIT: usize = 10;
/// Starting id used when the caller gives none.
pub const DEFAULT_OFFSET: usize = 0;
/// Largest page [`get_users`] will materialize; bigger limits are clamped.
pub const MAX_LIMIT: usize = 10_000;
/// Lookup id that always resolves to `None`.
pub const NOT_FOUND_SENTINEL: &str = "not_found";
/// Id assigned to every created user.
pub const NEW_USER_ID: &str = "usr_new";

const LOOKUP_NAME: &str = "Test User";
const LOOKUP_EMAIL: &str = "test@example.com";

/// Pagination parameters for [`get_page`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Lazily generate users with ids `offset..offset + limit`.
///
/// Names follow `"User {id}"` and emails are empty. The end of the range
/// saturates at `usize::MAX`, so an overflowing request yields fewer records.
pub fn iter_users(limit: usize, offset: usize) -> impl Iterator<Item = UserRecord> {
    let end = offset.saturating_add(limit);
    (offset..end).map(|i| UserRecord::without_email(i.to_string(), format!("User {}", i)))
}

/// Collect a page from [`iter_users`].
///
/// `limit` is clamped to [`MAX_LIMIT`] so the vector stays allocatable; use
/// [`iter_users`] to walk further.
pub fn get_users(limit: usize, offset: usize) -> Vec<UserRecord> {
    let clamped = limit.min(MAX_LIMIT);
    if clamped < limit {
        warn!(limit, max = MAX_LIMIT, "list limit clamped");
    }
    debug!(limit = clamped, offset, "generating synthetic users");
    iter_users(clamped, offset).collect()
}

/// [`get_users`] driven by a [`Page`].
pub fn get_page(page: Page) -> Vec<UserRecord> {
    get_users(page.limit, page.offset)
}

/// Resolve a user by id. Only [`NOT_FOUND_SENTINEL`] misses.
pub fn get_user_by_id(user_id: &str) -> Option<UserRecord> {
    if user_id == NOT_FOUND_SENTINEL {
        debug!(user_id, "lookup hit not-found sentinel");
        return None;
    }
    Some(UserRecord::new(user_id, LOOKUP_NAME, LOOKUP_EMAIL))
}

/// Build a "created" user from the given name and email. Nothing is stored.
pub fn post_create_user(name: &str, email: &str) -> UserRecord {
    debug!(name, "creating mock user");
    UserRecord::new(NEW_USER_ID, name, email)
}

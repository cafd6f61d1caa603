use std::collections::BTreeMap;

use tracing::trace;

use crate::{UserRecord, UserRepository};

/// In-memory user store keyed by id.
///
/// Single owner: mutation takes `&mut self` and there is no internal lock.
/// Wrap it yourself if it must be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct InMemoryUserStore {
    users: BTreeMap<String, UserRecord>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same id.
    pub fn add(&mut self, record: UserRecord) {
        trace!(id = %record.id, "store add");
        self.users.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.get(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Stored records in id order.
    pub fn records(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.values()
    }
}

impl UserRepository for InMemoryUserStore {
    fn add(&mut self, record: UserRecord) {
        InMemoryUserStore::add(self, record)
    }

    fn get(&self, id: &str) -> Option<UserRecord> {
        InMemoryUserStore::get(self, id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get("u1").is_none());
    }

    #[test]
    fn add_then_get_returns_same_record() {
        let mut store = InMemoryUserStore::new();
        let rec = UserRecord::new("u1", "Alice", "a@x.com");
        store.add(rec.clone());
        assert_eq!(store.get("u1"), Some(&rec));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn re_add_overwrites() {
        let mut store = InMemoryUserStore::new();
        store.add(UserRecord::new("u1", "Alice", "a@x.com"));
        store.add(UserRecord::new("u1", "Alicia", "alicia@x.com"));
        assert_eq!(store.len(), 1);
        let got = store.get("u1").unwrap();
        assert_eq!(got.name, "Alicia");
        assert_eq!(got.email, "alicia@x.com");
    }

    #[test]
    fn records_iterate_in_id_order() {
        let mut store = InMemoryUserStore::new();
        store.add(UserRecord::without_email("b", "B"));
        store.add(UserRecord::without_email("a", "A"));
        let ids: Vec<&str> = store.records().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn repository_port_clones_out() {
        let mut store = InMemoryUserStore::new();
        UserRepository::add(&mut store, UserRecord::without_email("u2", "Bob"));
        let got: Option<UserRecord> = UserRepository::get(&store, "u2");
        assert_eq!(got, Some(UserRecord::without_email("u2", "Bob")));
    }
}

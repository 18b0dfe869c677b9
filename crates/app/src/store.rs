//! Per-page mirrors of the REST collections.
//!
//! Each dashboard page owns one [`Collection`] per entity type it shows.
//! The collection is only ever mutated after the server confirmed the
//! corresponding operation; nothing here is speculative.

use shared_types::{Class, Group, Resource, User};

/// Identity of a record within its collection.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for User {
    fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.email)
    }
}

impl Keyed for Class {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Resource {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Group {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Ordered in-memory mirror of one server collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> Collection<T> {
    /// Swap in a freshly fetched collection. Used by `load` and by the
    /// refresh-after-assignment policy.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Insert a server-confirmed record at the end (append order, as the
    /// server reports insertions).
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Drop the record with the given key. A second call with the same key
    /// is a no-op, so racing deletes are harmless.
    pub fn remove_by_id(&mut self, id: &str) {
        self.items.retain(|item| item.key() != id);
    }
}

//! Local Collection
//!
//! Ordered mirror of server-confirmed entities. Only ever changed with
//! values the server has returned.

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct LocalCollection<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for LocalCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> LocalCollection<T> {
    /// Replace everything with a list response, keeping the server's order
    pub fn from_server(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Insert a newly created entity at the head
    pub fn prepend(&mut self, entity: T) {
        let id = entity.id();
        self.items.retain(|item| item.id() != id);
        self.items.insert(0, entity);
    }

    /// Replace the entry with the same id in place. Returns false when the
    /// id is not present (nothing is inserted).
    pub fn replace(&mut self, entity: T) -> bool {
        let id = entity.id();
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    /// Remove by id. Returns false when the id is not present.
    pub fn remove(&mut self, id: T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

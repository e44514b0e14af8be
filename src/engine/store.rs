use crate::model::*;

use super::HotelError;

/// A value kept in an [`EntityStore`], addressed by a store-assigned integer id.
pub trait Entity: Clone + PartialEq {
    /// Name used in `NotFound` errors.
    const KIND: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

impl Entity for Guest {
    const KIND: &'static str = "guest";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Entity for Room {
    const KIND: &'static str = "room";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Entity for Booking {
    const KIND: &'static str = "booking";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// In-memory collection with identity assignment.
///
/// Reads hand out clones, so a caller can never mutate stored state without
/// going back through the owning registry. Not synchronized; registries wrap
/// it in a lock.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// One past the largest id in the collection, or 1 when empty.
    pub fn next_id(&self) -> u64 {
        self.items.iter().map(Entity::id).max().map_or(1, |max| max + 1)
    }

    pub fn exists_by_id(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn find_by_id(&self, id: u64) -> Result<T, HotelError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(HotelError::NotFound { kind: T::KIND, id })
    }

    /// Read-only view in insertion order.
    pub fn find_all(&self) -> &[T] {
        &self.items
    }

    /// Assign a fresh id to `item`, store it, and return the stored copy.
    pub fn save(&mut self, mut item: T) -> T {
        item.set_id(self.next_id());
        self.items.push(item.clone());
        item
    }

    /// Overwrite the stored entity that has `item`'s id.
    pub fn replace(&mut self, item: T) -> Result<T, HotelError> {
        let slot = self.get_mut(item.id())?;
        *slot = item.clone();
        Ok(item)
    }

    pub(crate) fn get_mut(&mut self, id: u64) -> Result<&mut T, HotelError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(HotelError::NotFound { kind: T::KIND, id })
    }

    /// Remove the entity exactly equal to `item`. Returns false if none matched.
    pub fn delete(&mut self, item: &T) -> bool {
        match self.items.iter().position(|stored| stored == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn delete_by_id(&mut self, id: u64) -> bool {
        match self.items.iter().position(|stored| stored.id() == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn delete_all(&mut self) {
        self.items.clear();
    }
}

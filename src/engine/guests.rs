use tokio::sync::RwLock;

use crate::limits::*;
use crate::model::*;

use super::store::EntityStore;
use super::HotelError;

pub struct GuestRegistry {
    store: RwLock<EntityStore<Guest>>,
}

impl Default for GuestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestRegistry {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(EntityStore::new()),
        }
    }

    pub async fn find_all(&self) -> Vec<Guest> {
        self.store.read().await.find_all().to_vec()
    }

    pub async fn find_by_id(&self, id: GuestId) -> Result<Guest, HotelError> {
        self.store.read().await.find_by_id(id)
    }

    pub async fn exists_by_id(&self, id: GuestId) -> bool {
        self.store.read().await.exists_by_id(id)
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.count()
    }

    pub async fn save(&self, guest: Guest) -> Result<Guest, HotelError> {
        validate_guest(&guest)?;
        let saved = self.store.write().await.save(guest);
        tracing::debug!("saved guest {}", saved.id);
        Ok(saved)
    }

    /// Validate every guest, then store them all. Nothing is stored if one is invalid.
    pub async fn save_all(&self, guests: Vec<Guest>) -> Result<Vec<Guest>, HotelError> {
        if guests.is_empty() {
            return Err(HotelError::InvalidArgument("empty list of guests"));
        }
        if guests.len() > MAX_BATCH_SIZE {
            return Err(HotelError::LimitExceeded("batch too large"));
        }
        for guest in &guests {
            validate_guest(guest)?;
        }
        let mut store = self.store.write().await;
        Ok(guests.into_iter().map(|g| store.save(g)).collect())
    }

    /// Replace the stored guest that has `guest.id` wholesale.
    pub async fn update(&self, guest: Guest) -> Result<Guest, HotelError> {
        validate_guest(&guest)?;
        let updated = self.store.write().await.replace(guest)?;
        tracing::debug!("updated guest {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: GuestId) -> Result<bool, HotelError> {
        let mut store = self.store.write().await;
        if !store.exists_by_id(id) {
            return Err(HotelError::NotFound { kind: "guest", id });
        }
        Ok(store.delete_by_id(id))
    }

    /// Remove the stored guest only if it matches `guest` field for field.
    pub async fn delete(&self, guest: &Guest) -> Result<bool, HotelError> {
        validate_guest(guest)?;
        let mut store = self.store.write().await;
        if !store.exists_by_id(guest.id) {
            return Err(HotelError::NotFound { kind: "guest", id: guest.id });
        }
        Ok(store.delete(guest))
    }

    pub async fn delete_all(&self) {
        self.store.write().await.delete_all();
    }
}

fn validate_guest(guest: &Guest) -> Result<(), HotelError> {
    if guest.first_name.is_empty() || guest.last_name.is_empty() {
        return Err(HotelError::InvalidArgument("guest names must not be empty"));
    }
    if guest.first_name.len() > MAX_NAME_LEN || guest.last_name.len() > MAX_NAME_LEN {
        return Err(HotelError::LimitExceeded("guest name too long"));
    }
    Ok(())
}

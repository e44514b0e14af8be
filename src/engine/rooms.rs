use tokio::sync::RwLock;

use crate::limits::*;
use crate::model::*;

use super::store::EntityStore;
use super::HotelError;

/// Rooms plus the inventory sequence that numbers their amenities.
struct RoomTable {
    store: EntityStore<Room>,
    next_amenity_id: AmenityId,
}

impl RoomTable {
    /// Give every amenity of `room` a fresh inventory number.
    fn stamp_amenities(&mut self, room: &mut Room) {
        for amenity in &mut room.amenities {
            amenity.id = self.next_amenity_id;
            self.next_amenity_id += 1;
        }
    }
}

pub struct RoomRegistry {
    table: RwLock<RoomTable>,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(RoomTable {
                store: EntityStore::new(),
                next_amenity_id: 1,
            }),
        }
    }

    pub async fn find_all(&self) -> Vec<Room> {
        self.table.read().await.store.find_all().to_vec()
    }

    pub async fn find_by_id(&self, id: RoomId) -> Result<Room, HotelError> {
        self.table.read().await.store.find_by_id(id)
    }

    pub async fn exists_by_id(&self, id: RoomId) -> bool {
        self.table.read().await.store.exists_by_id(id)
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.store.count()
    }

    /// Occupants the room sleeps, derived from its beds on every call.
    pub async fn capacity(&self, id: RoomId) -> Result<u32, HotelError> {
        Ok(self.find_by_id(id).await?.capacity())
    }

    pub async fn save(&self, mut room: Room) -> Result<Room, HotelError> {
        normalize_room(&mut room)?;
        let mut table = self.table.write().await;
        table.stamp_amenities(&mut room);
        let saved = table.store.save(room);
        tracing::debug!("saved room {} (capacity {})", saved.id, saved.capacity());
        Ok(saved)
    }

    /// Validate every room, then store them all. Nothing is stored if one is invalid.
    pub async fn save_all(&self, mut rooms: Vec<Room>) -> Result<Vec<Room>, HotelError> {
        if rooms.is_empty() {
            return Err(HotelError::InvalidArgument("empty list of rooms"));
        }
        if rooms.len() > MAX_BATCH_SIZE {
            return Err(HotelError::LimitExceeded("batch too large"));
        }
        for room in &mut rooms {
            normalize_room(room)?;
        }
        let mut table = self.table.write().await;
        let mut saved = Vec::with_capacity(rooms.len());
        for mut room in rooms {
            table.stamp_amenities(&mut room);
            saved.push(table.store.save(room));
        }
        Ok(saved)
    }

    /// Replace the amenity set of the room with `room.id`. Not a merge.
    pub async fn update(&self, mut room: Room) -> Result<Room, HotelError> {
        normalize_room(&mut room)?;
        let mut table = self.table.write().await;
        if !table.store.exists_by_id(room.id) {
            return Err(HotelError::NotFound { kind: "room", id: room.id });
        }
        table.stamp_amenities(&mut room);
        let updated = table.store.replace(room)?;
        tracing::debug!("updated room {} (capacity {})", updated.id, updated.capacity());
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: RoomId) -> Result<bool, HotelError> {
        let mut table = self.table.write().await;
        if !table.store.exists_by_id(id) {
            return Err(HotelError::NotFound { kind: "room", id });
        }
        Ok(table.store.delete_by_id(id))
    }

    /// Remove the stored room only if its id and amenity set match `room`.
    pub async fn delete(&self, room: &Room) -> Result<bool, HotelError> {
        let mut room = room.clone();
        normalize_room(&mut room)?;
        let mut table = self.table.write().await;
        if !table.store.exists_by_id(room.id) {
            return Err(HotelError::NotFound { kind: "room", id: room.id });
        }
        Ok(table.store.delete(&room))
    }

    pub async fn delete_all(&self) {
        self.table.write().await.store.delete_all();
    }
}

fn normalize_room(room: &mut Room) -> Result<(), HotelError> {
    if room.amenities.is_empty() {
        return Err(HotelError::InvalidArgument("room has no amenities"));
    }
    room.dedup_amenities();
    Ok(())
}

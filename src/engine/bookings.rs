use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::limits::*;
use crate::model::*;
use crate::observability::*;

use super::conflict::{check_no_overlap, validate_stay, Clock};
use super::guests::GuestRegistry;
use super::rooms::RoomRegistry;
use super::store::EntityStore;
use super::HotelError;

/// Admits, re-admits and removes bookings.
///
/// Every mutation holds the booking store's write lock from the first
/// validation step until the commit, so no other booking can slip into a
/// room between the overlap scan and the insert. Guest and room lookups
/// happen under that lock; their registries never take it, so the lock
/// order is always bookings, then rooms or guests.
pub struct BookingEngine {
    store: RwLock<EntityStore<Booking>>,
    guests: Arc<GuestRegistry>,
    rooms: Arc<RoomRegistry>,
    clock: Arc<dyn Clock>,
}

impl BookingEngine {
    pub fn new(guests: Arc<GuestRegistry>, rooms: Arc<RoomRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: RwLock::new(EntityStore::new()),
            guests,
            rooms,
            clock,
        }
    }

    // ── Queries ──────────────────────────────────────────────

    pub async fn find_all(&self) -> Vec<Booking> {
        self.store.read().await.find_all().to_vec()
    }

    pub async fn find_by_id(&self, id: BookingId) -> Result<Booking, HotelError> {
        self.store.read().await.find_by_id(id)
    }

    pub async fn exists_by_id(&self, id: BookingId) -> bool {
        self.store.read().await.exists_by_id(id)
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.count()
    }

    // ── Admission ────────────────────────────────────────────

    pub async fn save(&self, booking: Booking) -> Result<Booking, HotelError> {
        let mut store = self.store.write().await;
        self.validate_booking(&store, &booking, None).await?;
        let saved = store.save(booking);
        metrics::counter!(BOOKINGS_CREATED_TOTAL).increment(1);
        tracing::debug!(
            "booked room {} for guest {} [{}, {}) as booking {}",
            saved.room_id,
            saved.guest_id,
            saved.stay.from,
            saved.stay.to,
            saved.id
        );
        Ok(saved)
    }

    /// All-or-nothing: every booking is checked against the stored set and
    /// against the rest of the batch before any of them is committed.
    pub async fn save_all(&self, bookings: Vec<Booking>) -> Result<Vec<Booking>, HotelError> {
        if bookings.is_empty() {
            return Err(HotelError::InvalidArgument("empty list of bookings"));
        }
        if bookings.len() > MAX_BATCH_SIZE {
            return Err(HotelError::LimitExceeded("batch too large"));
        }

        let mut store = self.store.write().await;

        // Phase 1: validate against the state as it stood before the batch.
        for booking in &bookings {
            self.validate_booking(&store, booking, None).await?;
        }

        // Members would be numbered consecutively from here on commit.
        let first_id = store.next_id();
        for (i, a) in bookings.iter().enumerate() {
            for b in &bookings[i + 1..] {
                if a.room_id == b.room_id && a.stay.overlaps(&b.stay) {
                    let err = HotelError::OverlapConflict(first_id + i as u64);
                    record_conflict(a.room_id, &b.stay, &err);
                    return Err(err);
                }
            }
        }

        // Phase 2: commit.
        metrics::histogram!(BOOKING_BATCH_SIZE).record(bookings.len() as f64);
        metrics::counter!(BOOKINGS_CREATED_TOTAL).increment(bookings.len() as u64);
        let saved: Vec<Booking> = bookings.into_iter().map(|b| store.save(b)).collect();
        tracing::debug!("committed batch of {} bookings", saved.len());
        Ok(saved)
    }

    // ── Re-admission ─────────────────────────────────────────

    /// Replace booking `id` with `new_booking`, keeping its id.
    ///
    /// The replacement is validated in full, ignoring the booking it replaces,
    /// before anything is written. On failure the stored booking is untouched.
    pub async fn update_booking(&self, id: BookingId, new_booking: Booking) -> Result<Booking, HotelError> {
        let mut store = self.store.write().await;
        let current = store.find_by_id(id)?;
        if new_booking.guest_id != current.guest_id {
            return Err(HotelError::InvalidArgument("the guest of a booking cannot be changed"));
        }
        self.validate_booking(&store, &new_booking, Some(id)).await?;

        let mut replacement = new_booking;
        replacement.id = id;
        let updated = store.replace(replacement)?;
        metrics::counter!(BOOKINGS_UPDATED_TOTAL, "kind" => "content").increment(1);
        tracing::debug!("updated booking {id}");
        Ok(updated)
    }

    /// Move booking `id` to `[from, to)` on the same room.
    pub async fn update_booking_by_dates(
        &self,
        id: BookingId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Booking, HotelError> {
        let stay = Stay::new(from, to);
        validate_stay(&stay, self.clock.today())?;

        let mut store = self.store.write().await;
        let room_id = store.find_by_id(id)?.room_id;
        check_no_overlap(store.find_all(), room_id, &stay, Some(id))
            .inspect_err(|e| record_conflict(room_id, &stay, e))?;

        let booking = store.get_mut(id)?;
        booking.stay = stay;
        metrics::counter!(BOOKINGS_UPDATED_TOTAL, "kind" => "dates").increment(1);
        tracing::debug!("moved booking {id} to [{from}, {to})");
        Ok(booking.clone())
    }

    // ── Removal ──────────────────────────────────────────────

    /// Remove the stored booking only if it matches `booking` field for field.
    pub async fn delete(&self, booking: &Booking) -> Result<bool, HotelError> {
        let mut store = self.store.write().await;
        if !store.exists_by_id(booking.id) {
            return Err(HotelError::NotFound { kind: "booking", id: booking.id });
        }
        let deleted = store.delete(booking);
        if deleted {
            metrics::counter!(BOOKINGS_DELETED_TOTAL).increment(1);
        }
        Ok(deleted)
    }

    pub async fn delete_by_id(&self, id: BookingId) -> Result<bool, HotelError> {
        let mut store = self.store.write().await;
        if !store.exists_by_id(id) {
            return Err(HotelError::NotFound { kind: "booking", id });
        }
        let deleted = store.delete_by_id(id);
        metrics::counter!(BOOKINGS_DELETED_TOTAL).increment(1);
        Ok(deleted)
    }

    pub async fn delete_all(&self) {
        let mut store = self.store.write().await;
        metrics::counter!(BOOKINGS_DELETED_TOTAL).increment(store.count() as u64);
        store.delete_all();
    }

    // ── Validation ───────────────────────────────────────────

    /// Everything a booking must satisfy to be stored, checked against `store`.
    /// `exclude` is the booking being replaced, if any.
    async fn validate_booking(
        &self,
        store: &EntityStore<Booking>,
        booking: &Booking,
        exclude: Option<BookingId>,
    ) -> Result<(), HotelError> {
        validate_stay(&booking.stay, self.clock.today())?;
        if booking.number_of_people == 0 {
            return Err(HotelError::InvalidArgument("a booking needs at least one person"));
        }
        if !self.guests.exists_by_id(booking.guest_id).await {
            return Err(HotelError::NotFound { kind: "guest", id: booking.guest_id });
        }
        let room = self.rooms.find_by_id(booking.room_id).await?;
        if room.capacity() < booking.number_of_people {
            return Err(HotelError::InvalidArgument("the room does not have enough capacity"));
        }
        check_no_overlap(store.find_all(), booking.room_id, &booking.stay, exclude)
            .inspect_err(|e| record_conflict(booking.room_id, &booking.stay, e))
    }
}

fn record_conflict(room_id: RoomId, stay: &Stay, err: &HotelError) {
    metrics::counter!(OVERLAP_CONFLICTS_TOTAL).increment(1);
    tracing::warn!("rejected [{}, {}) on room {room_id}: {err}", stay.from, stay.to);
}

mod bookings;
mod conflict;
mod error;
mod guests;
mod rooms;
mod store;

pub use bookings::BookingEngine;
pub use conflict::{Clock, FixedClock, SystemClock};
pub use error::HotelError;
pub use guests::GuestRegistry;
pub use rooms::RoomRegistry;
pub use store::{Entity, EntityStore};

use std::sync::Arc;

/// Guest, room and booking registries wired together over one clock.
pub struct Hotel {
    pub guests: Arc<GuestRegistry>,
    pub rooms: Arc<RoomRegistry>,
    pub bookings: BookingEngine,
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

impl Hotel {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let guests = Arc::new(GuestRegistry::new());
        let rooms = Arc::new(RoomRegistry::new());
        let bookings = BookingEngine::new(guests.clone(), rooms.clone(), clock);
        Self {
            guests,
            rooms,
            bookings,
        }
    }
}

//! Wire-side shapes and their conversion into engine values.
//!
//! Rooms arrive with their amenities as a list tagged by `"type"`; that list
//! may be missing or hold `null` entries, which the engine's `Room` cannot
//! represent, so conversion is where those cases are rejected.

use serde::{Deserialize, Serialize};

use crate::engine::{Hotel, HotelError};
use crate::model::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AmenityDto {
    Bed {
        #[serde(rename = "bedType")]
        bed_type: BedSize,
    },
    Toilet,
    Shower,
}

impl From<AmenityDto> for AmenityKind {
    fn from(dto: AmenityDto) -> Self {
        match dto {
            AmenityDto::Bed { bed_type } => AmenityKind::Bed(bed_type),
            AmenityDto::Toilet => AmenityKind::Toilet,
            AmenityDto::Shower => AmenityKind::Shower,
        }
    }
}

impl From<AmenityKind> for AmenityDto {
    fn from(kind: AmenityKind) -> Self {
        match kind {
            AmenityKind::Bed(bed_type) => AmenityDto::Bed { bed_type },
            AmenityKind::Toilet => AmenityDto::Toilet,
            AmenityKind::Shower => AmenityDto::Shower,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDto {
    #[serde(default)]
    pub id: RoomId,
    pub amenities: Option<Vec<Option<AmenityDto>>>,
}

impl TryFrom<RoomDto> for Room {
    type Error = HotelError;

    fn try_from(dto: RoomDto) -> Result<Self, Self::Error> {
        let entries = dto
            .amenities
            .ok_or(HotelError::InvalidArgument("room has no amenity list"))?;
        let kinds = entries
            .into_iter()
            .map(|entry| {
                entry
                    .map(AmenityKind::from)
                    .ok_or(HotelError::InvalidArgument("room lists a null amenity"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut room = Room::new(kinds)?;
        room.id = dto.id;
        Ok(room)
    }
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            amenities: Some(room.amenities.iter().map(|a| Some(a.kind.into())).collect()),
        }
    }
}

/// Initial contents for an empty [`Hotel`].
///
/// Bookings refer to guests and rooms by the ids the registries assign,
/// which on an empty hotel are their 1-based positions in `guests` and `rooms`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub rooms: Vec<RoomDto>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub guests: usize,
    pub rooms: usize,
    pub bookings: usize,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Store guests, then rooms, then bookings, each as one batch.
    /// Stops at the first batch that fails; earlier batches stay stored.
    pub async fn apply(self, hotel: &Hotel) -> Result<SeedReport, HotelError> {
        let rooms = self
            .rooms
            .into_iter()
            .map(Room::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = SeedReport {
            guests: 0,
            rooms: 0,
            bookings: 0,
        };
        if !self.guests.is_empty() {
            report.guests = hotel.guests.save_all(self.guests).await?.len();
        }
        if !rooms.is_empty() {
            report.rooms = hotel.rooms.save_all(rooms).await?.len();
        }
        if !self.bookings.is_empty() {
            report.bookings = hotel.bookings.save_all(self.bookings).await?.len();
        }
        Ok(report)
    }
}

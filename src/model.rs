use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::HotelError;

pub type GuestId = u64;
pub type RoomId = u64;
pub type BookingId = u64;
/// Inventory number of a single amenity. Never part of equality.
pub type AmenityId = u64;

/// Id carried by values that have not been stored yet.
pub const UNASSIGNED: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    #[serde(default)]
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
}

impl Guest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: UNASSIGNED,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BedSize {
    Single,
    Double,
    King,
}

impl BedSize {
    /// How many people the bed sleeps.
    pub fn sleeps(self) -> u32 {
        match self {
            BedSize::Single => 1,
            BedSize::Double | BedSize::King => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmenityKind {
    Bed(BedSize),
    Toilet,
    Shower,
}

impl AmenityKind {
    /// Occupants this amenity adds to a room. Only beds count.
    pub fn capacity(self) -> u32 {
        match self {
            AmenityKind::Bed(size) => size.sleeps(),
            AmenityKind::Toilet | AmenityKind::Shower => 0,
        }
    }
}

/// A single piece of room inventory.
///
/// Two amenities are equal when their kinds are equal; the inventory id is
/// bookkeeping only, so a room never holds two equivalent amenities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub kind: AmenityKind,
}

impl Amenity {
    pub fn new(kind: AmenityKind) -> Self {
        Self { id: UNASSIGNED, kind }
    }
}

impl PartialEq for Amenity {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Amenity {}

impl Hash for Amenity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: RoomId,
    pub amenities: Vec<Amenity>,
}

impl Room {
    /// Build an unsaved room. Equivalent amenities collapse into one.
    pub fn new(kinds: impl IntoIterator<Item = AmenityKind>) -> Result<Self, HotelError> {
        let mut room = Self {
            id: UNASSIGNED,
            amenities: kinds.into_iter().map(Amenity::new).collect(),
        };
        room.dedup_amenities();
        if room.amenities.is_empty() {
            return Err(HotelError::FailedInitialization("room needs at least one amenity"));
        }
        Ok(room)
    }

    /// Sum of bed capacities. A room without beds sleeps nobody.
    pub fn capacity(&self) -> u32 {
        self.amenities.iter().map(|a| a.kind.capacity()).sum()
    }

    /// Drop later duplicates, keeping first-seen order.
    pub(crate) fn dedup_amenities(&mut self) {
        let mut seen = Vec::with_capacity(self.amenities.len());
        self.amenities.retain(|a| {
            if seen.contains(a) {
                false
            } else {
                seen.push(*a);
                true
            }
        });
    }
}

/// Amenities compare as a set: order is irrelevant.
impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.amenities.len() == other.amenities.len()
            && self.amenities.iter().all(|a| other.amenities.contains(a))
    }
}

impl Eq for Room {}

/// Half-open date range `[from, to)`: the guest arrives on `from` and has left by `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stay {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Stay {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn nights(&self) -> i64 {
        self.to.signed_duration_since(self.from).num_days()
    }

    /// Adjacent stays (one ends the day the other starts) do not overlap.
    pub fn overlaps(&self, other: &Stay) -> bool {
        self.from < other.to && other.from < self.to
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.from <= date && date < self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub number_of_people: u32,
    #[serde(flatten)]
    pub stay: Stay,
}

impl Booking {
    pub fn new(
        guest_id: GuestId,
        room_id: RoomId,
        number_of_people: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        Self {
            id: UNASSIGNED,
            guest_id,
            room_id,
            number_of_people,
            stay: Stay::new(from, to),
        }
    }
}

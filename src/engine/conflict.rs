use chrono::NaiveDate;

use crate::model::*;

use super::HotelError;

/// Source of "today" for the no-bookings-in-the-past rule.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub(crate) fn validate_stay(stay: &Stay, today: NaiveDate) -> Result<(), HotelError> {
    use crate::limits::MAX_STAY_NIGHTS;
    if stay.from >= stay.to {
        return Err(HotelError::InvalidArgument("stay must end after it starts"));
    }
    if stay.from < today {
        return Err(HotelError::InvalidArgument("stay must not start in the past"));
    }
    if stay.nights() > MAX_STAY_NIGHTS {
        return Err(HotelError::LimitExceeded("stay too long"));
    }
    Ok(())
}

/// Scan `existing` for a booking on `room_id` whose stay overlaps `stay`.
/// `exclude` names the booking being replaced, which never conflicts with itself.
pub(crate) fn check_no_overlap<'a>(
    existing: impl IntoIterator<Item = &'a Booking>,
    room_id: RoomId,
    stay: &Stay,
    exclude: Option<BookingId>,
) -> Result<(), HotelError> {
    let conflict = existing
        .into_iter()
        .filter(|b| b.room_id == room_id && Some(b.id) != exclude)
        .find(|b| b.stay.overlaps(stay));
    match conflict {
        Some(b) => Err(HotelError::OverlapConflict(b.id)),
        None => Ok(()),
    }
}

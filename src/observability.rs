// ── Booking engine metrics ──────────────────────────────────────

/// Counter: bookings committed, single or batched.
pub const BOOKINGS_CREATED_TOTAL: &str = "hotelier_bookings_created_total";

/// Counter: bookings changed in place. Labels: kind (`content` or `dates`).
pub const BOOKINGS_UPDATED_TOTAL: &str = "hotelier_bookings_updated_total";

/// Counter: bookings removed.
pub const BOOKINGS_DELETED_TOTAL: &str = "hotelier_bookings_deleted_total";

/// Counter: stays rejected because the room was already booked.
pub const OVERLAP_CONFLICTS_TOTAL: &str = "hotelier_overlap_conflicts_total";

/// Histogram: bookings per committed `save_all` batch.
pub const BOOKING_BATCH_SIZE: &str = "hotelier_booking_batch_size";

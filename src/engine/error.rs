use crate::model::BookingId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// Malformed input, an illegal field combination, or a forbidden mutation.
    InvalidArgument(&'static str),
    NotFound {
        kind: &'static str,
        id: u64,
    },
    /// The requested stay collides with this booking on the same room.
    OverlapConflict(BookingId),
    /// A value was constructed in a structurally invalid state.
    FailedInitialization(&'static str),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for HotelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            HotelError::NotFound { kind, id } => write!(f, "{kind} with id {id} does not exist"),
            HotelError::OverlapConflict(id) => {
                write!(f, "room is already booked for this period (booking {id})")
            }
            HotelError::FailedInitialization(msg) => write!(f, "failed initialization: {msg}"),
            HotelError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for HotelError {}

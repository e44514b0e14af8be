/// Max entries accepted by a single `save_all` call.
pub const MAX_BATCH_SIZE: usize = 1000;

/// Max bytes in a guest's first or last name.
pub const MAX_NAME_LEN: usize = 256;

/// Longest stay a single booking may cover.
pub const MAX_STAY_NIGHTS: i64 = 365;

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use hotelier::dto::Seed;
use hotelier::engine::{Clock, FixedClock, Hotel, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let seed_path = std::env::var("HOTELIER_SEED").unwrap_or_else(|_| "./seed.json".into());
    let today: Option<NaiveDate> = match std::env::var("HOTELIER_TODAY") {
        Ok(s) => Some(s.parse()?),
        Err(_) => None,
    };

    let clock: Arc<dyn Clock> = match today {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    };
    let today = clock.today();
    let hotel = Hotel::with_clock(clock);

    info!("loading seed from {seed_path}");
    info!("  today: {today}");
    let json = tokio::fs::read_to_string(&seed_path).await?;
    let report = Seed::from_json(&json)?.apply(&hotel).await?;
    info!(
        "loaded {} guests, {} rooms, {} bookings",
        report.guests, report.rooms, report.bookings
    );

    let bookings = hotel.bookings.find_all().await;
    for room in hotel.rooms.find_all().await {
        let booked: Vec<_> = bookings.iter().filter(|b| b.room_id == room.id).collect();
        let occupied = booked.iter().any(|b| b.stay.contains_date(today));
        info!(
            "room {}: capacity {}, {} bookings, {}",
            room.id,
            room.capacity(),
            booked.len(),
            if occupied { "occupied today" } else { "free today" }
        );
    }

    Ok(())
}

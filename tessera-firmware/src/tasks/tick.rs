//! Minute tick task
//!
//! Samples the wall clock once per minute and requests a repaint on
//! five-minute boundaries. The face encodes minutes in five-minute
//! buckets, so redrawing between boundaries would only reshuffle the
//! random splits without changing the encoded time.

use chrono::{DateTime, Timelike};
use defmt::*;
use embassy_time::{Duration, Instant, Ticker, Timer};

use tessera_core::TimeSample;

use crate::channels::REDRAW;

/// Tick task - samples the clock each minute and gates repaints
#[embassy_executor::task]
pub async fn tick_task(boot_epoch: i64) {
    info!("Tick task started");

    // Draw the face immediately on boot
    REDRAW.signal(sample(boot_epoch));

    // Align to the next minute boundary, then tick every minute
    let seconds_past_minute = (boot_epoch + Instant::now().as_secs() as i64).rem_euclid(60);
    Timer::after(Duration::from_secs(60 - seconds_past_minute as u64)).await;

    let mut ticker = Ticker::every(Duration::from_secs(60));
    loop {
        let now = sample(boot_epoch);
        if now.minute % 5 == 0 {
            debug!("Repaint at {}:{}", now.hour, now.minute);
            REDRAW.signal(now);
        }
        ticker.next().await;
    }
}

/// Current hour and minute derived from the boot epoch plus uptime
fn sample(boot_epoch: i64) -> TimeSample {
    let seconds = boot_epoch + Instant::now().as_secs() as i64;
    // In-range seconds always convert
    let time = DateTime::from_timestamp(seconds, 0).unwrap().time();
    TimeSample {
        hour: time.hour() as u8,
        minute: time.minute() as u8,
    }
}

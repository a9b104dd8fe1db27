//! Once-per-second UTC clock shared by the EVE clock and the countdowns.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// Interval between clock ticks in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// Current UTC time, updated on every tick. Provided as context by the app root.
#[derive(Clone, Copy)]
pub struct UtcNow(pub Signal<DateTime<Utc>>);

/// Starts the repeating tick task and returns the signal it updates.
///
/// The task belongs to the calling component: it is cancelled when that component unmounts,
/// so no interval outlives the page that started it.
pub fn use_utc_clock() -> Signal<DateTime<Utc>> {
    let now = use_signal(Utc::now);

    #[cfg(feature = "web")]
    {
        let mut now = now;
        use_future(move || async move {
            use futures::StreamExt;
            use gloo_timers::future::IntervalStream;

            let mut ticks = IntervalStream::new(TICK_INTERVAL_MS);
            while ticks.next().await.is_some() {
                now.set(Utc::now());
            }
        });
    }

    now
}

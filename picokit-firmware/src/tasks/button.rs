//! Button sampling task
//!
//! Samples the button on a fixed tick and forwards debounced events to
//! [`BUTTON_EVENTS`]. The sample interval must stay below the debounce
//! window or bounces are never seen as separate edges.

use defmt::*;
use embassy_time::{Duration, Ticker};

use super::BoardButton;
use crate::channels::BUTTON_EVENTS;

/// Button task - polls the button every `sample_interval_ms`
#[embassy_executor::task]
pub async fn button_task(mut button: BoardButton, sample_interval_ms: u32) {
    info!("Button task started ({}ms sampling)", sample_interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(sample_interval_ms as u64));

    loop {
        ticker.next().await;

        if let Some(event) = button.poll() {
            debug!("Button event: {:?}", event);
            if BUTTON_EVENTS.try_send(event).is_err() {
                warn!("Button event queue full, dropping {:?}", event);
            }
        }
    }
}

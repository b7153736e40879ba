//! Liveness LED task

use defmt::*;
use embassy_time::Delay;
use picokit_drivers::liveness_blink;
use picokit_hal_rp2040::LevelOutput;

/// Blink task - toggles the LED every `interval_ms` while the executor runs
#[embassy_executor::task]
pub async fn blink_task(mut led: LevelOutput<'static>, interval_ms: u32) {
    info!("Blink task started ({}ms)", interval_ms);

    let mut delay = Delay;
    liveness_blink(&mut led, &mut delay, interval_ms).await;
}

//! picokit - Button and LiDAR firmware
//!
//! Main firmware binary for RP2040 boards with a push button, a status
//! LED and a TF-series LiDAR on UART1. Pins and timings come from
//! board.toml, validated at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use picokit_drivers::{Button, LidarReader};
use picokit_hal::StagedByteSource;
use picokit_hal_rp2040::uart::to_rp_config;
use picokit_hal_rp2040::{EmbassyClock, LevelInput, LevelOutput, PinBank};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// UART ring buffer (must live forever)
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("picokit firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let (mut bank, board) = PinBank::split(p);
    info!("Peripherals initialized");

    // LiDAR on UART1, receive only
    let rx_buf = RX_BUF.init([0u8; 256]);
    let rx = BufferedUartRx::new(
        board.uart1,
        Irqs,
        board.lidar_rx,
        rx_buf,
        to_rp_config(&config::LIDAR_UART),
    );
    let reader = LidarReader::new(StagedByteSource::new(rx));
    info!("UART1 initialized at {} baud", config::LIDAR_UART.baudrate);

    // Button and LED from board.toml
    let button_pin = unwrap!(bank.take(config::BUTTON_PIN.pin));
    let button = Button::new(
        LevelInput::new(button_pin, config::BUTTON_PIN),
        EmbassyClock,
        config::BUTTON,
    );
    info!(
        "Button on gpio{} (debounce {}ms, long press {}ms)",
        config::BUTTON_PIN.pin,
        config::BUTTON.debounce_ms,
        config::BUTTON.long_press_ms
    );

    let led_pin = unwrap!(bank.take(config::LED_PIN.pin));
    let led = LevelOutput::new(led_pin, config::LED_PIN);
    info!("LED on gpio{}", config::LED_PIN.pin);

    // Spawn tasks
    spawner.spawn(tasks::app_task()).unwrap();
    spawner
        .spawn(tasks::button_task(button, config::BUTTON_SAMPLE_INTERVAL_MS))
        .unwrap();
    spawner
        .spawn(tasks::lidar_task(reader, config::LIDAR))
        .unwrap();
    spawner
        .spawn(tasks::blink_task(led, config::LIDAR.blink_interval_ms))
        .unwrap();

    info!("All tasks spawned");
}

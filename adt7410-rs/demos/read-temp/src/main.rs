//! Read temperature example
//!
//! Demonstrates basic usage of the adt7410 crate on the Raspberry Pi Pico 2.
//! Resets the sensor, checks its ID, switches to 16-bit resolution, sets the
//! INT/CT limits and then logs the temperature and status flags every two
//! seconds via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                          |
//! |-----------|------------|--------------------------------|
//! | I2C0 SDA  | GP20       |                                |
//! | I2C0 SCL  | GP21       |                                |
//! | A0, A1    | GND        | Address 0x48 (`DEFAULT_ADDRESS`) |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use adt7410::{Adt7410, Celsius, Resolution, DEFAULT_ADDRESS};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // --- Sensor ---
    let mut sensor = Adt7410::new(i2c, DEFAULT_ADDRESS);

    if let Err(e) = sensor.reset_and_wait(&mut Delay).await {
        error!("Reset failed: {}", e);
    }

    match sensor.read_id().await {
        Ok(id) if id.is_adt7410() => info!("ADT7410 revision {}", id.revision),
        Ok(id) => warn!("Unexpected manufacturer ID {}", id.manufacturer_id),
        Err(e) => error!("ID read failed: {}", e),
    }

    sensor
        .set_resolution(Resolution::Bits16)
        .await
        .expect("Failed to set resolution");
    sensor
        .set_int_temperature_range(Celsius(18.0), Celsius(28.0))
        .await
        .expect("Failed to set INT range");
    sensor
        .set_ct_critical_temperature(Celsius(60.0))
        .await
        .expect("Failed to set critical temperature");

    info!("Sensor configured: {}", sensor.config_state());

    // Main loop: read, log, sleep, repeat.
    loop {
        match sensor.read_celsius().await {
            Ok(t) => info!("Temperature: {} C", t.0),
            Err(e) => error!("Temperature read failed: {}", e),
        }

        match sensor.read_status().await {
            Ok(status) if status.any_limit_exceeded() => warn!("Limits exceeded: {}", status),
            Ok(_) => {}
            Err(e) => error!("Status read failed: {}", e),
        }

        Timer::after(Duration::from_millis(2000)).await;
    }
}

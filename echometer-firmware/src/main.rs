//! Echometer - Ultrasonic Ranging Firmware
//!
//! Main firmware binary for RP2040-based sensor nodes. Drives an
//! HC-SR04 ultrasonic ranger: batched, median-filtered distance
//! readings plus a debounced proximity toggle.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use echometer_core::proximity::ProximityConfig;
use echometer_drivers::sonar::{HcSr04, HcSr04Config, ProximityMonitor};
use echometer_hal_rp2040::{EchoLine, TriggerLine, UptimeClock};

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Echometer firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Ranger wiring is board-specific (TRIG: GPIO12, ECHO: GPIO2)
    let trigger = TriggerLine::new(Output::new(p.PIN_12, Level::Low));
    let echo = EchoLine::new(Input::new(p.PIN_2, Pull::None));

    let mut sensor = HcSr04::with_config(
        trigger,
        echo,
        UptimeClock::new(),
        embassy_time::Delay,
        HcSr04Config::default(),
    );
    sensor.init();
    info!("Ranger initialized (trig=GPIO12, echo=GPIO2)");

    let monitor = ProximityMonitor::new(sensor, ProximityConfig::default());

    // Spawn tasks
    spawner
        .spawn(tasks::scan_task(monitor, tasks::ScanConfig::default()))
        .unwrap();
    spawner.spawn(tasks::report_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

//! Plays a file's bytes, or a second of tone, through a libao driver.
//!
//!     cargo run --features libao --example demo -- [driver] [file]

use aodevice::{Ao, DeviceConfig, Driver, DriverKind};
use std::env;
use std::error::Error;
use std::f64::consts::PI;

fn tone(rate: u32, channels: u32) -> Vec<i16> {
    (0..rate)
        .flat_map(|i| {
            let s = (2.0 * PI * 440.0 * i as f64 / rate as f64).sin();
            std::iter::repeat((s * 8000.0) as i16).take(channels as usize)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let driver = args.next().map_or(Driver::Default, Driver::from);
    let input = args.next();

    let ao = Ao::init();
    println!("Default driver id: {}", ao.default_driver_id());
    println!("Big endian? {}", ao.is_big_endian());
    for info in ao.driver_info_list() {
        println!("  {:8} {:?} {}", info.short_name, info.kind, info.name);
    }

    let mut config = DeviceConfig::new(driver.clone());
    let info = ao.driver_info(&driver)?;
    if info.kind == Some(DriverKind::File) {
        let ext = ao.file_extension(&driver)?.unwrap_or_else(|| "out".to_owned());
        config = config.file(format!("demo.{}", ext), true);
    }

    println!("Using driver {}", info.short_name);
    let mut device = ao.open(&config)?;
    match input {
        Some(path) => device.play(&std::fs::read(path)?)?,
        None => device.play_samples(&tone(config.format.rate, config.format.channels))?,
    }
    device.close()?;
    Ok(())
}

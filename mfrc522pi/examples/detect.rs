//! Poll for cards and print every REQA exchange.
//!
//! Usage:
//!   cargo run -p mfrc522pi --example detect --features rpi -- [INTERVAL_SECS]

use std::time::Duration;

use mfrc522pi::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let interval: f64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 0.5,
    };

    let mut reader = Reader::open(ReaderConfig::default())?;
    println!("MFRC522 v{:#04x} detect example (interval={interval}s)", reader.version()?);
    println!("Press ^C to stop");

    loop {
        let res = reader.request(PiccCommand::REQUEST_IDLE)?;
        println!(
            "{} bits={} atqa={}",
            res.status.name(),
            res.bit_len,
            bytes_to_hex_prefixed(&res.atqa)
        );
        std::thread::sleep(Duration::from_secs_f64(interval));
    }
}

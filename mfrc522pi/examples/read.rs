//! Wait for a card, authenticate with the default key and read one block.
//!
//! Usage:
//!   cargo run -p mfrc522pi --example read --features rpi -- [BLOCK]

use mfrc522pi::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let block: u8 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 8,
    };

    let mut reader = Reader::open(ReaderConfig::default())?;
    println!("MFRC522 reader example");

    let card = loop {
        if let Some(card) = Card::detect(&mut reader, PiccCommand::REQUEST_IDLE)? {
            break card;
        }
    };
    println!("UID: {}", bytes_to_hex_prefixed(card.uid().as_bytes()));

    let res = card.read(&mut reader, block, &MifareKey::DEFAULT)?;
    reader.stop_crypto1()?;
    match res.block_data() {
        Some(data) => println!("{:03}: {}  |{}|", block, data.to_hex(), data.to_ascii_safe()),
        None => println!("Error reading block {}: {}", block, res.status.name()),
    }

    reader.cleanup()?;
    Ok(())
}

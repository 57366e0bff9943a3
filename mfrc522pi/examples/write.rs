//! Overwrite one block with 0xFF, read it back, then restore it.
//!
//! Usage:
//!   cargo run -p mfrc522pi --example write --features rpi -- [BLOCK]

use mfrc522pi::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let block: u8 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 8,
    };
    let key = MifareKey::DEFAULT;

    let mut reader = Reader::open(ReaderConfig::default())?;
    println!("MFRC522 write example");

    let card = loop {
        if let Some(card) = Card::detect(&mut reader, PiccCommand::REQUEST_IDLE)? {
            break card;
        }
    };
    println!("UID: {}", bytes_to_hex_prefixed(card.uid().as_bytes()));

    let auth = card.authenticate(&mut reader, AuthMode::KeyA, block, &key)?;
    if !auth.is_ok() {
        reader.cleanup()?;
        anyhow::bail!("authentication error: {}", auth.err_name());
    }

    let read = reader.read_block(block)?;
    let Some(original) = read.block_data() else {
        reader.cleanup()?;
        anyhow::bail!("error reading block {}: {}", block, read.err_name());
    };
    println!("before:   {}", original.to_hex());

    let status = reader.write_block(block, &[0xFF; 16])?;
    println!("write 0xFF x 16: {}", status.name());
    if let Some(data) = reader.read_block(block)?.block_data() {
        println!("after:    {}", data.to_hex());
    }

    let status = reader.write_block(block, original.as_bytes())?;
    println!("restore: {}", status.name());
    if let Some(data) = reader.read_block(block)?.block_data() {
        println!("restored: {}", data.to_hex());
    }

    reader.cleanup()?;
    Ok(())
}

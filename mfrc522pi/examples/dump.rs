//! Dump every block of a MIFARE Classic 1K card, optionally to a file.
//!
//! Usage:
//!   cargo run -p mfrc522pi --example dump --features rpi -- [FILENAME]

use mfrc522pi::dump;
use mfrc522pi::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output = std::env::args().nth(1);

    let mut reader = Reader::open(ReaderConfig::default())?;
    println!("MFRC522 dump example");

    let card = loop {
        if let Some(card) = Card::detect(&mut reader, PiccCommand::REQUEST_IDLE)? {
            break card;
        }
    };
    println!("UID: {} ({})", bytes_to_hex_prefixed(card.uid().as_bytes()), card.info().kind());

    println!("Dumping 1k:");
    let res = card.dump(&mut reader, &MifareKey::DEFAULT)?;
    reader.stop_crypto1()?;
    for (index, data) in &res.blocks {
        println!("{:03}: {}", index, bytes_to_hex_prefixed(data.as_bytes()));
    }

    if let Some(path) = output {
        dump::save(&path, &res.blocks)?;
        println!("Saved {} blocks to {}", res.blocks.len(), path);
    }

    reader.cleanup()?;
    Ok(())
}

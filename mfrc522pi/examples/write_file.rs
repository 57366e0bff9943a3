//! Write the blocks of a dump file to a card, authenticating each block with
//! the default key A.
//!
//! Usage:
//!   cargo run -p mfrc522pi --example write_file --features rpi -- FILENAME

use mfrc522pi::dump;
use mfrc522pi::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        anyhow::bail!("usage: write_file FILENAME");
    };
    let loaded = dump::load(&path)?;
    if !loaded.is_ok() {
        anyhow::bail!("{}: {}", path, loaded.err_name());
    }

    let mut reader = Reader::open(ReaderConfig::default())?;
    println!("MFRC522 write from file example ({} blocks)", loaded.blocks.len());

    let card = loop {
        if let Some(card) = Card::detect(&mut reader, PiccCommand::REQUEST_IDLE)? {
            break card;
        }
    };
    println!("UID: {}", bytes_to_hex_prefixed(card.uid().as_bytes()));

    let status = card.write_blocks(&mut reader, &MifareKey::DEFAULT, &loaded.blocks)?;
    reader.stop_crypto1()?;
    println!("Write: {}", status.name());

    reader.cleanup()?;
    Ok(())
}

#![cfg(feature = "rpi")]

#[path = "common.rs"]
mod common;

use mfrc522pi::protocol::{Outcome, PiccCommand};
use mfrc522pi::{MifareKey, Result};
use serial_test::serial;

// These tests require an MFRC522 wired to SPI0 CE0 with RST on BCM 25.
// They are marked `#[ignore]` so CI does not attempt to run them. Run
// manually on the Pi with:
//
// cargo test -p mfrc522pi --test hardware --features rpi -- --ignored

#[test]
#[ignore]
#[serial]
fn open_and_read_version() -> Result<()> {
    if let Some(mut reader) = common::open_and_initialize_reader()? {
        let version = reader.version()?;
        assert!(version == 0x91 || version == 0x92, "version {version:#04x}");
        reader.cleanup()?;
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn read_manufacturer_block_of_card_in_field() -> Result<()> {
    let Some(mut reader) = common::open_and_initialize_reader()? else {
        return Ok(());
    };

    if reader.request(PiccCommand::REQUEST_IDLE)?.is_ok() {
        let anti = reader.anti_collision()?;
        if let Some(uid) = anti.uid() {
            assert!(reader.select_tag(&uid)?.is_ok());
            let blocks = reader.read_blocks(&MifareKey::DEFAULT, &uid, 1)?;
            if blocks.is_ok() {
                assert_eq!(&blocks.blocks[&0].as_bytes()[..4], uid.as_bytes());
            }
        }
    }
    reader.cleanup()
}

// fixtures.rs: commonly used cards, keys and block maps

use mfrc522pi::device::{Initialized, Reader, ReaderConfig};
use mfrc522pi::test_support;
use mfrc522pi::transport::{MockTransport, SimulatedCard};
use mfrc522pi::types::{BlockData, BlocksMap, MifareKey, Uid};

pub fn sample_uid_bytes() -> [u8; 4] {
    test_support::TEST_UID
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes(sample_uid_bytes())
}

pub fn default_key() -> MifareKey {
    MifareKey::DEFAULT
}

pub fn sample_card() -> SimulatedCard {
    SimulatedCard::new(sample_uid())
}

/// Blocks 0 (all zero) and 2 (all 0xFF).
pub fn sample_blocks() -> BlocksMap {
    let mut blocks = BlocksMap::new();
    blocks.insert(0, BlockData::from_bytes([0x00; 16]));
    blocks.insert(2, BlockData::from_bytes([0xFF; 16]));
    blocks
}

pub fn patterned_block(seed: u8) -> BlockData {
    let mut bytes = [0u8; 16];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = seed.wrapping_add(i as u8);
    }
    BlockData::from_bytes(bytes)
}

pub fn reader_on(mock: &MockTransport) -> Reader<Initialized> {
    reader_on_with(mock, ReaderConfig::default())
}

pub fn reader_on_with(mock: &MockTransport, config: ReaderConfig) -> Reader<Initialized> {
    test_support::initialized_mock_reader_with(mock, config).unwrap()
}

/// A chip with the sample card in the field and a reader on top of it.
pub fn setup_default() -> (MockTransport, Reader<Initialized>) {
    test_support::reader_with_card().unwrap()
}

/// A chip with `card` in the field and a reader on top of it.
pub fn setup(card: SimulatedCard) -> (MockTransport, Reader<Initialized>) {
    let mock = MockTransport::with_card(card);
    let reader = reader_on(&mock);
    (mock, reader)
}

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Initialized, Reader, ReaderConfig};
use crate::transport::{MockResetPin, MockTransport, SimulatedCard};
use crate::types::Uid;
use crate::Result;

/// UID used by the default simulated card.
#[doc(hidden)]
pub const TEST_UID: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// Create and initialize a Reader backed by `mock`. The mock is cloned, so
/// the caller keeps a handle on the simulated chip.
#[doc(hidden)]
pub fn initialized_mock_reader(mock: &MockTransport) -> Result<Reader<Initialized>> {
    initialized_mock_reader_with(mock, ReaderConfig::default())
}

#[doc(hidden)]
pub fn initialized_mock_reader_with(
    mock: &MockTransport,
    config: ReaderConfig,
) -> Result<Reader<Initialized>> {
    let reader = Reader::new_with_transport(
        Box::new(mock.clone()),
        Box::new(MockResetPin::new()),
        config,
    )?;
    reader.initialize()
}

/// A simulated chip with a factory-fresh MIFARE Classic 1K card carrying
/// [`TEST_UID`] in the field, plus a reader on top of it.
#[doc(hidden)]
pub fn reader_with_card() -> Result<(MockTransport, Reader<Initialized>)> {
    let mock = MockTransport::with_card(SimulatedCard::new(Uid::from_bytes(TEST_UID)));
    let reader = initialized_mock_reader(&mock)?;
    Ok((mock, reader))
}

// mfrc522pi/src/protocol/results.rs
//! Per-operation result values.
//!
//! Each result carries a [`StatusCode`] next to its payload. The payload is
//! always filled in, even on failure, so callers can log what the chip
//! actually returned; it is only trustworthy when the status is OK.

use crate::protocol::status::StatusCode;
use crate::types::{BlockData, BlocksMap, Uid};

/// Common accessors for every result type.
pub trait Outcome {
    fn status(&self) -> StatusCode;

    fn is_ok(&self) -> bool {
        self.status().is_ok()
    }

    fn err_name(&self) -> &'static str {
        self.status().name()
    }
}

impl Outcome for StatusCode {
    fn status(&self) -> StatusCode {
        *self
    }
}

macro_rules! impl_outcome {
    ($($ty:ty),* $(,)?) => {
        $(impl Outcome for $ty {
            fn status(&self) -> StatusCode {
                self.status
            }
        })*
    };
}

impl_outcome!(
    TransceiveResult,
    RequestResult,
    AntiCollisionResult,
    SelectTagResult,
    AuthResult,
    ReadBlockResult,
    BlocksResult,
);

/// Raw result of one command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransceiveResult {
    pub status: StatusCode,
    /// Bytes drained from the FIFO (at most 16).
    pub data: Vec<u8>,
    /// Number of valid bits received.
    pub bit_len: usize,
}

impl TransceiveResult {
    pub fn error(status: StatusCode) -> Self {
        Self {
            status,
            data: Vec::new(),
            bit_len: 0,
        }
    }
}

/// Result of REQA / WUPA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestResult {
    pub status: StatusCode,
    /// Length of the ATQA in bits (16 when a card answered properly).
    pub bit_len: usize,
    /// ATQA bytes as received.
    pub atqa: Vec<u8>,
}

/// Result of the cascade level 1 anti-collision loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntiCollisionResult {
    pub status: StatusCode,
    /// Raw serial as received: 4 UID bytes followed by the BCC.
    pub serial: Vec<u8>,
}

impl AntiCollisionResult {
    /// The validated UID. `None` unless the status is OK.
    pub fn uid(&self) -> Option<Uid> {
        if !self.status.is_ok() {
            return None;
        }
        Uid::try_from(self.serial.get(..4)?).ok()
    }
}

/// Result of SELECT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectTagResult {
    pub status: StatusCode,
    /// First response byte (SAK). Kept even when the size check failed.
    pub tag_type: u8,
}

/// Result of a MIFARE authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthResult {
    pub status: StatusCode,
    /// Whether Status2.MFCrypto1On was set after the exchange. A clear flag is
    /// reported but does not change `status`.
    pub crypto1_on: bool,
}

/// Result of reading a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadBlockResult {
    pub status: StatusCode,
    pub block: u8,
    /// Bytes drained from the FIFO, whatever the status.
    pub data: Vec<u8>,
}

impl ReadBlockResult {
    /// The block contents when the read succeeded with exactly 16 bytes.
    pub fn block_data(&self) -> Option<BlockData> {
        if !self.status.is_ok() {
            return None;
        }
        BlockData::try_from(&self.data[..]).ok()
    }
}

/// Result of the batch helpers and of loading a dump file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlocksResult {
    pub status: StatusCode,
    pub blocks: BlocksMap,
}

// mfrc522pi/src/prelude.rs

pub use crate::card::Card;
pub use crate::card::CardInfo;
pub use crate::device::{Initialized, Reader, ReaderBuilder, ReaderConfig, Uninitialized};
pub use crate::protocol::{
    AntiCollisionResult, AuthMode, AuthResult, BlocksResult, Outcome, PcdCommand, PiccCommand,
    ReadBlockResult, RequestResult, SelectTagResult, StatusCode, TransceiveResult,
};
pub use crate::{BlockData, BlocksMap, Error, MifareKey, Result, SpiMode, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_prefixed, bytes_to_hex_spaced, parse_hex};

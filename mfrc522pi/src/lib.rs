// mfrc522pi/src/lib.rs

//! mfrc522pi
//!
//! Pure Rust driver for MFRC522 contactless card readers (MIFARE / ISO14443A)
//! attached over SPI.
#![warn(missing_docs)]

pub mod card;
pub mod device;
pub mod dump;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

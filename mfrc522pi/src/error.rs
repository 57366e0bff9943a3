// mfrc522pi/src/error.rs

use thiserror::Error;

/// 致命的なエラー型
///
/// Protocol-level failures (no card, bad CRC, NAK, ...) are reported through
/// [`crate::protocol::StatusCode`] inside each operation's result. This type
/// only covers failures of the bus, the reset line, or the filesystem.
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[cfg(feature = "rpi")]
    #[error("spi error: {0}")]
    Spi(#[from] rppal::spi::Error),

    #[cfg(feature = "rpi")]
    #[error("gpio error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

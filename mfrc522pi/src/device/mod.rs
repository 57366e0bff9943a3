// mfrc522pi/src/device/mod.rs

pub mod builder;
pub mod config;
mod crc;
pub mod handle;
mod transceive;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{Initialized, Reader, Uninitialized};
pub use transceive::{MAX_RX_LEN, received_bits};

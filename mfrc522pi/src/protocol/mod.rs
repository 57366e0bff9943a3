// mfrc522pi/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod registers;
pub mod results;
pub mod status;

pub use checksum::{bcc, crc_a};
pub use commands::{AuthMode, PcdCommand, PiccCommand};
pub use registers::Register;
pub use results::{
    AntiCollisionResult, AuthResult, BlocksResult, Outcome, ReadBlockResult, RequestResult,
    SelectTagResult, TransceiveResult,
};
pub use status::StatusCode;

//! Small helpers shared by the driver, the demo programs and the tests.

pub mod hex;

pub use hex::*;

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// mfrc522pi/src/device/builder.rs

use crate::device::config::ReaderConfig;
use crate::device::handle::{Initialized, Reader, Uninitialized};
use crate::transport::{ResetPin, Transport};
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    reset_pin: Option<Box<dyn ResetPin>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_reset_pin(mut self, reset_pin: Box<dyn ResetPin>) -> Self {
        self.reset_pin = Some(reset_pin);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    /// Without a reset pin the line is assumed to be tied high in hardware.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let reset_pin = self
            .reset_pin
            .unwrap_or_else(|| Box::new(FixedResetPin) as Box<dyn ResetPin>);
        Reader::new_with_transport(transport, reset_pin, self.config)
    }

    pub fn build(self) -> Result<Reader<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}

/// Reset line hard-wired to VCC.
struct FixedResetPin;

impl ResetPin for FixedResetPin {
    fn set_high(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        Err(Error::InvalidConfig("reset line is not connected".into()))
    }
}

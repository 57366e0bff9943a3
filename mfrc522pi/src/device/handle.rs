// mfrc522pi/src/device/handle.rs

use std::marker::PhantomData;

use crate::device::config::{self, ReaderConfig};
use crate::protocol::commands::PcdCommand;
use crate::protocol::registers::{ANTENNA_ON, Register};
use crate::transport::{ResetPin, Transport};
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
///
/// The handle owns the bus and the reset line exclusively. Register
/// read-modify-write sequences are not atomic, so a reader must never share
/// its bus with another user; wrap it in a mutex if several threads need it.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    reset_pin: Box<dyn ResetPin>,
    config: ReaderConfig,
    _state: PhantomData<State>,
}

impl Reader<Uninitialized> {
    /// Create a Reader from an already opened bus and reset line. This is
    /// how tests plug in a MockTransport.
    pub fn new_with_transport(
        transport: Box<dyn Transport>,
        reset_pin: Box<dyn ResetPin>,
        config: ReaderConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport,
            reset_pin,
            config,
            _state: PhantomData,
        })
    }

    /// Power the chip up, soft-reset it, program the timer and modulation
    /// registers and switch the antenna on.
    ///
    /// On failure the bus is closed and the reset line released before the
    /// error is returned.
    pub fn initialize(mut self) -> Result<Reader<Initialized>> {
        let powered = self.reset_pin.set_high().and_then(|()| self.configure());
        if let Err(err) = powered {
            log::error!("initialization failed: {}", err);
            self.release();
            return Err(err);
        }

        Ok(Reader {
            transport: self.transport,
            reset_pin: self.reset_pin,
            config: self.config,
            _state: PhantomData,
        })
    }
}

#[cfg(feature = "rpi")]
impl Reader<Initialized> {
    /// Open the SPI device and reset pin named in `config` and initialize
    /// the chip.
    pub fn open(config: ReaderConfig) -> Result<Self> {
        let transport = crate::transport::RppalTransport::open(&config)?;
        let reset_pin = crate::transport::RppalResetPin::open(config.reset_pin)?;
        Reader::new_with_transport(Box::new(transport), Box::new(reset_pin), config)?.initialize()
    }
}

impl<State> Reader<State> {
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Write one register. Address byte: `(addr << 1) & 0x7E`.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        log::trace!("write {:?} <- {:#04x}", reg, value);
        self.transport.transfer(reg.write_address(), value)?;
        Ok(())
    }

    /// Read one register. Address byte: `((addr << 1) & 0x7E) | 0x80`.
    pub fn read_register(&mut self, reg: Register) -> Result<u8> {
        let (_, value) = self.transport.transfer(reg.read_address(), 0)?;
        log::trace!("read {:?} -> {:#04x}", reg, value);
        Ok(value)
    }

    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current | mask)
    }

    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current & !mask)
    }

    fn release(&mut self) {
        if let Err(err) = self.transport.close() {
            log::warn!("closing bus: {}", err);
        }
        if let Err(err) = self.reset_pin.release() {
            log::warn!("releasing reset pin: {}", err);
        }
    }

    fn configure(&mut self) -> Result<()> {
        log::debug!("soft reset");
        self.write_register(Register::Command, PcdCommand::ResetPhase.code())?;

        self.write_register(Register::TMode, config::TMODE)?;
        self.write_register(Register::TPrescaler, config::TPRESCALER)?;
        self.write_register(Register::TReloadLow, config::TRELOAD_LOW)?;
        self.write_register(Register::TReloadHigh, config::TRELOAD_HIGH)?;

        self.write_register(Register::TxAuto, config::TX_AUTO)?;
        self.write_register(Register::Mode, config::MODE)?;

        self.enable_antenna()
    }

    fn enable_antenna(&mut self) -> Result<()> {
        let tx_control = self.read_register(Register::TxControl)?;
        if tx_control & ANTENNA_ON != ANTENNA_ON {
            self.write_register(Register::TxControl, tx_control | ANTENNA_ON)?;
        }
        Ok(())
    }
}

impl Reader<Initialized> {
    /// Chip version (0x91 = v1.0, 0x92 = v2.0; clones report other values).
    pub fn version(&mut self) -> Result<u8> {
        self.read_register(Register::Version)
    }

    pub fn antenna_on(&mut self) -> Result<()> {
        self.enable_antenna()
    }

    pub fn antenna_off(&mut self) -> Result<()> {
        self.clear_bits(Register::TxControl, ANTENNA_ON)
    }

    /// Soft-reset the chip and program it again.
    pub fn soft_reset(&mut self) -> Result<()> {
        self.configure()
    }

    /// Tear the reader down: switch Crypto1 off, close the bus and release
    /// the reset line. Every step runs; the first failure is reported.
    pub fn cleanup(mut self) -> Result<()> {
        let stopped = self.stop_crypto1();
        let closed = self.transport.close();
        let released = self.reset_pin.release();
        log::debug!("reader released");
        stopped.and(closed).and(released)
    }
}

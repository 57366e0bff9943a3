//! Reader configuration and the register values programmed at start-up.

use crate::types::SpiMode;
use crate::{Error, Result};

/// Default SPI device node.
pub const DEFAULT_DEVICE: &str = "/dev/spidev0.0";

/// Default SPI clock (Hz).
pub const DEFAULT_SPEED_HZ: u32 = 1_000_000;

/// Default reset pin, BCM numbering (physical pin 22 on the 40-pin header).
pub const DEFAULT_RESET_PIN: u8 = 25;

/// CommIrq polls before a command is considered timed out.
pub const TRANSCEIVE_BUDGET: u32 = 2000;

/// DivIrq polls before the CRC coprocessor result is read regardless.
pub const CRC_BUDGET: u32 = 255;

/// Timer setup: TAuto=1, prescaler 0xD3E -> ~2 kHz timer.
pub const TMODE: u8 = 0x8D;
pub const TPRESCALER: u8 = 0x3E;
/// Reload value 30 -> ~15 ms before the timer interrupt.
pub const TRELOAD_LOW: u8 = 30;
pub const TRELOAD_HIGH: u8 = 0;

/// Force 100% ASK modulation.
pub const TX_AUTO: u8 = 0x40;

/// CRC coprocessor preset 0x6363 (ISO 14443-3).
pub const MODE: u8 = 0x3D;

/// Everything needed to open and drive one reader.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    pub device: String,
    pub speed_hz: u32,
    pub mode: SpiMode,
    pub reset_pin: u8,
    pub transceive_budget: u32,
    pub crc_budget: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            speed_hz: DEFAULT_SPEED_HZ,
            mode: SpiMode::Mode0,
            reset_pin: DEFAULT_RESET_PIN,
            transceive_budget: TRANSCEIVE_BUDGET,
            crc_budget: CRC_BUDGET,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_speed_hz(mut self, speed_hz: u32) -> Self {
        self.speed_hz = speed_hz;
        self
    }

    pub fn with_mode(mut self, mode: SpiMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_reset_pin(mut self, reset_pin: u8) -> Self {
        self.reset_pin = reset_pin;
        self
    }

    pub fn with_transceive_budget(mut self, budget: u32) -> Self {
        self.transceive_budget = budget;
        self
    }

    pub fn with_crc_budget(mut self, budget: u32) -> Self {
        self.crc_budget = budget;
        self
    }

    /// Reject settings the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.speed_hz == 0 {
            return Err(Error::InvalidConfig("spi clock must be non-zero".into()));
        }
        if self.transceive_budget == 0 || self.crc_budget == 0 {
            return Err(Error::InvalidConfig(
                "polling budgets must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Bus and slave-select numbers of a `/dev/spidevB.S` device path.
    pub fn spidev_numbers(&self) -> Result<(u8, u8)> {
        let invalid = || Error::InvalidConfig(format!("not a spidev path: {}", self.device));
        let name = self.device.rsplit('/').next().ok_or_else(invalid)?;
        let numbers = name.strip_prefix("spidev").ok_or_else(invalid)?;
        let (bus, slave) = numbers.split_once('.').ok_or_else(invalid)?;
        let bus = bus.parse::<u8>().map_err(|_| invalid())?;
        let slave = slave.parse::<u8>().map_err(|_| invalid())?;
        Ok((bus, slave))
    }
}

// mfrc522pi/src/transport/rpi/mod.rs

#![cfg(feature = "rpi")]

//! Raspberry Pi backend built on `rppal`: hardware SPI for the bus and a
//! GPIO output for the reset line. Feature-gated behind `--features rpi`.

use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

use crate::device::ReaderConfig;
use crate::transport::traits::{ResetPin, Transport};
use crate::types::SpiMode;
use crate::{Error, Result};

/// SPI transport over `/dev/spidevB.S`.
pub struct RppalTransport {
    spi: Option<Spi>,
}

impl RppalTransport {
    /// Open the SPI device named in `config` with its mode and clock.
    pub fn open(config: &ReaderConfig) -> Result<Self> {
        let (bus, slave) = config.spidev_numbers()?;
        let bus = match bus {
            0 => Bus::Spi0,
            1 => Bus::Spi1,
            2 => Bus::Spi2,
            3 => Bus::Spi3,
            4 => Bus::Spi4,
            5 => Bus::Spi5,
            6 => Bus::Spi6,
            _ => return Err(Error::InvalidConfig(format!("unsupported spi bus {}", bus))),
        };
        let slave = match slave {
            0 => SlaveSelect::Ss0,
            1 => SlaveSelect::Ss1,
            2 => SlaveSelect::Ss2,
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "unsupported slave select {}",
                    slave
                )));
            }
        };
        let mode = match config.mode {
            SpiMode::Mode0 => Mode::Mode0,
            SpiMode::Mode1 => Mode::Mode1,
            SpiMode::Mode2 => Mode::Mode2,
            SpiMode::Mode3 => Mode::Mode3,
        };

        log::debug!(
            "opening {} at {} Hz ({:?})",
            config.device,
            config.speed_hz,
            config.mode
        );
        let spi = Spi::new(bus, slave, config.speed_hz, mode)?;
        Ok(Self { spi: Some(spi) })
    }
}

impl Transport for RppalTransport {
    fn transfer(&mut self, address: u8, value: u8) -> Result<(u8, u8)> {
        let spi = self
            .spi
            .as_ref()
            .ok_or_else(|| Error::Transport("spi device closed".into()))?;
        let tx = [address, value];
        let mut rx = [0u8; 2];
        spi.transfer(&mut rx, &tx)?;
        Ok((rx[0], rx[1]))
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle closes the spidev file descriptor.
        self.spi = None;
        Ok(())
    }
}

/// Reset line on a BCM-numbered GPIO pin.
pub struct RppalResetPin {
    pin: Option<OutputPin>,
}

impl RppalResetPin {
    pub fn open(bcm_pin: u8) -> Result<Self> {
        let mut pin = Gpio::new()?.get(bcm_pin)?.into_output();
        // Leave the chip powered if the process exits without cleanup.
        pin.set_reset_on_drop(false);
        Ok(Self { pin: Some(pin) })
    }

    fn pin(&mut self) -> Result<&mut OutputPin> {
        self.pin
            .as_mut()
            .ok_or_else(|| Error::Transport("reset pin released".into()))
    }
}

impl ResetPin for RppalResetPin {
    fn set_high(&mut self) -> Result<()> {
        self.pin()?.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin()?.set_low();
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if let Some(mut pin) = self.pin.take() {
            // Restore the pin's original mode on drop.
            pin.set_reset_on_drop(true);
        }
        Ok(())
    }
}

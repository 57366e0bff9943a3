// mfrc522pi/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the SPI bus away from the register/protocol logic.
///
/// Every MFRC522 register access is a single two-byte full-duplex frame: the
/// address byte goes out first, the value (or a dummy byte for reads) second.
pub trait Transport {
    /// Exchange one address byte and one value byte. Returns the two bytes
    /// clocked in at the same time: `(status, returned)`.
    fn transfer(&mut self, address: u8, value: u8) -> Result<(u8, u8)>;

    /// Release the bus. Called once when the reader is torn down.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Digital output wired to the chip's NRSTPD (reset / power-down) pin.
pub trait ResetPin {
    fn set_high(&mut self) -> Result<()>;

    fn set_low(&mut self) -> Result<()>;

    /// Give the pin back to the system. Called once at teardown.
    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

// mfrc522pi/src/device/crc.rs

use crate::device::handle::{Initialized, Reader};
use crate::protocol::commands::PcdCommand;
use crate::protocol::registers::{CRC_IRQ, FLUSH_BUFFER, Register};
use crate::Result;

impl Reader<Initialized> {
    /// Run the on-chip CRC_A coprocessor over `data`.
    ///
    /// Returns `[low, high]`, ready to be appended to a frame. When the
    /// coprocessor does not finish within the configured budget the
    /// registers are read anyway and the (possibly stale) value is returned.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        // DivIrq is Set2: a written 1 with bit 7 low clears that flag.
        self.write_register(Register::DivIrq, CRC_IRQ)?;
        self.set_bits(Register::FifoLevel, FLUSH_BUFFER)?;

        for &byte in data {
            self.write_register(Register::FifoData, byte)?;
        }
        self.write_register(Register::Command, PcdCommand::CalcCrc.code())?;

        let mut remaining = self.config().crc_budget;
        loop {
            let irq = self.read_register(Register::DivIrq)?;
            remaining -= 1;
            if remaining == 0 || irq & CRC_IRQ != 0 {
                break;
            }
        }
        if remaining == 0 {
            log::warn!("CRC coprocessor did not finish after {} polls", self.config().crc_budget);
        }

        let low = self.read_register(Register::CrcResultLow)?;
        let high = self.read_register(Register::CrcResultHigh)?;
        Ok([low, high])
    }
}

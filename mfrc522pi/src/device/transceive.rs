// mfrc522pi/src/device/transceive.rs

use crate::device::handle::{Initialized, Reader};
use crate::protocol::commands::PcdCommand;
use crate::protocol::registers::{
    ERROR_MASK, FLUSH_BUFFER, IRQ_SET, RX_LAST_BITS, Register, START_SEND, TIMER_IRQ,
};
use crate::protocol::{StatusCode, TransceiveResult};
use crate::Result;

/// FIFO bytes drained after a reception.
pub const MAX_RX_LEN: usize = 16;

/// Number of valid bits in a reception of `fifo_level` bytes whose last byte
/// carries `last_bits` valid bits (0 = whole byte).
pub fn received_bits(fifo_level: u8, last_bits: u8) -> usize {
    let level = fifo_level as usize;
    let last = (last_bits & RX_LAST_BITS) as usize;
    if last != 0 {
        level.saturating_sub(1) * 8 + last
    } else {
        level * 8
    }
}

impl Reader<Initialized> {
    /// Execute one MFRC522 command with `payload` in the FIFO and collect
    /// what came back.
    ///
    /// Chip level failures (timeout, error register) are reported through
    /// the status of the result; `Err` is reserved for bus failures.
    pub fn transceive(&mut self, command: PcdCommand, payload: &[u8]) -> Result<TransceiveResult> {
        let irq_en = command.irq_enable();
        let wait = command.irq_wait();

        self.write_register(Register::CommIEn, irq_en | IRQ_SET)?;
        self.clear_bits(Register::CommIrq, IRQ_SET)?;
        self.set_bits(Register::FifoLevel, FLUSH_BUFFER)?;

        self.write_register(Register::Command, PcdCommand::Idle.code())?;
        for &byte in payload {
            self.write_register(Register::FifoData, byte)?;
        }
        self.write_register(Register::Command, command.code())?;

        if command == PcdCommand::Transceive {
            self.set_bits(Register::BitFraming, START_SEND)?;
        }

        let budget = self.config().transceive_budget;
        let mut remaining = budget;
        let mut irq;
        loop {
            irq = self.read_register(Register::CommIrq)?;
            remaining -= 1;
            if remaining == 0 || irq & TIMER_IRQ != 0 || irq & wait != 0 {
                break;
            }
        }

        self.clear_bits(Register::BitFraming, START_SEND)?;

        if remaining == 0 {
            log::warn!("{:?}: no completion after {} polls", command, budget);
            return Ok(TransceiveResult::error(StatusCode::TransceiveError));
        }

        let error = self.read_register(Register::Error)?;
        if error & ERROR_MASK != 0 {
            log::debug!("{:?}: error register {:#04x}", command, error);
            return Ok(TransceiveResult::error(StatusCode::TransceiveError));
        }

        let status = if irq & irq_en & TIMER_IRQ != 0 {
            StatusCode::NoTagError
        } else {
            StatusCode::Ok
        };

        let mut data = Vec::new();
        let mut bit_len = 0;
        if command == PcdCommand::Transceive {
            let level = self.read_register(Register::FifoLevel)?;
            let last_bits = self.read_register(Register::Control)? & RX_LAST_BITS;
            bit_len = received_bits(level, last_bits);

            let count = (level as usize).clamp(1, MAX_RX_LEN);
            data.reserve(count);
            for _ in 0..count {
                data.push(self.read_register(Register::FifoData)?);
            }
        }

        log::trace!("{:?} -> {} ({} bits) {:02X?}", command, status, bit_len, data);
        Ok(TransceiveResult {
            status,
            data,
            bit_len,
        })
    }
}

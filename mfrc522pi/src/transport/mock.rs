// mfrc522pi/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::protocol::checksum::crc_a;
use crate::protocol::commands::PcdCommand;
use crate::protocol::registers::{
    self, CRC_IRQ, FLUSH_BUFFER, IDLE_IRQ, IRQ_SET, MF_CRYPTO1_ON, Register, START_SEND,
};
use crate::transport::sim_card::{PROTOCOL_ERROR, SimReply, SimulatedCard};
use crate::transport::traits::{ResetPin, Transport};
use crate::{Error, Result};

/// Value of the Version register of a genuine MFRC522 v2.
pub const SIM_VERSION: u8 = 0x92;

/// Register-level simulation of an MFRC522 behind an SPI bus, for unit tests.
///
/// Commands execute synchronously when they are written, so the interrupt
/// bits are already final by the time the driver starts polling. Clones share
/// the same chip, which lets a test keep a handle after the reader has taken
/// ownership of the transport.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    chip: Rc<RefCell<SimulatedChip>>,
}

#[derive(Debug)]
struct SimulatedChip {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    card: Option<SimulatedCard>,
    replies: VecDeque<SimReply>,
    /// Every (address, value) pair clocked out.
    transfers: Vec<(u8, u8)>,
    /// (command, FIFO contents) for each Transceive/Authenticate executed.
    frames: Vec<(PcdCommand, Vec<u8>)>,
    fail_after: Option<usize>,
    crc_stalled: bool,
    crypto1_held_off: bool,
    closed: bool,
}

impl Default for SimulatedChip {
    fn default() -> Self {
        let mut chip = Self {
            regs: [0; 64],
            fifo: VecDeque::new(),
            card: None,
            replies: VecDeque::new(),
            transfers: Vec::new(),
            frames: Vec::new(),
            fail_after: None,
            crc_stalled: false,
            crypto1_held_off: false,
            closed: false,
        };
        chip.power_on_reset();
        chip
    }
}

impl MockTransport {
    /// A chip with no card in the field.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chip with `card` in the field.
    pub fn with_card(card: SimulatedCard) -> Self {
        let mock = Self::new();
        mock.insert_card(card);
        mock
    }

    pub fn insert_card(&self, card: SimulatedCard) {
        self.chip.borrow_mut().card = Some(card);
    }

    pub fn remove_card(&self) -> Option<SimulatedCard> {
        self.chip.borrow_mut().card.take()
    }

    /// Run `f` against the card in the field, if any.
    pub fn with_card_mut<R>(&self, f: impl FnOnce(&mut SimulatedCard) -> R) -> Option<R> {
        self.chip.borrow_mut().card.as_mut().map(f)
    }

    /// Queue a scripted reply. Scripted replies take precedence over the card
    /// for transceive exchanges, in FIFO order.
    pub fn push_reply(&self, reply: SimReply) {
        self.chip.borrow_mut().replies.push_back(reply);
    }

    /// Make the CRC coprocessor never signal completion.
    pub fn stall_crc(&self, stalled: bool) {
        self.chip.borrow_mut().crc_stalled = stalled;
    }

    /// Let authentication succeed without raising Status2.MFCrypto1On.
    pub fn hold_crypto1_off(&self, held: bool) {
        self.chip.borrow_mut().crypto1_held_off = held;
    }

    /// Fail every transfer after `n` more successful ones.
    pub fn fail_after(&self, n: usize) {
        let mut chip = self.chip.borrow_mut();
        let done = chip.transfers.len();
        chip.fail_after = Some(done + n);
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.chip.borrow().regs[reg.offset() as usize]
    }

    pub fn set_register(&self, reg: Register, value: u8) {
        self.chip.borrow_mut().regs[reg.offset() as usize] = value;
    }

    pub fn transfer_count(&self) -> usize {
        self.chip.borrow().transfers.len()
    }

    pub fn transfers(&self) -> Vec<(u8, u8)> {
        self.chip.borrow().transfers.clone()
    }

    /// Values written to `reg`, in order.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        let address = reg.write_address();
        self.chip
            .borrow()
            .transfers
            .iter()
            .filter(|(a, _)| *a == address)
            .map(|(_, v)| *v)
            .collect()
    }

    /// Frames handed to the card, with the command that carried them.
    pub fn frames(&self) -> Vec<(PcdCommand, Vec<u8>)> {
        self.chip.borrow().frames.clone()
    }

    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.chip.borrow().frames.last().map(|(_, f)| f.clone())
    }

    pub fn clear_log(&self) {
        let mut chip = self.chip.borrow_mut();
        chip.transfers.clear();
        chip.frames.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.chip.borrow().closed
    }
}

impl Transport for MockTransport {
    fn transfer(&mut self, address: u8, value: u8) -> Result<(u8, u8)> {
        let mut chip = self.chip.borrow_mut();
        if chip.closed {
            return Err(Error::Transport("bus closed".into()));
        }
        if chip.fail_after.is_some_and(|limit| chip.transfers.len() >= limit) {
            return Err(Error::Transport("simulated bus failure".into()));
        }
        chip.transfers.push((address, value));

        let (reg, read) = Register::from_address(address);
        if read {
            Ok((0x00, chip.read(reg)))
        } else {
            chip.write(reg, value);
            Ok((0x00, 0x00))
        }
    }

    fn close(&mut self) -> Result<()> {
        self.chip.borrow_mut().closed = true;
        Ok(())
    }
}

impl SimulatedChip {
    fn power_on_reset(&mut self) {
        self.regs = [0; 64];
        self.regs[Register::Command.offset() as usize] = 0x20;
        self.regs[Register::CommIEn.offset() as usize] = 0x80;
        self.regs[Register::Control.offset() as usize] = 0x10;
        self.regs[Register::Mode.offset() as usize] = 0x3F;
        self.regs[Register::TxControl.offset() as usize] = 0x80;
        self.regs[Register::Version.offset() as usize] = SIM_VERSION;
        self.fifo.clear();
    }

    fn reg(&mut self, reg: Register) -> &mut u8 {
        &mut self.regs[reg.offset() as usize]
    }

    fn read(&mut self, reg: Register) -> u8 {
        match reg {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => self.fifo.len().min(0x7F) as u8,
            _ => self.regs[reg.offset() as usize],
        }
    }

    fn write(&mut self, reg: Register, value: u8) {
        match reg {
            Register::FifoData => self.fifo.push_back(value),
            Register::FifoLevel => {
                if value & FLUSH_BUFFER != 0 {
                    self.fifo.clear();
                }
            }
            // Set1/Set2: bit 7 decides whether the marked bits are set or cleared.
            Register::CommIrq | Register::DivIrq => {
                let marked = value & !IRQ_SET;
                if value & IRQ_SET != 0 {
                    *self.reg(reg) |= marked;
                } else {
                    *self.reg(reg) &= !marked;
                }
            }
            // read-only
            Register::Error | Register::Status1 | Register::Version => {}
            Register::Command => {
                *self.reg(reg) = (self.regs[reg.offset() as usize] & 0xF0) | (value & 0x0F);
                self.execute(value & 0x0F);
            }
            Register::BitFraming => {
                *self.reg(reg) = value;
                let transceiving =
                    self.regs[Register::Command.offset() as usize] & 0x0F == PcdCommand::Transceive.code();
                if value & START_SEND != 0 && transceiving {
                    self.transceive(value & 0x07);
                }
            }
            Register::Status2 => {
                let crypto_was_on = self.regs[reg.offset() as usize] & MF_CRYPTO1_ON != 0;
                *self.reg(reg) = value;
                if crypto_was_on && value & MF_CRYPTO1_ON == 0 {
                    if let Some(card) = self.card.as_mut() {
                        card.reset_session();
                    }
                }
            }
            _ => *self.reg(reg) = value,
        }
    }

    fn execute(&mut self, command: u8) {
        if command == PcdCommand::ResetPhase.code() {
            let card = self.card.take();
            self.power_on_reset();
            self.card = card;
            if let Some(card) = self.card.as_mut() {
                card.reset_session();
            }
        } else if command == PcdCommand::CalcCrc.code() {
            if self.crc_stalled {
                return;
            }
            let data: Vec<u8> = self.fifo.drain(..).collect();
            let [low, high] = crc_a(&data);
            *self.reg(Register::CrcResultLow) = low;
            *self.reg(Register::CrcResultHigh) = high;
            *self.reg(Register::DivIrq) |= CRC_IRQ;
            self.idle();
        } else if command == PcdCommand::Authenticate.code() {
            let frame: Vec<u8> = self.fifo.drain(..).collect();
            self.frames.push((PcdCommand::Authenticate, frame.clone()));
            *self.reg(Register::Error) = 0;
            let ok = self
                .card
                .as_mut()
                .is_some_and(|card| card.authenticate(&frame));
            if ok && !self.crypto1_held_off {
                *self.reg(Register::Status2) |= MF_CRYPTO1_ON;
            } else {
                *self.reg(Register::Status2) &= !MF_CRYPTO1_ON;
            }
            if !ok {
                *self.reg(Register::Error) = PROTOCOL_ERROR;
            }
            *self.reg(Register::CommIrq) |= IDLE_IRQ;
            self.idle();
        }
    }

    fn transceive(&mut self, tx_last_bits: u8) {
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        self.frames.push((PcdCommand::Transceive, frame.clone()));

        let reply = match self.replies.pop_front() {
            Some(scripted) => scripted,
            None => self
                .card
                .as_mut()
                .and_then(|card| card.respond(&frame, tx_last_bits))
                .unwrap_or_else(SimReply::timeout),
        };

        *self.reg(Register::Error) = reply.error;
        self.fifo.extend(reply.data.iter().copied());
        let control = self.regs[Register::Control.offset() as usize];
        *self.reg(Register::Control) = (control & !registers::RX_LAST_BITS) | reply.last_bits;
        *self.reg(Register::CommIrq) |= reply.irq;
    }

    fn idle(&mut self) {
        let command = self.regs[Register::Command.offset() as usize];
        *self.reg(Register::Command) = command & 0xF0;
    }
}

/// Reset pin stand-in that remembers how it was driven. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockResetPin {
    state: Rc<RefCell<PinState>>,
}

#[derive(Debug, Default)]
struct PinState {
    high: bool,
    released: bool,
    levels: Vec<bool>,
}

impl MockResetPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_high(&self) -> bool {
        self.state.borrow().high
    }

    pub fn is_released(&self) -> bool {
        self.state.borrow().released
    }

    /// Every level driven, oldest first.
    pub fn levels(&self) -> Vec<bool> {
        self.state.borrow().levels.clone()
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.released {
            return Err(Error::Transport("reset pin released".into()));
        }
        state.high = high;
        state.levels.push(high);
        Ok(())
    }
}

impl ResetPin for MockResetPin {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn release(&mut self) -> Result<()> {
        self.state.borrow_mut().released = true;
        Ok(())
    }
}

// mfrc522pi/src/transport/sim_card.rs

//! A MIFARE Classic 1K card as seen through the MFRC522's FIFO.
//!
//! The model answers the frames this driver sends (REQA/WUPA, cascade level 1
//! anti-collision and select, authenticate, read, two-phase write) and lets
//! tests inject failures per block. Crypto1 is not modelled: once
//! authenticated, frames are exchanged in the clear.

use std::collections::BTreeSet;

use crate::protocol::checksum::crc_a;
use crate::protocol::commands::{MIFARE_ACK, NVB_ANTI_COLLISION, NVB_SELECT, PiccCommand};
use crate::protocol::registers::{IDLE_IRQ, RX_IRQ, TIMER_IRQ};
use crate::types::{BlockData, BlocksMap, CLASSIC_1K_BLOCKS, MifareKey, Uid};

/// MIFARE NAK nibble (invalid operation / not allowed).
const MIFARE_NAK: u8 = 0x04;

/// Error register value reported for a corrupted reception (ParityErr).
pub const PARITY_ERROR: u8 = 0x02;
/// Error register value reported for a failed authentication (ProtocolErr).
pub const PROTOCOL_ERROR: u8 = 0x01;

/// What the chip sees after one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimReply {
    /// Bytes placed into the FIFO.
    pub data: Vec<u8>,
    /// RxLastBits reported in the Control register.
    pub last_bits: u8,
    /// Value of the Error register.
    pub error: u8,
    /// CommIrq bits raised.
    pub irq: u8,
}

impl SimReply {
    /// A complete frame of whole bytes.
    pub fn frame(data: Vec<u8>) -> Self {
        Self::bits(data, 0)
    }

    /// A frame whose last byte carries only `last_bits` valid bits.
    pub fn bits(data: Vec<u8>, last_bits: u8) -> Self {
        Self {
            data,
            last_bits: last_bits & 0x07,
            error: 0,
            irq: RX_IRQ | IDLE_IRQ,
        }
    }

    /// Reception finished but the Error register flags a fault.
    pub fn error(error: u8) -> Self {
        Self {
            data: Vec::new(),
            last_bits: 0,
            error,
            irq: RX_IRQ | IDLE_IRQ,
        }
    }

    /// No card answered before the chip's timer expired.
    pub fn timeout() -> Self {
        Self {
            data: Vec::new(),
            last_bits: 0,
            error: 0,
            irq: TIMER_IRQ,
        }
    }

    /// The command never completes; only the polling budget ends the wait.
    pub fn silent() -> Self {
        Self {
            data: Vec::new(),
            last_bits: 0,
            error: 0,
            irq: 0,
        }
    }

    fn ack() -> Self {
        Self::bits(vec![MIFARE_ACK], 4)
    }

    fn nak() -> Self {
        Self::bits(vec![MIFARE_NAK], 4)
    }
}

/// Simulated MIFARE Classic 1K card.
#[derive(Debug, Clone)]
pub struct SimulatedCard {
    pub uid: Uid,
    pub atqa: [u8; 2],
    pub sak: u8,
    pub key_a: MifareKey,
    pub key_b: MifareKey,
    pub blocks: BlocksMap,
    /// Blocks whose authentication always fails.
    pub fail_auth: BTreeSet<u8>,
    /// Blocks whose read reply arrives with a parity error.
    pub fail_read: BTreeSet<u8>,
    /// Blocks that NAK the write command.
    pub nak_write: BTreeSet<u8>,
    /// Send a wrong BCC during anti-collision.
    pub corrupt_bcc: bool,
    authenticated_sector: Option<u8>,
    pending_write: Option<u8>,
}

impl SimulatedCard {
    pub fn new(uid: Uid) -> Self {
        let atqa = [0x04, 0x00];
        let sak = 0x08;
        let key_a = MifareKey::DEFAULT;
        let key_b = MifareKey::DEFAULT;

        let mut blocks = BlocksMap::new();
        for index in 0..CLASSIC_1K_BLOCKS {
            let mut bytes = [0u8; 16];
            if index == 0 {
                bytes[..5].copy_from_slice(&uid.serial_with_bcc());
                bytes[5] = sak;
                bytes[6..8].copy_from_slice(&atqa);
            } else if index % 4 == 3 {
                bytes[..6].copy_from_slice(key_a.as_bytes());
                bytes[6..10].copy_from_slice(&[0xFF, 0x07, 0x80, 0x69]);
                bytes[10..].copy_from_slice(key_b.as_bytes());
            }
            blocks.insert(index, BlockData::from_bytes(bytes));
        }

        Self {
            uid,
            atqa,
            sak,
            key_a,
            key_b,
            blocks,
            fail_auth: BTreeSet::new(),
            fail_read: BTreeSet::new(),
            nak_write: BTreeSet::new(),
            corrupt_bcc: false,
            authenticated_sector: None,
            pending_write: None,
        }
    }

    pub fn block(&self, index: u8) -> Option<&BlockData> {
        self.blocks.get(&index)
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated_sector.is_some()
    }

    /// Forget authentication, as when the reader switches Crypto1 off.
    pub fn reset_session(&mut self) {
        self.authenticated_sector = None;
        self.pending_write = None;
    }

    /// MFAuthent: `[mode, block, key(6), uid(4)]`.
    pub(crate) fn authenticate(&mut self, frame: &[u8]) -> bool {
        self.authenticated_sector = None;
        self.pending_write = None;
        if frame.len() != 12 {
            return false;
        }
        let block = frame[1];
        let key = if frame[0] == PiccCommand::AUTHENT_KEY_A.code() {
            &self.key_a
        } else if frame[0] == PiccCommand::AUTHENT_KEY_B.code() {
            &self.key_b
        } else {
            return false;
        };
        let ok = &frame[2..8] == key.as_bytes()
            && &frame[8..12] == self.uid.as_bytes()
            && block < CLASSIC_1K_BLOCKS
            && !self.fail_auth.contains(&block);
        if ok {
            self.authenticated_sector = Some(block / 4);
        }
        ok
    }

    /// Answer one transceive frame. `None` means the card stays silent.
    pub(crate) fn respond(&mut self, frame: &[u8], tx_last_bits: u8) -> Option<SimReply> {
        if let Some(block) = self.pending_write.take() {
            return Some(self.write_data(block, frame));
        }

        match frame {
            [cmd] if tx_last_bits == 7 => {
                let cmd = PiccCommand::new(*cmd);
                if cmd == PiccCommand::REQUEST_IDLE || cmd == PiccCommand::REQUEST_ALL {
                    Some(SimReply::frame(self.atqa.to_vec()))
                } else {
                    None
                }
            }
            [sel, NVB_ANTI_COLLISION] if *sel == PiccCommand::ANTI_COLLISION.code() => {
                let mut serial = self.uid.serial_with_bcc().to_vec();
                if self.corrupt_bcc {
                    serial[4] ^= 0xFF;
                }
                Some(SimReply::frame(serial))
            }
            [sel, NVB_SELECT, rest @ ..] if *sel == PiccCommand::SELECT_TAG.code() => {
                if !crc_ok(frame) || rest.len() != 7 || rest[..5] != self.uid.serial_with_bcc() {
                    return None;
                }
                Some(SimReply::frame(with_crc(&[self.sak])))
            }
            [cmd, block, _, _] if *cmd == PiccCommand::READ.code() => {
                if !crc_ok(frame) {
                    return None;
                }
                if self.fail_read.contains(block) {
                    return Some(SimReply::error(PARITY_ERROR));
                }
                if !self.may_access(*block) {
                    return Some(SimReply::nak());
                }
                let data = self.blocks.get(block).copied().unwrap_or_default();
                Some(SimReply::frame(with_crc(data.as_bytes())))
            }
            [cmd, block, _, _] if *cmd == PiccCommand::WRITE.code() => {
                if !crc_ok(frame) || !self.may_access(*block) || self.nak_write.contains(block) {
                    return Some(SimReply::nak());
                }
                self.pending_write = Some(*block);
                Some(SimReply::ack())
            }
            _ => None,
        }
    }

    fn write_data(&mut self, block: u8, frame: &[u8]) -> SimReply {
        if frame.len() != BlockData::LEN + 2 || !crc_ok(frame) {
            return SimReply::nak();
        }
        match BlockData::try_from(&frame[..BlockData::LEN]) {
            Ok(data) => {
                self.blocks.insert(block, data);
                SimReply::ack()
            }
            Err(_) => SimReply::nak(),
        }
    }

    fn may_access(&self, block: u8) -> bool {
        block < CLASSIC_1K_BLOCKS && self.authenticated_sector == Some(block / 4)
    }
}

fn with_crc(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.extend_from_slice(&crc_a(data));
    out
}

fn crc_ok(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }
    let (body, crc) = frame.split_at(frame.len() - 2);
    crc_a(body) == [crc[0], crc[1]]
}

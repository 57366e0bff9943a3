// mfrc522pi/src/protocol/commands.rs

/// Commands executed by the MFRC522 itself (written to the Command register).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PcdCommand {
    /// No action, cancels the current command.
    Idle = 0x00,
    /// Calculate CRC16 over the FIFO contents.
    CalcCrc = 0x03,
    /// Transmit the FIFO contents.
    Transmit = 0x04,
    /// Activate the receiver.
    Receive = 0x08,
    /// Transmit the FIFO contents and activate the receiver afterwards.
    Transceive = 0x0C,
    /// MIFARE standard authentication as a reader.
    Authenticate = 0x0E,
    /// Soft reset.
    ResetPhase = 0x0F,
}

impl PcdCommand {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Interrupt-enable mask written to CommIEn before the command runs.
    pub fn irq_enable(self) -> u8 {
        match self {
            Self::Authenticate => 0x12,
            Self::Transceive => 0x77,
            _ => 0x00,
        }
    }

    /// CommIrq bits that mark completion of the command.
    pub fn irq_wait(self) -> u8 {
        match self {
            Self::Authenticate => 0x10,
            Self::Transceive => 0x30,
            _ => 0x00,
        }
    }
}

/// Card-facing opcodes (sent through the FIFO with a transceive or
/// authenticate command).
///
/// Anti-collision and select share opcode 0x93 (cascade level 1); the chip
/// tells them apart by the NVB byte that follows. Both names are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiccCommand(u8);

impl PiccCommand {
    /// REQA, 7-bit frame: wake cards in IDLE state.
    pub const REQUEST_IDLE: Self = Self(0x26);
    /// WUPA, 7-bit frame: wake cards in IDLE and HALT state.
    pub const REQUEST_ALL: Self = Self(0x52);
    pub const ANTI_COLLISION: Self = Self(0x93);
    pub const SELECT_TAG: Self = Self(0x93);
    pub const AUTHENT_KEY_A: Self = Self(0x60);
    pub const AUTHENT_KEY_B: Self = Self(0x61);
    pub const READ: Self = Self(0x30);
    pub const WRITE: Self = Self(0xA0);
    pub const DECREMENT: Self = Self(0xC0);
    pub const INCREMENT: Self = Self(0xC1);
    pub const RESTORE: Self = Self(0xC2);
    pub const TRANSFER: Self = Self(0xB0);
    pub const HALT: Self = Self(0x50);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u8 {
        self.0
    }
}

/// Which sector key to authenticate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthMode {
    #[default]
    KeyA,
    KeyB,
}

impl AuthMode {
    pub fn command(self) -> PiccCommand {
        match self {
            Self::KeyA => PiccCommand::AUTHENT_KEY_A,
            Self::KeyB => PiccCommand::AUTHENT_KEY_B,
        }
    }
}

/// NVB for an anti-collision frame: 2 bytes sent, no UID bits.
pub const NVB_ANTI_COLLISION: u8 = 0x20;
/// NVB for a select frame: 7 bytes sent (full UID + BCC).
pub const NVB_SELECT: u8 = 0x70;
/// Lower nibble of a MIFARE positive acknowledgement.
pub const MIFARE_ACK: u8 = 0x0A;

// mfrc522pi/src/protocol/status.rs

use derive_more::Display;

/// Outcome of a protocol-level operation.
///
/// Exactly one code describes each outcome; the numeric values are stable.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCode {
    #[default]
    #[display(fmt = "ok")]
    Ok = 0,
    #[display(fmt = "generic error")]
    Error = 1,
    #[display(fmt = "no tag present")]
    NoTagError = 2,
    #[display(fmt = "transceive timed out or framing error")]
    TransceiveError = 3,
    #[display(fmt = "request: bad response size")]
    RequestBadSizeError = 4,
    #[display(fmt = "bad crc checksum")]
    BadCrcError = 5,
    #[display(fmt = "anti-collision: bad uid size")]
    AntiCollisionBadUidSizeError = 6,
    #[display(fmt = "select tag: bad response size")]
    SelectTagBadSizeError = 7,
    #[display(fmt = "write block: data must be 16 bytes")]
    WriteBlockBadSizeError = 8,
    #[display(fmt = "write block: bad acknowledgement")]
    WriteBlockBadDataError = 9,
    #[display(fmt = "dump data corrupted")]
    DataCorruptedError = 10,
}

impl StatusCode {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Upper-snake identifier, convenient for log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
            Self::NoTagError => "NO_TAG_ERROR",
            Self::TransceiveError => "TRANSCEIVE_ERROR",
            Self::RequestBadSizeError => "REQUEST_BAD_SIZE_ERROR",
            Self::BadCrcError => "BAD_CRC_ERROR",
            Self::AntiCollisionBadUidSizeError => "ANTI_COLLISION_BAD_UID_SIZE_ERROR",
            Self::SelectTagBadSizeError => "SELECT_TAG_BAD_SIZE_ERROR",
            Self::WriteBlockBadSizeError => "WRITE_BLOCK_BAD_SIZE_ERROR",
            Self::WriteBlockBadDataError => "WRITE_BLOCK_BAD_DATA_ERROR",
            Self::DataCorruptedError => "DATA_CORRUPTED_ERROR",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Ok,
            1 => Self::Error,
            2 => Self::NoTagError,
            3 => Self::TransceiveError,
            4 => Self::RequestBadSizeError,
            5 => Self::BadCrcError,
            6 => Self::AntiCollisionBadUidSizeError,
            7 => Self::SelectTagBadSizeError,
            8 => Self::WriteBlockBadSizeError,
            9 => Self::WriteBlockBadDataError,
            10 => Self::DataCorruptedError,
            _ => return None,
        })
    }
}

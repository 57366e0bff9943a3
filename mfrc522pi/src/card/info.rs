use crate::types::Uid;

/// Compact information describing an activated ISO14443A card
/// (UID / ATQA / SAK).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    pub uid: Uid,
    pub atqa: [u8; 2],
    pub sak: u8,
}

impl CardInfo {
    pub fn new(uid: Uid, atqa: [u8; 2], sak: u8) -> Self {
        Self { uid, atqa, sak }
    }

    /// Card family as announced by the SAK byte.
    pub fn kind(&self) -> &'static str {
        match self.sak {
            0x00 => "MIFARE Ultralight",
            0x08 => "MIFARE Classic 1K",
            0x09 => "MIFARE Mini",
            0x18 => "MIFARE Classic 4K",
            0x20 => "ISO14443-4",
            _ => "unknown",
        }
    }

    pub fn is_classic_1k(&self) -> bool {
        self.sak == 0x08
    }
}

impl From<&crate::card::Card> for CardInfo {
    fn from(card: &crate::card::Card) -> Self {
        CardInfo::new(card.uid, card.atqa, card.sak)
    }
}

// mfrc522pi/src/card/mod.rs

use crate::device::{Initialized, Reader};
use crate::protocol::{
    AuthMode, AuthResult, BlocksResult, Outcome, PiccCommand, ReadBlockResult, StatusCode,
};
use crate::types::{BlocksMap, MifareKey, Uid};
use crate::Result;

mod info;
pub use info::CardInfo;

pub mod operations;

/// A selected card in the field.
pub struct Card {
    uid: Uid,
    atqa: [u8; 2],
    sak: u8,
}

impl Card {
    pub fn new(uid: Uid, atqa: [u8; 2], sak: u8) -> Self {
        Self { uid, atqa, sak }
    }

    /// Request, anti-collision and select in one go.
    ///
    /// Returns `Ok(None)` when no card answered or activation failed part
    /// way; the failing step is logged at debug level.
    pub fn detect(reader: &mut Reader<Initialized>, mode: PiccCommand) -> Result<Option<Card>> {
        let request = reader.request(mode)?;
        if !request.is_ok() {
            log::debug!("request: {}", request.status);
            return Ok(None);
        }

        let anti = reader.anti_collision()?;
        let uid = match anti.uid() {
            Some(uid) => uid,
            None => {
                log::debug!("anti-collision: {}", anti.status);
                return Ok(None);
            }
        };

        let select = reader.select_tag(&uid)?;
        if !select.is_ok() {
            log::debug!("select: {}", select.status);
            return Ok(None);
        }

        let mut atqa = [0u8; 2];
        for (dst, src) in atqa.iter_mut().zip(&request.atqa) {
            *dst = *src;
        }
        Ok(Some(Card::new(uid, atqa, select.tag_type)))
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn atqa(&self) -> [u8; 2] {
        self.atqa
    }

    pub fn sak(&self) -> u8 {
        self.sak
    }

    pub fn info(&self) -> CardInfo {
        CardInfo::from(self)
    }

    pub fn authenticate(
        &self,
        reader: &mut Reader<Initialized>,
        mode: AuthMode,
        block: u8,
        key: &MifareKey,
    ) -> Result<AuthResult> {
        operations::authenticate(reader, mode, block, key, &self.uid)
    }

    /// Authenticate with key A, then read `block`.
    pub fn read(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        key: &MifareKey,
    ) -> Result<ReadBlockResult> {
        let auth = self.authenticate(reader, AuthMode::KeyA, block, key)?;
        if !auth.is_ok() {
            return Ok(ReadBlockResult {
                status: auth.status,
                block,
                data: Vec::new(),
            });
        }
        operations::read_block(reader, block)
    }

    /// Authenticate with key A, then write `block`.
    pub fn write(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        key: &MifareKey,
        data: &[u8],
    ) -> Result<StatusCode> {
        let auth = self.authenticate(reader, AuthMode::KeyA, block, key)?;
        if !auth.is_ok() {
            return Ok(auth.status);
        }
        operations::write_block(reader, block, data)
    }

    pub fn read_blocks(
        &self,
        reader: &mut Reader<Initialized>,
        key: &MifareKey,
        count: u8,
    ) -> Result<BlocksResult> {
        operations::read_blocks(reader, key, &self.uid, count)
    }

    pub fn write_blocks(
        &self,
        reader: &mut Reader<Initialized>,
        key: &MifareKey,
        blocks: &BlocksMap,
    ) -> Result<StatusCode> {
        operations::write_blocks(reader, key, &self.uid, blocks)
    }

    pub fn dump(&self, reader: &mut Reader<Initialized>, key: &MifareKey) -> Result<BlocksResult> {
        operations::dump_sector(reader, key, &self.uid)
    }
}

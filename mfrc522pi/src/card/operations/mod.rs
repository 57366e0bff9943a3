pub mod auth;
pub mod read;
pub mod select;
pub mod write;

// Re-export the command set at the operations root so callers can use
// `crate::card::operations::read_block(...)`.
pub use auth::{authenticate, stop_crypto1};
pub use read::{dump_sector, read_block, read_blocks};
pub use select::{anti_collision, classify_serial, request, select_tag};
pub use write::{write_block, write_blocks};

use crate::device::{Initialized, Reader};
use crate::protocol::{
    AntiCollisionResult, AuthMode, AuthResult, BlocksResult, PiccCommand, ReadBlockResult,
    RequestResult, SelectTagResult, StatusCode,
};
use crate::types::{BlocksMap, MifareKey, Uid};
use crate::Result;

/// PICC commands as methods on an initialized reader.
impl Reader<Initialized> {
    pub fn request(&mut self, mode: PiccCommand) -> Result<RequestResult> {
        request(self, mode)
    }

    pub fn anti_collision(&mut self) -> Result<AntiCollisionResult> {
        anti_collision(self)
    }

    pub fn select_tag(&mut self, uid: &Uid) -> Result<SelectTagResult> {
        select_tag(self, uid)
    }

    pub fn authenticate(
        &mut self,
        mode: AuthMode,
        block: u8,
        key: &MifareKey,
        uid: &Uid,
    ) -> Result<AuthResult> {
        authenticate(self, mode, block, key, uid)
    }

    pub fn stop_crypto1(&mut self) -> Result<()> {
        stop_crypto1(self)
    }

    pub fn read_block(&mut self, block: u8) -> Result<ReadBlockResult> {
        read_block(self, block)
    }

    pub fn write_block(&mut self, block: u8, data: &[u8]) -> Result<StatusCode> {
        write_block(self, block, data)
    }

    pub fn read_blocks(&mut self, key: &MifareKey, uid: &Uid, count: u8) -> Result<BlocksResult> {
        read_blocks(self, key, uid, count)
    }

    pub fn write_blocks(
        &mut self,
        key: &MifareKey,
        uid: &Uid,
        blocks: &BlocksMap,
    ) -> Result<StatusCode> {
        write_blocks(self, key, uid, blocks)
    }

    pub fn dump_sector(&mut self, key: &MifareKey, uid: &Uid) -> Result<BlocksResult> {
        dump_sector(self, key, uid)
    }
}

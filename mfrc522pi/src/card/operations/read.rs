// mfrc522pi/src/card/operations/read.rs

use crate::device::{Initialized, Reader};
use crate::protocol::{
    AuthMode, BlocksResult, Outcome, PcdCommand, PiccCommand, ReadBlockResult, StatusCode,
};
use crate::types::{BlocksMap, CLASSIC_1K_BLOCKS, MifareKey, Uid};
use crate::Result;

use super::auth::authenticate;

/// MIFARE READ of one block. The sector must already be authenticated.
///
/// The returned data holds whatever the FIFO yielded, even on failure.
pub fn read_block(reader: &mut Reader<Initialized>, block: u8) -> Result<ReadBlockResult> {
    let mut frame = vec![PiccCommand::READ.code(), block];
    let crc = reader.calculate_crc(&frame)?;
    frame.extend_from_slice(&crc);

    let result = reader.transceive(PcdCommand::Transceive, &frame)?;
    if result.status.is_ok() {
        log::debug!("block {}: {:02X?}", block, result.data);
    } else {
        log::error!("error while reading block {}: {}", block, result.status);
    }

    Ok(ReadBlockResult {
        status: result.status,
        block,
        data: result.data,
    })
}

/// Authenticate with key A and read blocks `0..count`, stopping at the first
/// failure. The blocks read so far are returned with the failing status.
pub fn read_blocks(
    reader: &mut Reader<Initialized>,
    key: &MifareKey,
    uid: &Uid,
    count: u8,
) -> Result<BlocksResult> {
    let mut blocks = BlocksMap::new();

    for block in 0..count {
        let auth = authenticate(reader, AuthMode::KeyA, block, key, uid)?;
        if !auth.is_ok() {
            return Ok(BlocksResult {
                status: auth.status,
                blocks,
            });
        }

        let read = read_block(reader, block)?;
        if !read.is_ok() {
            return Ok(BlocksResult {
                status: read.status,
                blocks,
            });
        }
        match read.block_data() {
            Some(data) => {
                blocks.insert(block, data);
            }
            None => {
                log::error!("block {}: expected 16 bytes, got {}", block, read.data.len());
                return Ok(BlocksResult {
                    status: StatusCode::Error,
                    blocks,
                });
            }
        }
    }

    Ok(BlocksResult {
        status: StatusCode::Ok,
        blocks,
    })
}

/// Best-effort dump of all 64 blocks of a MIFARE Classic 1K card.
///
/// Blocks that fail to authenticate or read are logged and left out; the
/// status is always OK.
pub fn dump_sector(
    reader: &mut Reader<Initialized>,
    key: &MifareKey,
    uid: &Uid,
) -> Result<BlocksResult> {
    let mut blocks = BlocksMap::new();

    for block in 0..CLASSIC_1K_BLOCKS {
        let auth = authenticate(reader, AuthMode::KeyA, block, key, uid)?;
        if !auth.is_ok() {
            log::error!("authentication error for block {}: {}", block, auth.status);
            continue;
        }

        let read = read_block(reader, block)?;
        match read.block_data() {
            Some(data) => {
                blocks.insert(block, data);
            }
            None => log::error!("skipping block {}: {}", block, read.status),
        }
    }

    Ok(BlocksResult {
        status: StatusCode::Ok,
        blocks,
    })
}

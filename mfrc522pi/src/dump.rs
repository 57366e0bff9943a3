// mfrc522pi/src/dump.rs

//! Dump file format.
//!
//! ```text
//! "MFRC522PI_DUMP"          14 bytes
//! count                     u32 big-endian
//! count × { index: u32 BE, data: [u8; 16] }
//! ```
//!
//! Problems with the content are reported as
//! [`StatusCode::DataCorruptedError`]; only I/O failures are `Err`.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::protocol::{BlocksResult, StatusCode};
use crate::types::{BlockData, BlocksMap};
use crate::Result;

pub const MAGIC: &[u8; 14] = b"MFRC522PI_DUMP";

const RECORD_LEN: usize = 4 + BlockData::LEN;

/// Serialize `blocks` in ascending block order.
pub fn encode(blocks: &BlocksMap) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAGIC.len() + 4 + blocks.len() * RECORD_LEN);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&(blocks.len() as u32).to_be_bytes());
    for (&index, data) in blocks {
        out.extend_from_slice(&u32::from(index).to_be_bytes());
        out.extend_from_slice(data.as_bytes());
    }
    out
}

/// Parse a dump. On corruption the records decoded before the fault are
/// returned alongside `DataCorruptedError`.
pub fn decode(bytes: &[u8]) -> BlocksResult {
    let mut blocks = BlocksMap::new();
    let corrupted = |blocks: BlocksMap| BlocksResult {
        status: StatusCode::DataCorruptedError,
        blocks,
    };

    let Some(rest) = bytes.strip_prefix(MAGIC.as_slice()) else {
        log::warn!("not a dump file: bad magic");
        return corrupted(blocks);
    };
    let Some((count, mut rest)) = split_u32(rest) else {
        log::warn!("dump file truncated before the record count");
        return corrupted(blocks);
    };

    for n in 0..count {
        let Some((index, tail)) = split_u32(rest) else {
            log::warn!("dump file truncated at record {} of {}", n, count);
            return corrupted(blocks);
        };
        let Ok(index) = u8::try_from(index) else {
            log::warn!("dump record {} has block index {} out of range", n, index);
            return corrupted(blocks);
        };
        let Some(data) = tail.get(..BlockData::LEN) else {
            log::warn!("dump file truncated in block {}", index);
            return corrupted(blocks);
        };
        let mut bytes = [0u8; BlockData::LEN];
        bytes.copy_from_slice(data);
        blocks.insert(index, BlockData::from_bytes(bytes));
        rest = &tail[BlockData::LEN..];
    }

    BlocksResult {
        status: StatusCode::Ok,
        blocks,
    }
}

fn split_u32(bytes: &[u8]) -> Option<(u32, &[u8])> {
    let (head, tail) = bytes.split_first_chunk::<4>()?;
    Some((u32::from_be_bytes(*head), tail))
}

pub fn write_to<W: Write>(writer: &mut W, blocks: &BlocksMap) -> Result<StatusCode> {
    writer.write_all(&encode(blocks))?;
    writer.flush()?;
    Ok(StatusCode::Ok)
}

pub fn read_from<R: Read>(reader: &mut R) -> Result<BlocksResult> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&bytes))
}

/// Write `blocks` to `path`, replacing any existing file.
pub fn save(path: impl AsRef<Path>, blocks: &BlocksMap) -> Result<StatusCode> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    let status = write_to(&mut writer, blocks)?;
    log::debug!("saved {} blocks to {}", blocks.len(), path.as_ref().display());
    Ok(status)
}

pub fn load(path: impl AsRef<Path>) -> Result<BlocksResult> {
    let mut file = File::open(path.as_ref())?;
    read_from(&mut file)
}

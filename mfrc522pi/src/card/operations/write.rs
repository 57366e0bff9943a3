// mfrc522pi/src/card/operations/write.rs

use crate::device::{Initialized, Reader};
use crate::protocol::commands::MIFARE_ACK;
use crate::protocol::{AuthMode, Outcome, PcdCommand, PiccCommand, StatusCode, TransceiveResult};
use crate::types::{BlockData, BlocksMap, MifareKey, Uid};
use crate::Result;

use super::auth::authenticate;

/// ACK / NAK length in bits.
const ACK_BITS: usize = 4;

fn acknowledgement(result: &TransceiveResult) -> StatusCode {
    if !result.is_ok() {
        return result.status;
    }
    match result.data.first() {
        Some(&ack) if result.bit_len == ACK_BITS && ack & 0x0F == MIFARE_ACK => StatusCode::Ok,
        _ => StatusCode::WriteBlockBadDataError,
    }
}

/// MIFARE WRITE of one block. The sector must already be authenticated.
///
/// `data` must be exactly 16 bytes; anything else is rejected before the
/// bus is touched.
pub fn write_block(reader: &mut Reader<Initialized>, block: u8, data: &[u8]) -> Result<StatusCode> {
    if data.len() != BlockData::LEN {
        log::error!("block {}: write data must be 16 bytes, got {}", block, data.len());
        return Ok(StatusCode::WriteBlockBadSizeError);
    }

    let mut command = vec![PiccCommand::WRITE.code(), block];
    let crc = reader.calculate_crc(&command)?;
    command.extend_from_slice(&crc);
    let status = acknowledgement(&reader.transceive(PcdCommand::Transceive, &command)?);
    if !status.is_ok() {
        log::error!("block {}: write command refused ({})", block, status);
        return Ok(status);
    }

    let mut payload = data.to_vec();
    let crc = reader.calculate_crc(data)?;
    payload.extend_from_slice(&crc);
    let status = acknowledgement(&reader.transceive(PcdCommand::Transceive, &payload)?);
    if !status.is_ok() {
        log::error!("block {}: write data refused ({})", block, status);
    }
    Ok(status)
}

/// Authenticate each block with key A and write it, in ascending block order.
/// Stops at the first failure and returns its status.
pub fn write_blocks(
    reader: &mut Reader<Initialized>,
    key: &MifareKey,
    uid: &Uid,
    blocks: &BlocksMap,
) -> Result<StatusCode> {
    for (&block, data) in blocks {
        let auth = authenticate(reader, AuthMode::KeyA, block, key, uid)?;
        if !auth.is_ok() {
            return Ok(auth.status);
        }

        let status = write_block(reader, block, data.as_bytes())?;
        if !status.is_ok() {
            return Ok(status);
        }
    }
    Ok(StatusCode::Ok)
}

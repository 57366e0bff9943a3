// mfrc522pi/src/card/operations/select.rs

//! Card activation: REQA/WUPA, cascade level 1 anti-collision and SELECT.

use crate::device::{Initialized, Reader};
use crate::protocol::commands::{NVB_ANTI_COLLISION, NVB_SELECT};
use crate::protocol::registers::Register;
use crate::protocol::{
    AntiCollisionResult, PcdCommand, PiccCommand, RequestResult, SelectTagResult, StatusCode, bcc,
};
use crate::types::Uid;
use crate::Result;

/// ATQA length in bits.
const ATQA_BITS: usize = 16;
/// SAK + CRC_A length in bits.
const SAK_BITS: usize = 24;
/// 4 UID bytes + BCC.
const SERIAL_LEN: usize = 5;

/// Send REQA or WUPA as a 7-bit short frame.
pub fn request(reader: &mut Reader<Initialized>, mode: PiccCommand) -> Result<RequestResult> {
    reader.write_register(Register::BitFraming, 0x07)?;
    let result = reader.transceive(PcdCommand::Transceive, &[mode.code()])?;

    let status = if result.status.is_ok() && result.bit_len != ATQA_BITS {
        StatusCode::RequestBadSizeError
    } else {
        result.status
    };

    Ok(RequestResult {
        status,
        bit_len: result.bit_len,
        atqa: result.data,
    })
}

/// Classify a serial received during anti-collision.
pub fn classify_serial(serial: &[u8]) -> StatusCode {
    if serial.len() != SERIAL_LEN {
        StatusCode::AntiCollisionBadUidSizeError
    } else if bcc(&serial[..4]) != serial[4] {
        StatusCode::BadCrcError
    } else {
        StatusCode::Ok
    }
}

/// Cascade level 1 anti-collision: ask every card in the field for its UID.
pub fn anti_collision(reader: &mut Reader<Initialized>) -> Result<AntiCollisionResult> {
    reader.write_register(Register::BitFraming, 0x00)?;
    let result = reader.transceive(
        PcdCommand::Transceive,
        &[PiccCommand::ANTI_COLLISION.code(), NVB_ANTI_COLLISION],
    )?;

    let status = if result.status.is_ok() {
        classify_serial(&result.data)
    } else {
        result.status
    };

    Ok(AntiCollisionResult {
        status,
        serial: result.data,
    })
}

/// Select the card with `uid`. The SAK comes back as `tag_type`.
pub fn select_tag(reader: &mut Reader<Initialized>, uid: &Uid) -> Result<SelectTagResult> {
    let mut frame = Vec::with_capacity(9);
    frame.push(PiccCommand::SELECT_TAG.code());
    frame.push(NVB_SELECT);
    frame.extend_from_slice(&uid.serial_with_bcc());
    let crc = reader.calculate_crc(&frame)?;
    frame.extend_from_slice(&crc);

    let result = reader.transceive(PcdCommand::Transceive, &frame)?;
    let tag_type = result.data.first().copied().unwrap_or(0);

    let status = if result.status.is_ok() && result.bit_len != SAK_BITS {
        StatusCode::SelectTagBadSizeError
    } else {
        result.status
    };
    log::debug!("select {}: SAK {:#04x} ({})", uid.to_hex(), tag_type, status);

    Ok(SelectTagResult { status, tag_type })
}

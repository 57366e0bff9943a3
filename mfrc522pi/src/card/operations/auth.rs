// mfrc522pi/src/card/operations/auth.rs

use crate::device::{Initialized, Reader};
use crate::protocol::registers::{MF_CRYPTO1_ON, Register};
use crate::protocol::{AuthMode, AuthResult, PcdCommand};
use crate::types::{MifareKey, Uid};
use crate::Result;

/// MFAuthent against `block` with `key`.
///
/// The status is whatever the exchange produced. Status2.MFCrypto1On is
/// checked afterwards and reported separately in `crypto1_on`; a clear flag
/// is logged but never turns an OK status into a failure.
pub fn authenticate(
    reader: &mut Reader<Initialized>,
    mode: AuthMode,
    block: u8,
    key: &MifareKey,
    uid: &Uid,
) -> Result<AuthResult> {
    let mut frame = Vec::with_capacity(12);
    frame.push(mode.command().code());
    frame.push(block);
    frame.extend_from_slice(key.as_bytes());
    frame.extend_from_slice(uid.as_bytes());

    let result = reader.transceive(PcdCommand::Authenticate, &frame)?;

    let crypto1_on = reader.read_register(Register::Status2)? & MF_CRYPTO1_ON != 0;
    if !crypto1_on {
        log::error!("authentication error: crypto1 off after {:?} on block {}", mode, block);
    }

    Ok(AuthResult {
        status: result.status,
        crypto1_on,
    })
}

/// Leave the authenticated session.
pub fn stop_crypto1(reader: &mut Reader<Initialized>) -> Result<()> {
    reader.clear_bits(Register::Status2, MF_CRYPTO1_ON)
}

// mfrc522pi/src/protocol/checksum.rs

/// Block check character of a 4-byte UID: XOR of all serial bytes.
pub fn bcc(serial: &[u8]) -> u8 {
    serial.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// ISO/IEC 14443-A CRC16 (CRC_A), preset 0x6363, reflected poly 0x8408.
///
/// Returned low byte first, the order it is appended to a frame. The reader
/// normally lets the chip's coprocessor compute this; the software version is
/// used by the simulated chip and for checking captured frames.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0x6363;
    for &b in data {
        let mut ch = b ^ (crc & 0x00ff) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        crc = (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4);
    }
    crc.to_le_bytes()
}

//! Hexadecimal helpers for UIDs, keys and block contents.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! into a String cannot fail
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Lowercase hex with a space between bytes: `&[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_bytes(bytes, |s, b| {
        let _ = write!(s, "{:02x}", b);
    })
}

/// Uppercase, `0x`-prefixed, space separated: `&[0xde, 0xad]` -> `"0xDE 0xAD"`.
///
/// This is the format the command-line tools print UIDs and blocks in.
pub fn bytes_to_hex_prefixed(bytes: &[u8]) -> String {
    join_bytes(bytes, |s, b| {
        let _ = write!(s, "0x{:02X}", b);
    })
}

fn join_bytes(bytes: &[u8], mut fmt: impl FnMut(&mut String, u8)) -> String {
    let mut s = String::with_capacity(bytes.len() * 5);
    for (i, &b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        fmt(&mut s, b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Whitespace, `:` separators and `0x` prefixes are ignored, so
/// `"FF:FF:FF:FF:FF:FF"` and `"0xff 0xff"` both parse.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: String = s
        .split(|c: char| c.is_whitespace() || c == ':')
        .map(|tok| tok.trim_start_matches("0x").trim_start_matches("0X"))
        .collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    (0..cleaned.len())
        .step_by(2)
        .map(|i| {
            let pair = cleaned
                .get(i..i + 2)
                .ok_or_else(|| format!("invalid hex at offset {}", i))?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}

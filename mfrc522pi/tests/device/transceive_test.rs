#[path = "../common/mod.rs"]
mod common;

use mfrc522pi::device::{ReaderConfig, received_bits};
use mfrc522pi::protocol::{PcdCommand, Register, StatusCode};
use mfrc522pi::transport::{MockTransport, SimReply};
use proptest::prelude::*;

#[test]
fn bit_length_from_fifo_level_and_last_bits() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);

    mock.push_reply(SimReply::bits(vec![1, 2, 3], 5));
    let result = reader.transceive(PcdCommand::Transceive, &[0x30]).unwrap();
    assert_eq!(result.status, StatusCode::Ok);
    assert_eq!(result.bit_len, (3 - 1) * 8 + 5);

    mock.push_reply(SimReply::bits(vec![1, 2, 3], 0));
    let result = reader.transceive(PcdCommand::Transceive, &[0x30]).unwrap();
    assert_eq!(result.bit_len, 24);
    assert_eq!(result.data, vec![1, 2, 3]);
}

#[test]
fn no_card_reports_no_tag() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);

    reader.write_register(Register::BitFraming, 0x07).unwrap();
    let result = reader.transceive(PcdCommand::Transceive, &[0x26]).unwrap();
    assert_eq!(result.status, StatusCode::NoTagError);
}

#[test]
fn collision_or_parity_errors_fail_exchange() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);

    for error in [0x01, 0x02, 0x08, 0x10] {
        mock.push_reply(SimReply::error(error));
        let result = reader.transceive(PcdCommand::Transceive, &[0x93, 0x20]).unwrap();
        assert_eq!(result.status, StatusCode::TransceiveError, "error {error:#04x}");
    }

    // BufferOvfl (0x10) is in the mask, CRCErr (0x04) is not
    mock.push_reply(SimReply {
        error: 0x04,
        ..SimReply::frame(vec![0xAA])
    });
    let result = reader.transceive(PcdCommand::Transceive, &[0x30, 0x00]).unwrap();
    assert_eq!(result.status, StatusCode::Ok);
}

#[test]
fn budget_bounds_the_wait() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on_with(&mock, ReaderConfig::default().with_transceive_budget(3));
    mock.push_reply(SimReply::silent());
    mock.clear_log();

    let result = reader.transceive(PcdCommand::Transceive, &[0x26]).unwrap();
    assert_eq!(result.status, StatusCode::TransceiveError);
    assert!(result.data.is_empty());
    // start-send is always dropped again
    assert_eq!(mock.register(Register::BitFraming) & 0x80, 0);
}

proptest! {
    #[test]
    fn bit_length_formula(level in 1u8..=64, last in 0u8..8) {
        let expected = if last == 0 {
            level as usize * 8
        } else {
            (level as usize - 1) * 8 + last as usize
        };
        prop_assert_eq!(received_bits(level, last), expected);
    }

    #[test]
    fn drained_bytes_are_clamped(len in 0usize..40) {
        let mock = MockTransport::new();
        let mut reader = common::reader_on(&mock);
        mock.push_reply(SimReply::frame(vec![0x5A; len]));

        let result = reader.transceive(PcdCommand::Transceive, &[0x30, 0x00]).unwrap();
        prop_assert_eq!(result.data.len(), len.clamp(1, 16));
        prop_assert_eq!(result.bit_len, len * 8);
    }
}

#[path = "../common/mod.rs"]
mod common;

use mfrc522pi::protocol::{AuthMode, PcdCommand, Register, StatusCode};
use mfrc522pi::transport::{MockTransport, SimReply};
use mfrc522pi::types::MifareKey;

#[test]
fn authenticate_frame_and_crypto1_flag() {
    let (mock, mut reader) = common::setup(common::sample_card());
    let uid = common::sample_uid();

    let auth = reader
        .authenticate(AuthMode::KeyA, 4, &common::default_key(), &uid)
        .unwrap();
    assert_eq!(auth.status, StatusCode::Ok);
    assert!(auth.crypto1_on);

    let (command, frame) = mock.frames().last().cloned().unwrap();
    assert_eq!(command, PcdCommand::Authenticate);
    assert_eq!(
        frame,
        vec![0x60, 0x04, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDE, 0xAD, 0xBE, 0xEF]
    );
}

#[test]
fn authenticate_with_key_b() {
    let mut card = common::sample_card();
    card.key_b = MifareKey::new([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    let key_b = card.key_b;
    let (mock, mut reader) = common::setup(card);

    let auth = reader
        .authenticate(AuthMode::KeyB, 7, &key_b, &common::sample_uid())
        .unwrap();
    assert_eq!(auth.status, StatusCode::Ok);
    assert_eq!(mock.last_frame().unwrap()[0], 0x61);
}

#[test]
fn crypto1_anomaly_does_not_override_status() {
    let (mock, mut reader) = common::setup(common::sample_card());
    // the card accepts the key but MFCrypto1On never comes up
    mock.hold_crypto1_off(true);

    let auth = reader
        .authenticate(AuthMode::KeyA, 0, &common::default_key(), &common::sample_uid())
        .unwrap();
    assert_eq!(auth.status, StatusCode::Ok);
    assert!(!auth.crypto1_on);
}

#[test]
fn authenticate_wrong_key() {
    let (_mock, mut reader) = common::setup(common::sample_card());

    let auth = reader
        .authenticate(AuthMode::KeyA, 0, &MifareKey::new([0; 6]), &common::sample_uid())
        .unwrap();
    assert_eq!(auth.status, StatusCode::TransceiveError);
    assert!(!auth.crypto1_on);
}

#[test]
fn stop_crypto1_ends_session() {
    let (mock, mut reader) = common::setup(common::sample_card());
    let uid = common::sample_uid();

    reader
        .authenticate(AuthMode::KeyA, 4, &common::default_key(), &uid)
        .unwrap();
    assert!(mock.with_card_mut(|c| c.is_authenticated()).unwrap());

    reader.stop_crypto1().unwrap();
    assert_eq!(mock.register(Register::Status2) & 0x08, 0);
    assert!(!mock.with_card_mut(|c| c.is_authenticated()).unwrap());

    // reads are refused once the session is gone
    let read = reader.read_block(4).unwrap();
    assert_eq!(read.status, StatusCode::Ok);
    assert!(read.block_data().is_none());
}

#[test]
fn read_block_returns_contents() {
    let mut card = common::sample_card();
    card.blocks.insert(5, common::patterned_block(0x10));
    let (mock, mut reader) = common::setup(card);

    reader
        .authenticate(AuthMode::KeyA, 5, &common::default_key(), &common::sample_uid())
        .unwrap();
    let read = reader.read_block(5).unwrap();

    assert_eq!(read.status, StatusCode::Ok);
    assert_eq!(read.block, 5);
    assert_eq!(read.block_data(), Some(common::patterned_block(0x10)));
    assert_eq!(mock.last_frame().unwrap(), vec![0x30, 0x05, 0xAF, 0xFF]);
}

#[test]
fn read_block_failure_has_no_block_data() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);
    mock.push_reply(SimReply {
        error: 0x02,
        ..SimReply::frame(vec![0xAB; 4])
    });

    let read = reader.read_block(1).unwrap();
    assert_eq!(read.status, StatusCode::TransceiveError);
    assert!(read.block_data().is_none());
}

#[test]
fn write_then_read_round_trip() {
    let (mock, mut reader) = common::setup(common::sample_card());
    let uid = common::sample_uid();
    let data = common::patterned_block(0x40);

    reader
        .authenticate(AuthMode::KeyA, 9, &common::default_key(), &uid)
        .unwrap();
    let status = reader.write_block(9, data.as_bytes()).unwrap();
    assert_eq!(status, StatusCode::Ok);

    let read = reader.read_block(9).unwrap();
    assert_eq!(read.block_data(), Some(data));
    assert_eq!(mock.with_card_mut(|c| *c.block(9).unwrap()), Some(data));
}

#[test]
fn write_block_rejects_wrong_size_without_bus_activity() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);

    for len in [0usize, 1, 15, 17, 32] {
        mock.clear_log();
        let status = reader.write_block(4, &vec![0u8; len]).unwrap();
        assert_eq!(status, StatusCode::WriteBlockBadSizeError);
        assert_eq!(mock.transfer_count(), 0);
    }
}

#[test]
fn write_block_nak_on_command_phase() {
    let mut card = common::sample_card();
    card.nak_write.insert(6);
    let (mock, mut reader) = common::setup(card);

    reader
        .authenticate(AuthMode::KeyA, 6, &common::default_key(), &common::sample_uid())
        .unwrap();
    mock.clear_log();
    let status = reader.write_block(6, &[0x11; 16]).unwrap();

    assert_eq!(status, StatusCode::WriteBlockBadDataError);
    // the data phase never ran
    assert_eq!(mock.frames().len(), 1);
}

#[test]
fn write_block_nak_on_data_phase() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);
    mock.push_reply(SimReply::bits(vec![0x0A], 4));
    mock.push_reply(SimReply::bits(vec![0x05], 4));

    let status = reader.write_block(6, &[0x11; 16]).unwrap();
    assert_eq!(status, StatusCode::WriteBlockBadDataError);
}

#[test]
fn write_block_ack_must_be_four_bits() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);
    mock.push_reply(SimReply::frame(vec![0x0A]));

    let status = reader.write_block(6, &[0x11; 16]).unwrap();
    assert_eq!(status, StatusCode::WriteBlockBadDataError);
}

#[test]
fn write_block_passes_transceive_failure_through() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);

    let status = reader.write_block(6, &[0x11; 16]).unwrap();
    assert_eq!(status, StatusCode::NoTagError);
}

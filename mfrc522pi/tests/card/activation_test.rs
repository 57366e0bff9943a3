#[path = "../common/mod.rs"]
mod common;

use mfrc522pi::card::operations::classify_serial;
use mfrc522pi::protocol::{PcdCommand, PiccCommand, Register, StatusCode, crc_a};
use mfrc522pi::transport::{MockTransport, SimReply};
use proptest::prelude::*;

#[test]
fn request_reads_atqa() {
    common::init_logger();
    let (mock, mut reader) = common::setup(common::sample_card());

    let result = reader.request(PiccCommand::REQUEST_IDLE).unwrap();
    assert_eq!(result.status, StatusCode::Ok);
    assert_eq!(result.bit_len, 16);
    assert_eq!(result.atqa, vec![0x04, 0x00]);
    assert_eq!(mock.writes_to(Register::BitFraming).first(), Some(&0x07));
}

#[test]
fn request_with_short_answer() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);
    mock.push_reply(SimReply::bits(vec![0x04], 4));

    let result = reader.request(PiccCommand::REQUEST_ALL).unwrap();
    assert_eq!(result.status, StatusCode::RequestBadSizeError);
    assert_eq!(result.bit_len, 4);
}

#[test]
fn request_without_card_passes_status_through() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);

    let result = reader.request(PiccCommand::REQUEST_IDLE).unwrap();
    assert_eq!(result.status, StatusCode::NoTagError);
}

#[test]
fn anti_collision_returns_uid() {
    let (mock, mut reader) = common::setup(common::sample_card());

    let result = reader.anti_collision().unwrap();
    assert_eq!(result.status, StatusCode::Ok);
    assert_eq!(result.uid(), Some(common::sample_uid()));
    assert_eq!(mock.last_frame().unwrap(), vec![0x93, 0x20]);
}

#[test]
fn anti_collision_detects_bad_bcc() {
    let mut card = common::sample_card();
    card.corrupt_bcc = true;
    let (_mock, mut reader) = common::setup(card);

    let result = reader.anti_collision().unwrap();
    assert_eq!(result.status, StatusCode::BadCrcError);
    assert!(result.uid().is_none());
}

#[test]
fn select_sends_serial_with_bcc_and_crc() {
    let (mock, mut reader) = common::setup(common::sample_card());

    let result = reader.select_tag(&common::sample_uid()).unwrap();
    assert_eq!(result.status, StatusCode::Ok);
    assert_eq!(result.tag_type, 0x08);

    let body = [0x93, 0x70, 0xDE, 0xAD, 0xBE, 0xEF, 0x22];
    let mut expected = body.to_vec();
    expected.extend_from_slice(&crc_a(&body));
    assert_eq!(mock.frames().last().unwrap(), &(PcdCommand::Transceive, expected));
}

#[test]
fn select_keeps_tag_type_on_bad_size() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);
    mock.push_reply(SimReply::frame(vec![0x88, 0x01]));

    let result = reader.select_tag(&common::sample_uid()).unwrap();
    assert_eq!(result.status, StatusCode::SelectTagBadSizeError);
    assert_eq!(result.tag_type, 0x88);
}

#[test]
fn select_wrong_uid_gets_no_answer() {
    let (_mock, mut reader) = common::setup(common::sample_card());
    let other = mfrc522pi::Uid::from_bytes([1, 2, 3, 4]);

    let result = reader.select_tag(&other).unwrap();
    assert_eq!(result.status, StatusCode::NoTagError);
    assert_eq!(result.tag_type, 0);
}

proptest! {
    #[test]
    fn anti_collision_classification(serial in prop::collection::vec(any::<u8>(), 1..12)) {
        let mock = MockTransport::new();
        let mut reader = common::reader_on(&mock);
        mock.push_reply(SimReply::frame(serial.clone()));

        let result = reader.anti_collision().unwrap();
        if serial.len() != 5 {
            prop_assert_eq!(result.status, StatusCode::AntiCollisionBadUidSizeError);
        } else if serial[0] ^ serial[1] ^ serial[2] ^ serial[3] != serial[4] {
            prop_assert_eq!(result.status, StatusCode::BadCrcError);
        } else {
            prop_assert_eq!(result.status, StatusCode::Ok);
            let uid = result.uid().unwrap();
            prop_assert_eq!(uid.as_bytes(), &serial[..4]);
        }
        prop_assert_eq!(classify_serial(&serial), result.status);
    }

    #[test]
    fn valid_serials_always_accepted(uid in any::<[u8; 4]>()) {
        let bcc = uid.iter().fold(0, |acc, b| acc ^ b);
        let mut serial = uid.to_vec();
        serial.push(bcc);
        prop_assert_eq!(classify_serial(&serial), StatusCode::Ok);
    }
}

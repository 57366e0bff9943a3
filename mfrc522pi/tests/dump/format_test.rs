#[path = "../common/mod.rs"]
mod common;

use mfrc522pi::dump::{self, MAGIC};
use mfrc522pi::protocol::StatusCode;

#[test]
fn sample_round_trip() {
    let blocks = common::sample_blocks();
    let bytes = dump::encode(&blocks);

    let loaded = dump::decode(&bytes);
    assert_eq!(loaded.status, StatusCode::Ok);
    assert_eq!(loaded.blocks, blocks);
}

#[test]
fn encoded_bytes_match_reference() {
    let bytes = dump::encode(&common::sample_blocks());
    let expected = hex::decode(concat!(
        "4d46524335323250495f44554d50",
        "00000002",
        "00000000",
        "00000000000000000000000000000000",
        "00000002",
        "ffffffffffffffffffffffffffffffff",
    ))
    .unwrap();
    assert_eq!(bytes, expected);
}

#[test]
fn corrupted_magic_is_rejected_before_records() {
    let mut bytes = dump::encode(&common::sample_blocks());
    bytes[3] ^= 0x20;

    let loaded = dump::decode(&bytes);
    assert_eq!(loaded.status, StatusCode::DataCorruptedError);
    assert!(loaded.blocks.is_empty());
}

#[test]
fn short_inputs() {
    assert_eq!(dump::decode(&[]).status, StatusCode::DataCorruptedError);
    assert_eq!(dump::decode(&MAGIC[..10]).status, StatusCode::DataCorruptedError);
    // magic but no count
    assert_eq!(dump::decode(&MAGIC[..]).status, StatusCode::DataCorruptedError);
}

#[test]
fn count_larger_than_content() {
    let mut bytes = dump::encode(&common::sample_blocks());
    bytes[17] = 3;

    let loaded = dump::decode(&bytes);
    assert_eq!(loaded.status, StatusCode::DataCorruptedError);
    assert_eq!(loaded.blocks, common::sample_blocks());
}

#[test]
fn full_card_dump() {
    let (_mock, mut reader) = common::setup(common::sample_card());
    let dumped = reader
        .dump_sector(&common::default_key(), &common::sample_uid())
        .unwrap();

    let bytes = dump::encode(&dumped.blocks);
    assert_eq!(bytes.len(), MAGIC.len() + 4 + 64 * 20);
    assert_eq!(dump::decode(&bytes).blocks, dumped.blocks);
}

#[path = "../common/mod.rs"]
mod common;

use mfrc522pi::protocol::PiccCommand;
use mfrc522pi::transport::{MockTransport, Transport};
use mfrc522pi::Error;

#[test]
fn failure_mid_exchange_surfaces_as_error() {
    let (mock, mut reader) = common::setup(common::sample_card());
    mock.fail_after(10);

    match reader.request(PiccCommand::REQUEST_IDLE) {
        Err(Error::Transport(msg)) => assert!(msg.contains("simulated")),
        other => panic!("expected transport error, got: {:?}", other.map(|r| r.status)),
    }
}

#[test]
fn closed_bus_rejects_transfers() {
    let mut mock = MockTransport::new();
    mock.close().unwrap();
    assert!(matches!(mock.transfer(0x80, 0), Err(Error::Transport(_))));
}

#[test]
fn batch_operations_propagate_bus_errors() {
    let (mock, mut reader) = common::setup(common::sample_card());
    mock.fail_after(200);

    let result = reader.dump_sector(&common::default_key(), &common::sample_uid());
    assert!(result.is_err());
}

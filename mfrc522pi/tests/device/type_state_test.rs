#[path = "../common/mod.rs"]
mod common;

use mfrc522pi::device::{Reader, ReaderBuilder, ReaderConfig};
use mfrc522pi::protocol::Register;
use mfrc522pi::transport::{MockResetPin, MockTransport, ResetPin, Transport};
use mfrc522pi::Error;

#[test]
fn initialize_transitions_and_programs_chip() {
    common::init_logger();
    let mock = MockTransport::new();
    let pin = MockResetPin::new();

    let boxed: Box<dyn Transport> = Box::new(mock.clone());
    let reader =
        Reader::new_with_transport(boxed, Box::new(pin.clone()), ReaderConfig::default()).unwrap();
    // nothing touches the bus before initialize
    assert_eq!(mock.transfer_count(), 0);

    let mut reader = reader.initialize().unwrap();
    assert_eq!(pin.levels(), vec![true]);
    assert_eq!(reader.version().unwrap(), 0x92);
    assert_eq!(mock.register(Register::TxControl) & 0x03, 0x03);
}

#[test]
fn soft_reset_reprograms_registers() {
    let mock = MockTransport::new();
    let mut reader = common::reader_on(&mock);

    mock.set_register(Register::TMode, 0x00);
    reader.soft_reset().unwrap();

    assert_eq!(mock.register(Register::TMode), 0x8D);
    assert_eq!(mock.writes_to(Register::Command), vec![0x0F, 0x0F]);
}

#[test]
fn cleanup_closes_bus_and_releases_pin() {
    let mock = MockTransport::new();
    let pin = MockResetPin::new();
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_reset_pin(Box::new(pin.clone()))
        .build()
        .unwrap();

    reader.cleanup().unwrap();

    assert!(mock.is_closed());
    assert!(pin.is_released());
    let mut released: Box<dyn ResetPin> = Box::new(pin);
    assert!(released.set_low().is_err());
}

#[test]
fn builder_requires_transport() {
    match ReaderBuilder::new().build() {
        Err(Error::DeviceNotFound) => {}
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("built a reader without a bus"),
    }
}

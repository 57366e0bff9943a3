// mfrc522pi/src/protocol/registers.rs
//! MFRC522 register catalog and SPI address encoding.

/// Register offsets of the MFRC522 (page 0..3, 16 registers each).
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Reserved00 = 0x00,
    Command = 0x01,
    CommIEn = 0x02,
    DivIEn = 0x03,
    CommIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    WaterLevel = 0x0B,
    Control = 0x0C,
    BitFraming = 0x0D,
    Coll = 0x0E,
    Reserved01 = 0x0F,

    Reserved10 = 0x10,
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,
    TxAuto = 0x15,
    TxSel = 0x16,
    RxSel = 0x17,
    RxThreshold = 0x18,
    Demod = 0x19,
    Reserved11 = 0x1A,
    Reserved12 = 0x1B,
    Mifare = 0x1C,
    Reserved13 = 0x1D,
    Reserved14 = 0x1E,
    SerialSpeed = 0x1F,

    Reserved20 = 0x20,
    CrcResultHigh = 0x21,
    CrcResultLow = 0x22,
    Reserved21 = 0x23,
    ModWidth = 0x24,
    Reserved22 = 0x25,
    RfCfg = 0x26,
    GsN = 0x27,
    CwGsP = 0x28,
    ModGsP = 0x29,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadHigh = 0x2C,
    TReloadLow = 0x2D,
    TCounterValueHigh = 0x2E,
    TCounterValueLow = 0x2F,

    Reserved30 = 0x30,
    TestSel1 = 0x31,
    TestSel2 = 0x32,
    TestPinEn = 0x33,
    TestPinValue = 0x34,
    TestBus = 0x35,
    AutoTest = 0x36,
    Version = 0x37,
    AnalogTest = 0x38,
    TestDac1 = 0x39,
    TestDac2 = 0x3A,
    TestAdc = 0x3B,
    Reserved31 = 0x3C,
    Reserved32 = 0x3D,
    Reserved33 = 0x3E,
    Reserved34 = 0x3F,
}

/// Read flag in the SPI address byte.
pub const READ_FLAG: u8 = 0x80;

/// Address bits of the SPI address byte (bit 0 is reserved and always 0).
pub const ADDRESS_MASK: u8 = 0x7E;

/// CommIEn / CommIrq: IRq line inversion / Set1 bit.
pub const IRQ_SET: u8 = 0x80;
/// CommIrq: timer decremented to zero.
pub const TIMER_IRQ: u8 = 0x01;
/// CommIrq: command terminated, chip went idle.
pub const IDLE_IRQ: u8 = 0x10;
/// CommIrq: receiver detected end of valid data stream.
pub const RX_IRQ: u8 = 0x20;
/// DivIrq: CRC coprocessor finished.
pub const CRC_IRQ: u8 = 0x04;
/// FIFOLevel: flush the FIFO buffer.
pub const FLUSH_BUFFER: u8 = 0x80;
/// BitFraming: start transmission of a transceive command.
pub const START_SEND: u8 = 0x80;
/// Control: number of valid bits in the last received byte.
pub const RX_LAST_BITS: u8 = 0x07;
/// Error: BufferOvfl | CollErr | ParityErr | ProtocolErr.
pub const ERROR_MASK: u8 = 0x1B;
/// Status2: MIFARE Crypto1 unit switched on.
pub const MF_CRYPTO1_ON: u8 = 0x08;
/// TxControl: drive both antenna pins (Tx1RFEn | Tx2RFEn).
pub const ANTENNA_ON: u8 = 0x03;

impl Register {
    /// Offset of the register inside the chip.
    pub fn offset(self) -> u8 {
        self as u8
    }

    /// SPI address byte for writing this register.
    pub fn write_address(self) -> u8 {
        (self.offset() << 1) & ADDRESS_MASK
    }

    /// SPI address byte for reading this register.
    pub fn read_address(self) -> u8 {
        self.write_address() | READ_FLAG
    }

    /// Decode an SPI address byte back into a register and a read flag.
    pub fn from_address(address: u8) -> (Self, bool) {
        let offset = (address & ADDRESS_MASK) >> 1;
        (Self::from_offset(offset), address & READ_FLAG != 0)
    }

    /// Look up a register by offset. Offsets wrap at 0x40.
    pub fn from_offset(offset: u8) -> Self {
        ALL[(offset & 0x3F) as usize]
    }
}

const ALL: [Register; 64] = {
    use Register::*;
    [
        Reserved00, Command, CommIEn, DivIEn, CommIrq, DivIrq, Error, Status1,
        Status2, FifoData, FifoLevel, WaterLevel, Control, BitFraming, Coll, Reserved01,
        Reserved10, Mode, TxMode, RxMode, TxControl, TxAuto, TxSel, RxSel,
        RxThreshold, Demod, Reserved11, Reserved12, Mifare, Reserved13, Reserved14, SerialSpeed,
        Reserved20, CrcResultHigh, CrcResultLow, Reserved21, ModWidth, Reserved22, RfCfg, GsN,
        CwGsP, ModGsP, TMode, TPrescaler, TReloadHigh, TReloadLow, TCounterValueHigh, TCounterValueLow,
        Reserved30, TestSel1, TestSel2, TestPinEn, TestPinValue, TestBus, AutoTest, Version,
        AnalogTest, TestDac1, TestDac2, TestAdc, Reserved31, Reserved32, Reserved33, Reserved34,
    ]
};

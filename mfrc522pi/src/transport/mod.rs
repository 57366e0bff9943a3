// mfrc522pi/src/transport/mod.rs

pub mod mock;
pub mod sim_card;
pub mod traits;
#[cfg(feature = "rpi")]
pub mod rpi;

pub use mock::{MockResetPin, MockTransport};
pub use sim_card::{SimReply, SimulatedCard};
pub use traits::{ResetPin, Transport};
#[cfg(feature = "rpi")]
pub use rpi::{RppalResetPin, RppalTransport};

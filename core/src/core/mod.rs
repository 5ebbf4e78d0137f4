pub mod bus;
pub mod machine;
pub mod map;

pub use bus::{Bus, Endian};
pub use machine::Machine;
pub use map::AddressMap;

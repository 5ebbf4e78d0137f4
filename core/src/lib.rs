pub mod core;
pub mod cpu;
pub mod device;

pub mod prelude {
    pub use crate::core::machine::Machine;
    pub use crate::core::{bus::Endian, map::AddressMap, Bus};
    pub use crate::cpu::{Cpu, IrqLine};
}

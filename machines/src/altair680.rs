//! MITS Altair 680: a 6800 with 32K RAM, an MC6850 at 0xF000, and the
//! 680b monitor PROM in the top 256 bytes. A second 768-byte window at
//! 0xFC00 holds the optional VTL-2 ROM (left blank unless an image writes
//! into it).

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use filament_core::core::{AddressMap, Machine};
use filament_core::cpu::{Cpu, Cpu6800};
use filament_core::device::{Mc6850, Ram, Rom};

use crate::registry::{BuildError, SystemConfig, SystemEntry};
use crate::romfile;

const DEFAULT_ROM: &str = "mits680b.bin";

const RAM_SIZE: usize = 32 * 1024;
const MONITOR_SIZE: usize = 256;
const MONITOR_BASE: u16 = 0xFF00;
const VTL_SIZE: usize = 768;
const VTL_BASE: u16 = 0xFC00;

pub struct Altair680 {
    cpu: Cpu6800,
    bus: AddressMap,
}

impl Altair680 {
    pub fn create(config: &SystemConfig) -> Result<Box<dyn Machine>, BuildError> {
        Ok(Box::new(Self::build(config)?))
    }

    fn build(config: &SystemConfig) -> Result<Self, BuildError> {
        if !config.variant.is_empty() {
            return Err(BuildError::UnknownVariant {
                system: "altair680",
                variant: config.variant.clone(),
            });
        }

        let image = romfile::read_image(&config.rom, MONITOR_SIZE)?;

        let mut bus = AddressMap::new();

        let ram = bus.add_device(Box::new(Ram::new(RAM_SIZE)));
        bus.map(0x0000, 0x7FFF, 0x0000, ram);

        let uart = bus.add_device(Box::new(Mc6850::new(config.console.clone())));
        bus.map(0xF000, 0xF001, 0xF000, uart);

        let vtl = bus.add_device(Box::new(Rom::new(VTL_SIZE)));
        bus.map(VTL_BASE, 0xFEFF, VTL_BASE, vtl);

        let monitor = bus.add_device(Box::new(Rom::from_image(image)));
        bus.map(MONITOR_BASE, 0xFFFF, MONITOR_BASE, monitor);

        let mut cpu = Cpu6800::new();
        cpu.reset();

        Ok(Self { cpu, bus })
    }
}

impl Machine for Altair680 {
    fn reset(&mut self) {
        self.cpu.reset();
    }

    fn run(&mut self) -> i32 {
        self.cpu.run(&mut self.bus)
    }

    fn shutdown_flag(&self) -> Arc<AtomicBool> {
        self.bus.shutdown_flag()
    }
}

inventory::submit! {
    SystemEntry::new("altair680", "6800", DEFAULT_ROM, Altair680::create)
}

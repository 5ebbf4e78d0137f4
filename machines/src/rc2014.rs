//! RC2014: a Z80 with the factory 64K ROM image and 32K of upper RAM.
//!
//! The ROM file holds eight 8K banks; bank 0 (32K BASIC for the SIO/2) is
//! visible at 0x0000-0x1FFF. RAM covers 0x8000-0xFFFF. The console is an
//! SIO/2-style port pair in I/O space at 0x80/0x81; staging a received
//! byte asserts the CPU's IRQ line.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use filament_core::core::{AddressMap, Machine};
use filament_core::cpu::{Cpu, CpuZ80};
use filament_core::device::{Ram, Rom, Sio2};

use crate::registry::{BuildError, SystemConfig, SystemEntry};
use crate::romfile;

const DEFAULT_ROM: &str = "rom/rc2014/24886009.BIN";

const ROM_IMAGE_SIZE: usize = 64 * 1024;
const RAM_SIZE: usize = 64 * 1024;

pub struct Rc2014 {
    cpu: CpuZ80,
    bus: AddressMap,
}

impl Rc2014 {
    pub fn create(config: &SystemConfig) -> Result<Box<dyn Machine>, BuildError> {
        Ok(Box::new(Self::build(config)?))
    }

    fn build(config: &SystemConfig) -> Result<Self, BuildError> {
        if !config.variant.is_empty() {
            return Err(BuildError::UnknownVariant {
                system: "rc2014",
                variant: config.variant.clone(),
            });
        }

        let image = romfile::read_image(&config.rom, ROM_IMAGE_SIZE)?;

        let mut cpu = CpuZ80::new();
        cpu.reset();

        let mut bus = AddressMap::new();

        // bank 0 of the ROM image; the bank selector never moves
        let rom = bus.add_device(Box::new(Rom::from_image(image)));
        bus.map(0x0000, 0x1FFF, 0x0000, rom);

        // the RAM device spans 64K but only the top half is decoded, so
        // its offsets line up with absolute addresses
        let ram = bus.add_device(Box::new(Ram::new(RAM_SIZE)));
        bus.map(0x8000, 0xFFFF, 0x0000, ram);

        let sio = bus.add_device(Box::new(Sio2::new(config.console.clone(), cpu.irq_line())));
        bus.map_io(0x80, 0x83, 0x80, sio);

        Ok(Self { cpu, bus })
    }
}

impl Machine for Rc2014 {
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
    SystemEntry::new("rc2014", "z80", DEFAULT_ROM, Rc2014::create)
}

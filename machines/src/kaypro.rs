//! Kaypro II: a Z80 with 64K RAM, a 4K boot ROM, and 4K of video RAM.
//!
//! The low 16K is bank-switched: with the ROM bank selected (the power-on
//! state) the boot ROM decodes at 0x0000-0x2FFF and video RAM at
//! 0x3000-0x3FFF; deselecting it exposes RAM everywhere. The latch sits
//! behind OUT ports 0x14-0x17, bit 0. Because the mapping depends on the
//! latch, this machine implements the bus directly instead of using a
//! static span list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use filament_core::core::{Bus, Machine};
use filament_core::cpu::{Cpu, CpuZ80};
use filament_core::device::{Device, Ram, Rom};

use crate::registry::{BuildError, SystemConfig, SystemEntry};
use crate::romfile;

const DEFAULT_ROM: &str = "rom/kaypro/kayproii_u47.bin";

const RAM_SIZE: usize = 64 * 1024;
const ROM_SIZE: usize = 4 * 1024;
const VRAM_SIZE: usize = 4 * 1024;

struct KayproBus {
    ram: Ram,
    vram: Ram,
    rom: Rom,
    rom_bank: bool,
    shutdown: Arc<AtomicBool>,
}

impl Bus for KayproBus {
    fn mem_read8(&mut self, addr: u16) -> u8 {
        if !self.rom_bank || addr >= 0x4000 {
            self.ram.read8(addr)
        } else if addr >= 0x3000 {
            self.vram.read8(addr - 0x3000)
        } else {
            self.rom.read8(addr)
        }
    }

    fn mem_write8(&mut self, addr: u16, val: u8) {
        if !self.rom_bank || addr >= 0x4000 {
            self.ram.write8(addr, val);
        } else if addr >= 0x3000 {
            self.vram.write8(addr - 0x3000, val);
        } else {
            self.rom.write8(addr, val);
        }
    }

    fn io_read8(&mut self, _port: u16) -> u8 {
        0
    }

    fn io_write8(&mut self, port: u16, val: u8) {
        match port {
            0x00 | 0x0C => {} // baud rate generators
            0x04..=0x07 => {} // serial ports (not wired to the console)
            0x08..=0x0B => {} // PIO 1
            0x10..=0x13 => {} // floppy controller
            0x14..=0x17 => self.rom_bank = val & 0x01 != 0,
            0x1C..=0x1F => {} // PIO 2
            _ => eprintln!("out to unknown port {port:#04x}"),
        }
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }
}

pub struct Kaypro {
    cpu: CpuZ80,
    bus: KayproBus,
}

impl Kaypro {
    pub fn create(config: &SystemConfig) -> Result<Box<dyn Machine>, BuildError> {
        if !config.variant.is_empty() {
            return Err(BuildError::UnknownVariant {
                system: "kaypro",
                variant: config.variant.clone(),
            });
        }

        let image = romfile::read_image(&config.rom, ROM_SIZE)?;

        let mut cpu = CpuZ80::new();
        cpu.reset();

        let bus = KayproBus {
            ram: Ram::new(RAM_SIZE),
            vram: Ram::new(VRAM_SIZE),
            rom: Rom::from_image(image),
            rom_bank: true,
            shutdown: Arc::new(AtomicBool::new(false)),
        };

        Ok(Box::new(Self { cpu, bus }))
    }
}

impl Machine for Kaypro {
    fn reset(&mut self) {
        self.cpu.reset();
        self.bus.rom_bank = true;
    }

    fn run(&mut self) -> i32 {
        self.cpu.run(&mut self.bus)
    }

    fn shutdown_flag(&self) -> Arc<AtomicBool> {
        self.bus.shutdown.clone()
    }
}

inventory::submit! {
    SystemEntry::new("kaypro", "z80", DEFAULT_ROM, Kaypro::create)
}

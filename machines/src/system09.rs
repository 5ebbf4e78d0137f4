//! The reference 6809 system: 32K RAM, 16K ROM, one serial port.
//!
//! Two memory layouts exist. The standard one puts an MC6850 at
//! 0xA000-0xA7FF; the "obc" variant swaps in a 16550-style UART at
//! 0x8000-0x87FF. The ROM is an Intel HEX image (historically a BASIC
//! interpreter) applied through the address map.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use filament_core::core::{AddressMap, Machine};
use filament_core::cpu::{Cpu, Cpu6809};
use filament_core::device::{Mc6850, Ram, Rom, Uart16550};

use crate::ihex;
use crate::registry::{BuildError, SystemConfig, SystemEntry};

const DEFAULT_ROM: &str = "test/BASIC.HEX";

const RAM_SIZE: usize = 32 * 1024;
const ROM_SIZE: usize = 16 * 1024;
const ROM_BASE: u16 = 0xC000;

pub struct System09 {
    cpu: Cpu6809,
    bus: AddressMap,
}

impl System09 {
    pub fn create(config: &SystemConfig) -> Result<Box<dyn Machine>, BuildError> {
        Ok(Box::new(Self::build(config)?))
    }

    fn build(config: &SystemConfig) -> Result<Self, BuildError> {
        let mut bus = AddressMap::new();

        let ram = bus.add_device(Box::new(Ram::new(RAM_SIZE)));
        bus.map(0x0000, 0x7FFF, 0x0000, ram);

        match config.variant.as_str() {
            "" => {
                let uart = bus.add_device(Box::new(Mc6850::new(config.console.clone())));
                bus.map(0xA000, 0xA7FF, 0xA000, uart);
            }
            "obc" => {
                let uart = bus.add_device(Box::new(Uart16550::new(config.console.clone())));
                bus.map(0x8000, 0x87FF, 0x8000, uart);
            }
            other => {
                return Err(BuildError::UnknownVariant {
                    system: "6809",
                    variant: other.to_string(),
                })
            }
        }

        let rom = bus.add_device(Box::new(Rom::new(ROM_SIZE)));
        bus.map(ROM_BASE, 0xFFFF, ROM_BASE, rom);

        ihex::load(&config.rom, |addr, byte| bus.preload(addr, byte)).map_err(|err| {
            BuildError::Hex {
                path: config.rom.clone(),
                err,
            }
        })?;

        let mut cpu = Cpu6809::new();
        cpu.reset();

        Ok(Self { cpu, bus })
    }
}

impl Machine for System09 {
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
    SystemEntry::new("6809", "6809", DEFAULT_ROM, System09::create)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filament_core::core::Bus;
    use filament_core::device::ConsolePort;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_hex(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::File::create(&path)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();
        path
    }

    fn config(variant: &str, rom: PathBuf) -> SystemConfig {
        SystemConfig {
            variant: variant.to_string(),
            rom,
            console: ConsolePort::new(),
        }
    }

    #[test]
    fn create_accepts_a_valid_image() {
        let path = write_temp_hex(
            "filament_sys09_rom.hex",
            ":01C000004FF0\n:02FFFE00C00041\n:00000001FF\n",
        );
        let machine = System09::create(&config("", path.clone()));
        std::fs::remove_file(&path).unwrap();
        assert!(machine.is_ok());
    }

    fn build(variant: &str, path: &std::path::Path) -> System09 {
        System09::build(&config(variant, path.to_path_buf())).unwrap()
    }

    #[test]
    fn rom_rejects_cpu_writes_but_accepts_preload() {
        let path = write_temp_hex("filament_sys09_ro.hex", ":01C000004FF0\n:00000001FF\n");
        let mut sys = build("", &path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(sys.bus.mem_read8(0xC000), 0x4F);
        sys.bus.mem_write8(0xC000, 0x00);
        assert_eq!(sys.bus.mem_read8(0xC000), 0x4F);
    }

    #[test]
    fn ram_is_writable_and_unmapped_space_reads_zero() {
        let path = write_temp_hex("filament_sys09_ram.hex", ":00000001FF\n");
        let mut sys = build("", &path);
        std::fs::remove_file(&path).unwrap();

        sys.bus.mem_write8(0x0100, 0x42);
        assert_eq!(sys.bus.mem_read8(0x0100), 0x42);
        // 0x8000-0x9FFF is a gap in the standard layout
        sys.bus.mem_write8(0x9000, 0x42);
        assert_eq!(sys.bus.mem_read8(0x9000), 0);
    }

    #[test]
    fn uart_status_visible_at_standard_window() {
        let path = write_temp_hex("filament_sys09_uart.hex", ":00000001FF\n");
        let mut sys = build("", &path);
        std::fs::remove_file(&path).unwrap();

        // TDRE set, RDRF clear on an idle port
        assert_eq!(sys.bus.mem_read8(0xA000), 0x02);
    }

    #[test]
    fn obc_variant_maps_the_16550_instead() {
        let path = write_temp_hex("filament_sys09_obc.hex", ":00000001FF\n");
        let mut sys = build("obc", &path);
        std::fs::remove_file(&path).unwrap();

        // LSR at offset 5: transmitter empty bits
        assert_eq!(sys.bus.mem_read8(0x8005), 0x60);
        // nothing at the standard MC6850 window
        assert_eq!(sys.bus.mem_read8(0xA000), 0);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let path = write_temp_hex("filament_sys09_var.hex", ":00000001FF\n");
        let result = System09::create(&config("nope", path.clone()));
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(BuildError::UnknownVariant { .. })));
    }

    #[test]
    fn boots_through_the_reset_vector() {
        // vector points at 0x0100 in RAM; the instruction there is
        // lda #$55 followed by a branch-to-self to stop the run loop
        let path = write_temp_hex(
            "filament_sys09_boot.hex",
            ":04010000865520FE02\n:02FFFE00010000\n:00000001FF\n",
        );
        let mut sys = build("", &path);
        std::fs::remove_file(&path).unwrap();

        let code = sys.cpu.run(&mut sys.bus);
        assert_eq!(code, 0);
        assert_eq!(sys.cpu.a, 0x55);
    }
}

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use filament_core::core::Bus;

/// Minimal bus for testing: flat 64KB memory plus a latching 256-port
/// I/O space, no peripherals.
pub struct TestBus {
    pub memory: Vec<u8>,
    pub io: Vec<u8>,
    shutdown: Arc<AtomicBool>,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: vec![0; 0x10000],
            io: vec![0; 0x100],
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    /// Point the Motorola reset vector at `addr` so the first step after
    /// reset starts there.
    pub fn boot_at(&mut self, addr: u16) {
        self.load(0xFFFE, &[(addr >> 8) as u8, addr as u8]);
    }

    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        self.shutdown.clone()
    }
}

impl Bus for TestBus {
    fn mem_read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn mem_write8(&mut self, addr: u16, val: u8) {
        self.memory[addr as usize] = val;
    }

    fn io_read8(&mut self, port: u16) -> u8 {
        self.io[(port & 0xFF) as usize]
    }

    fn io_write8(&mut self, port: u16, val: u8) {
        self.io[(port & 0xFF) as usize] = val;
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }
}

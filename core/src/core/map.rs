use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::bus::Bus;
use crate::device::Device;

#[derive(Clone, Copy)]
struct Span {
    lo: u16,
    hi: u16,
    base: u16,
    device: usize,
}

/// Routes bus cycles to attached devices by address range.
///
/// The map holds an ordered list of `(lo, hi, device, base)` spans over a
/// set of owned devices; an address `a` with `lo <= a <= hi` is forwarded
/// as `device.read8(a - base)`. Spans must not overlap; gaps are legal and
/// behave as an empty bus (reads return 0, writes are dropped).
///
/// A parallel span list covers the Z80's 8-bit I/O port space. Both lists
/// may reference the same device.
pub struct AddressMap {
    spans: Vec<Span>,
    io_spans: Vec<Span>,
    devices: Vec<Box<dyn Device>>,
    shutdown: Arc<AtomicBool>,
}

impl AddressMap {
    pub fn new() -> Self {
        Self {
            spans: Vec::new(),
            io_spans: Vec::new(),
            devices: Vec::new(),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Take ownership of a device and return its id for use with `map`.
    pub fn add_device(&mut self, device: Box<dyn Device>) -> usize {
        self.devices.push(device);
        self.devices.len() - 1
    }

    /// Attach a device to the memory span `[lo, hi]`, rebased by `base`.
    ///
    /// Panics if the span overlaps an existing one or references an unknown
    /// device; the map is built from static preset code, so either is a
    /// programming error rather than a runtime condition.
    pub fn map(&mut self, lo: u16, hi: u16, base: u16, device: usize) {
        Self::insert(&mut self.spans, lo, hi, base, device, self.devices.len());
    }

    /// Attach a device to the I/O port span `[lo, hi]`, rebased by `base`.
    pub fn map_io(&mut self, lo: u16, hi: u16, base: u16, device: usize) {
        Self::insert(&mut self.io_spans, lo, hi, base, device, self.devices.len());
    }

    fn insert(spans: &mut Vec<Span>, lo: u16, hi: u16, base: u16, device: usize, ndevices: usize) {
        assert!(lo <= hi, "span [{lo:#06x}, {hi:#06x}] is inverted");
        assert!(device < ndevices, "span references unknown device {device}");
        for span in spans.iter() {
            assert!(
                hi < span.lo || lo > span.hi,
                "span [{lo:#06x}, {hi:#06x}] overlaps [{:#06x}, {:#06x}]",
                span.lo,
                span.hi
            );
        }
        spans.push(Span {
            lo,
            hi,
            base,
            device,
        });
    }

    fn resolve(spans: &[Span], addr: u16) -> Option<(usize, u16)> {
        spans
            .iter()
            .find(|s| addr >= s.lo && addr <= s.hi)
            .map(|s| (s.device, addr.wrapping_sub(s.base)))
    }

    /// Apply one byte of a ROM image through the same span routing the CPU
    /// uses, but via the device's preload path so ROM contents stick.
    pub fn preload(&mut self, addr: u16, val: u8) {
        if let Some((dev, offset)) = Self::resolve(&self.spans, addr) {
            self.devices[dev].preload8(offset, val);
        }
    }

    pub fn device_mut(&mut self, id: usize) -> &mut dyn Device {
        &mut *self.devices[id]
    }

    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        self.shutdown.clone()
    }
}

impl Default for AddressMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for AddressMap {
    fn mem_read8(&mut self, addr: u16) -> u8 {
        match Self::resolve(&self.spans, addr) {
            Some((dev, offset)) => self.devices[dev].read8(offset),
            None => 0,
        }
    }

    fn mem_write8(&mut self, addr: u16, val: u8) {
        if let Some((dev, offset)) = Self::resolve(&self.spans, addr) {
            self.devices[dev].write8(offset, val);
        }
    }

    fn io_read8(&mut self, port: u16) -> u8 {
        match Self::resolve(&self.io_spans, port) {
            Some((dev, offset)) => self.devices[dev].read8(offset),
            None => 0,
        }
    }

    fn io_write8(&mut self, port: u16, val: u8) {
        if let Some((dev, offset)) = Self::resolve(&self.io_spans, port) {
            self.devices[dev].write8(offset, val);
        }
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }
}

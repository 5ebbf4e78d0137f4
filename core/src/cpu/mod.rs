use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::Bus;

pub(crate) mod branch;
pub(crate) mod flags;

pub mod m6800;
pub mod m6809;
pub mod z80;

pub use m6800::Cpu6800;
pub use m6809::Cpu6809;
pub use z80::CpuZ80;

/// Generic CPU interface.
pub trait Cpu {
    /// Clear the register file and latch a pending reset; the first run
    /// iteration services it by loading `PC` from the architecture's reset
    /// vector (the Z80 has none and starts at 0).
    fn reset(&mut self);

    /// Fetch-decode-execute until shutdown is requested on the bus or a
    /// fatal decode fault occurs. Returns 0 for a clean stop, non-zero for
    /// a fault.
    fn run(&mut self, bus: &mut dyn Bus) -> i32;

    /// Human-readable register snapshot.
    fn dump(&self) -> String;
}

/// Outcome of executing a single instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Normal,
    /// A branch-to-self or jump-to-self was detected; the run loop stops
    /// cleanly. Debugging behavior, not architectural.
    SelfLoop,
    /// Opcode or sub-mode not in the decode table. A diagnostic naming the
    /// opcode and `PC` has already been printed.
    Fault,
}

/// An interrupt request line that other threads may assert.
#[derive(Clone, Default)]
pub struct IrqLine(Arc<AtomicBool>);

impl IrqLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn lower(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

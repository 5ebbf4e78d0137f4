use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Machine-agnostic interface for emulated systems.
///
/// Each system preset (the 6809 reference board, the Altair 680, ...)
/// implements this trait so the front-end can drive any of them without
/// knowing which CPU or memory layout sits behind it.
pub trait Machine: Send {
    /// Put the machine back into its power-on state.
    fn reset(&mut self);

    /// Run the CPU until shutdown is requested or a fatal fault occurs.
    ///
    /// Returns 0 for a clean stop (shutdown request or detected self-loop)
    /// and non-zero for a fatal decode fault.
    fn run(&mut self) -> i32;

    /// Handle to the shared shutdown flag. Setting it stops the run loop
    /// at the next instruction boundary.
    fn shutdown_flag(&self) -> Arc<AtomicBool>;
}

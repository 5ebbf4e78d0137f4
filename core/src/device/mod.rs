pub mod console;
pub mod mc6850;
pub mod ram;
pub mod rom;
pub mod sio;
pub mod uart16550;

pub use console::ConsolePort;
pub use mc6850::Mc6850;
pub use ram::Ram;
pub use rom::Rom;
pub use sio::Sio2;
pub use uart16550::Uart16550;

/// Anything that answers byte reads and writes at a device-local offset.
///
/// RAM and ROM banks are devices; peripheral register blocks are devices.
/// The address map owns the devices and rebases bus addresses before
/// forwarding a cycle here.
pub trait Device: Send {
    fn read8(&mut self, offset: u16) -> u8;
    fn write8(&mut self, offset: u16, val: u8);

    /// Store a byte of a preloaded ROM image.
    ///
    /// ROM images are applied through the address map's routing so an image
    /// may span several regions; devices that drop CPU writes override this
    /// to accept the image bytes anyway.
    fn preload8(&mut self, offset: u16, val: u8) {
        self.write8(offset, val);
    }
}

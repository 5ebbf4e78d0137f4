use crate::cpu::IrqLine;
use crate::device::{ConsolePort, Device};

const STAT_RX_AVAIL: u8 = 1 << 0;
const STAT_INT_PENDING: u8 = 1 << 1;

/// SIO/2-style console port pair for Z80 systems, mapped into I/O space.
///
/// Offset 0 is channel A control/status, offset 1 is channel A data;
/// offsets 2 and 3 are channel B, which is accepted and ignored. Staging a
/// received byte raises the CPU's IRQ line; consuming it through the data
/// port lowers the line again.
pub struct Sio2 {
    console: ConsolePort,
    irq: IrqLine,
    pending_rx: Option<u8>,
}

impl Sio2 {
    pub fn new(console: ConsolePort, irq: IrqLine) -> Self {
        Self {
            console,
            irq,
            pending_rx: None,
        }
    }

    fn poll_rx(&mut self) {
        if self.pending_rx.is_none() {
            self.pending_rx = self
                .console
                .next_char()
                .map(|c| if c == 0x0A { 0x0D } else { c });
            if self.pending_rx.is_some() {
                self.irq.raise();
            }
        }
    }
}

impl Device for Sio2 {
    fn read8(&mut self, offset: u16) -> u8 {
        self.poll_rx();
        match offset {
            0 => {
                if self.pending_rx.is_some() {
                    STAT_RX_AVAIL | STAT_INT_PENDING
                } else {
                    0
                }
            }
            1 => match self.pending_rx.take() {
                Some(byte) => {
                    self.irq.lower();
                    byte
                }
                None => 0,
            },
            _ => 0,
        }
    }

    fn write8(&mut self, offset: u16, val: u8) {
        if offset == 1 {
            self.console.put_char(val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_staged_byte_and_raises_irq() {
        let port = ConsolePort::new();
        let irq = IrqLine::new();
        let mut sio = Sio2::new(port.clone(), irq.clone());

        assert_eq!(sio.read8(0), 0);
        assert!(!irq.is_raised());

        port.push_input(b'A');
        assert_eq!(sio.read8(0), STAT_RX_AVAIL | STAT_INT_PENDING);
        assert!(irq.is_raised());
    }

    #[test]
    fn data_read_consumes_and_lowers_irq() {
        let port = ConsolePort::new();
        let irq = IrqLine::new();
        let mut sio = Sio2::new(port.clone(), irq.clone());

        port.push_input(b'B');
        assert_eq!(sio.read8(1), b'B');
        assert!(!irq.is_raised());
        assert_eq!(sio.read8(0), 0);
    }

    #[test]
    fn data_write_transmits() {
        let (port, buf) = ConsolePort::with_capture();
        let mut sio = Sio2::new(port, IrqLine::new());
        sio.write8(1, b'>');
        assert_eq!(*buf.lock().unwrap(), b">");
    }

    #[test]
    fn channel_b_is_inert() {
        let (port, buf) = ConsolePort::with_capture();
        let mut sio = Sio2::new(port, IrqLine::new());
        sio.write8(3, b'x');
        assert_eq!(sio.read8(2), 0);
        assert!(buf.lock().unwrap().is_empty());
    }
}

use crate::device::{ConsolePort, Device};

const STAT_RDRF: u8 = 1 << 0;
const STAT_TDRE: u8 = 1 << 1;

/// MC6850 ACIA serial port, reduced to what the historical monitors use.
///
/// Register offset 0 is status/control, offset 1 is data. Status reports
/// receive-data-ready (bit 0) from the one-byte staging register and
/// transmit-always-ready (bit 1). Reading data consumes the staged byte;
/// writing data sends the low 7 bits to the console. The control register
/// is stored and otherwise ignored.
pub struct Mc6850 {
    console: ConsolePort,
    control: u8,
    pending_rx: Option<u8>,
}

impl Mc6850 {
    pub fn new(console: ConsolePort) -> Self {
        Self {
            console,
            control: 0,
            pending_rx: None,
        }
    }

    /// Pull at most one byte from the console FIFO into the staging
    /// register. The monitors this UART serves expect carriage returns and
    /// upper-case input, so line feeds and lower-case letters are cooked.
    fn poll_rx(&mut self) {
        if self.pending_rx.is_none() {
            self.pending_rx = self.console.next_char().map(|c| match c {
                0x0A => 0x0D,
                b'a'..=b'z' => c.to_ascii_uppercase(),
                _ => c,
            });
        }
    }
}

impl Device for Mc6850 {
    fn read8(&mut self, offset: u16) -> u8 {
        self.poll_rx();
        match offset {
            0 => {
                let mut status = STAT_TDRE;
                if self.pending_rx.is_some() {
                    status |= STAT_RDRF;
                }
                status
            }
            1 => self.pending_rx.take().unwrap_or(0),
            _ => 0,
        }
    }

    fn write8(&mut self, offset: u16, val: u8) {
        match offset {
            0 => self.control = val,
            1 => self.console.put_char(val & 0x7F),
            _ => {}
        }
    }
}

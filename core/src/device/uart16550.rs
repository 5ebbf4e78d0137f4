use crate::device::{ConsolePort, Device};

// register offsets
const RBR: u16 = 0; // THR on write
const IER: u16 = 1;
const IIR: u16 = 2; // FCR on write
const LCR: u16 = 3;
const MCR: u16 = 4;
const LSR: u16 = 5;
const MSR: u16 = 6;
const SCR: u16 = 7;
const DLL: usize = 8; // shadow slots, visible when DLAB is set
const DLM: usize = 9;

const LCR_DLAB: u8 = 1 << 7;

const LSR_DR: u8 = 1 << 0;
const LSR_THRE: u8 = 1 << 5;
const LSR_TEMT: u8 = 1 << 6;

/// 16550-style UART, as used by the "obc" 6809 layout.
///
/// The register window mirrors every 8 bytes. The transmitter is always
/// empty; the receiver reports data-ready from the one-byte staging
/// register fed by the console FIFO. With DLAB set, offsets 0 and 1 switch
/// to the divisor latches, which are stored but have no timing effect.
pub struct Uart16550 {
    console: ConsolePort,
    regs: [u8; 10],
    pending_rx: Option<u8>,
}

impl Uart16550 {
    pub fn new(console: ConsolePort) -> Self {
        Self {
            console,
            regs: [0; 10],
            pending_rx: None,
        }
    }

    fn dlab(&self) -> bool {
        self.regs[LCR as usize] & LCR_DLAB != 0
    }

    fn poll_rx(&mut self) {
        if self.pending_rx.is_none() {
            self.pending_rx = self
                .console
                .next_char()
                .map(|c| if c == 0x0A { 0x0D } else { c });
        }
    }
}

impl Device for Uart16550 {
    fn read8(&mut self, offset: u16) -> u8 {
        let offset = offset & 0x7;
        self.poll_rx();
        match offset {
            RBR => {
                if self.dlab() {
                    self.regs[DLL]
                } else {
                    self.pending_rx.take().unwrap_or(0)
                }
            }
            IER => {
                if self.dlab() {
                    self.regs[DLM]
                } else {
                    self.regs[IER as usize]
                }
            }
            IIR => 0,
            LCR => self.regs[LCR as usize],
            MCR => self.regs[MCR as usize],
            LSR => {
                let mut val = LSR_THRE | LSR_TEMT;
                if self.pending_rx.is_some() {
                    val |= LSR_DR;
                }
                val
            }
            MSR => 0,
            SCR => self.regs[SCR as usize],
            _ => unreachable!(),
        }
    }

    fn write8(&mut self, offset: u16, val: u8) {
        let offset = offset & 0x7;
        match offset {
            RBR => {
                if self.dlab() {
                    self.regs[DLL] = val;
                } else {
                    self.console.put_char(val);
                }
            }
            IER => {
                if self.dlab() {
                    self.regs[DLM] = val;
                } else {
                    self.regs[IER as usize] = val;
                }
            }
            IIR | LCR | MCR | SCR => self.regs[offset as usize] = val,
            LSR | MSR => {}
            _ => unreachable!(),
        }
    }
}

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

enum Sink {
    Stdout,
    Capture(Arc<Mutex<Vec<u8>>>),
}

/// Shared handle between the console thread and the UART devices.
///
/// The console thread pushes each byte it reads from the terminal into the
/// input FIFO; the CPU thread drains it one byte at a time through the
/// UART's receive staging. Output goes straight to the terminal.
#[derive(Clone)]
pub struct ConsolePort {
    input: Arc<Mutex<VecDeque<u8>>>,
    sink: Arc<Sink>,
}

impl ConsolePort {
    pub fn new() -> Self {
        Self {
            input: Arc::new(Mutex::new(VecDeque::new())),
            sink: Arc::new(Sink::Stdout),
        }
    }

    /// A port whose output is captured into a buffer instead of stdout.
    pub fn with_capture() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let port = Self {
            input: Arc::new(Mutex::new(VecDeque::new())),
            sink: Arc::new(Sink::Capture(buf.clone())),
        };
        (port, buf)
    }

    /// Queue a byte typed on the terminal (console-thread side).
    pub fn push_input(&self, byte: u8) {
        if let Ok(mut fifo) = self.input.lock() {
            fifo.push_back(byte);
        }
    }

    /// Drain one queued byte, if any (CPU-thread side).
    pub fn next_char(&self) -> Option<u8> {
        self.input.lock().ok().and_then(|mut fifo| fifo.pop_front())
    }

    /// Send a byte to the terminal.
    pub fn put_char(&self, byte: u8) {
        match &*self.sink {
            Sink::Stdout => {
                let mut out = io::stdout();
                let _ = out.write_all(&[byte]);
                let _ = out.flush();
            }
            Sink::Capture(buf) => {
                if let Ok(mut buf) = buf.lock() {
                    buf.push(byte);
                }
            }
        }
    }
}

impl Default for ConsolePort {
    fn default() -> Self {
        Self::new()
    }
}

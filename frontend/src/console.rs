//! Raw-terminal console.
//!
//! Puts stdin and stdout into a non-canonical mode with the INTR, QUIT,
//! and SUSP control characters disarmed, so ^C, ^\ and ^Z reach the
//! emulated program as ordinary bytes. A reader thread feeds each typed
//! byte into the shared console FIFO; Ctrl-D ends the session. The prior
//! terminal attributes are restored on exit.

use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use filament_core::device::ConsolePort;

const EOT: u8 = 0x04; // Ctrl-D

struct SavedAttrs {
    stdin: libc::termios,
    stdout: libc::termios,
}

pub struct Console {
    port: ConsolePort,
    saved: Option<SavedAttrs>,
}

impl Console {
    /// Capture the current terminal attributes and switch to raw input.
    /// A non-tty stdin (pipes, CI) is left untouched.
    pub fn new() -> Self {
        Self {
            port: ConsolePort::new(),
            saved: set_raw_mode(),
        }
    }

    pub fn port(&self) -> ConsolePort {
        self.port.clone()
    }

    /// Put the terminal back the way it was.
    pub fn restore(&self) {
        if let Some(saved) = &self.saved {
            unsafe {
                libc::tcsetattr(0, libc::TCSANOW, &saved.stdin);
                libc::tcsetattr(1, libc::TCSANOW, &saved.stdout);
            }
        }
    }

    /// Start the blocking reader. On EOF or Ctrl-D it sets the shutdown
    /// flag and exits.
    pub fn spawn_reader(&self, shutdown: Arc<AtomicBool>) -> JoinHandle<()> {
        let port = self.port.clone();
        std::thread::spawn(move || {
            let mut stdin = io::stdin();
            let mut buf = [0u8; 1];
            loop {
                match stdin.read(&mut buf) {
                    Ok(1) if buf[0] != EOT => port.push_input(buf[0]),
                    _ => break,
                }
            }
            shutdown.store(true, Ordering::Relaxed);
        })
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.restore();
    }
}

fn set_raw_mode() -> Option<SavedAttrs> {
    unsafe {
        if libc::isatty(0) == 0 {
            return None;
        }

        let mut old_stdin: libc::termios = std::mem::zeroed();
        let mut old_stdout: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut old_stdin) != 0 || libc::tcgetattr(1, &mut old_stdout) != 0 {
            return None;
        }

        // no line buffering; pass INTR/QUIT/SUSP through as literal bytes
        let mut raw = old_stdin;
        raw.c_lflag = libc::ISIG;
        raw.c_cc[libc::VINTR] = 0;
        raw.c_cc[libc::VQUIT] = 0;
        raw.c_cc[libc::VSUSP] = 0;
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;
        libc::tcsetattr(0, libc::TCSANOW, &raw);

        let mut raw = old_stdout;
        raw.c_lflag = libc::ISIG;
        raw.c_cc[libc::VINTR] = 0;
        raw.c_cc[libc::VQUIT] = 0;
        raw.c_cc[libc::VSUSP] = 0;
        libc::tcsetattr(1, libc::TCSANOW, &raw);

        Some(SavedAttrs {
            stdin: old_stdin,
            stdout: old_stdout,
        })
    }
}

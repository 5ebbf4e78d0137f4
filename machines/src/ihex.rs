//! Intel HEX loader.
//!
//! Parses `:`-prefixed records and applies each data byte through a caller
//! callback, so an image can span several device regions of an address
//! map. Only data (0x00) and end-of-file (0x01) records are supported;
//! the extended-address types 0x02-0x05 abort the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug)]
pub enum HexError {
    Io(io::Error),
    /// Record syntax error: missing `:`, bad hex digit, or truncated line.
    Malformed { line: usize },
    /// Record type 0x02-0x05 (extended segment/linear addressing).
    UnsupportedRecord { line: usize, kind: u8 },
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Malformed { line } => write!(f, "malformed HEX record on line {line}"),
            Self::UnsupportedRecord { line, kind } => {
                write!(f, "unhandled record type {kind} on line {line}")
            }
        }
    }
}

impl std::error::Error for HexError {}

impl From<io::Error> for HexError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

fn hex_byte(digits: &str, index: usize) -> Option<u8> {
    let pair = digits.get(index * 2..index * 2 + 2)?;
    u8::from_str_radix(pair, 16).ok()
}

/// Parse `path`, calling `store(address, byte)` for every data byte.
///
/// Stops at the end-of-file record. Blank lines are tolerated; checksums
/// are present in the format but not verified.
pub fn load<P: AsRef<Path>>(path: P, mut store: impl FnMut(u16, u8)) -> Result<(), HexError> {
    let file = File::open(path)?;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let lineno = index + 1;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let digits = match line.strip_prefix(':') {
            Some(digits) => digits,
            None => return Err(HexError::Malformed { line: lineno }),
        };

        let count = hex_byte(digits, 0).ok_or(HexError::Malformed { line: lineno })? as usize;
        let addr_hi = hex_byte(digits, 1).ok_or(HexError::Malformed { line: lineno })?;
        let addr_lo = hex_byte(digits, 2).ok_or(HexError::Malformed { line: lineno })?;
        let kind = hex_byte(digits, 3).ok_or(HexError::Malformed { line: lineno })?;
        let address = (addr_hi as u16) << 8 | addr_lo as u16;

        match kind {
            0x00 => {
                // payload plus trailing checksum must be present
                if digits.len() < (4 + count + 1) * 2 {
                    return Err(HexError::Malformed { line: lineno });
                }
                for i in 0..count {
                    let byte =
                        hex_byte(digits, 4 + i).ok_or(HexError::Malformed { line: lineno })?;
                    store(address.wrapping_add(i as u16), byte);
                }
            }
            0x01 => return Ok(()),
            0x02..=0x05 => {
                return Err(HexError::UnsupportedRecord {
                    line: lineno,
                    kind,
                })
            }
            _ => {}
        }
    }

    Ok(())
}

//! System-preset registry.
//!
//! Each preset self-registers via [`inventory::submit!`] with a
//! [`SystemEntry`] naming its CLI name, CPU, default ROM path, and factory
//! function. The front-end selects a preset by name at runtime without a
//! central list.

use std::io;
use std::path::{Path, PathBuf};

use filament_core::core::Machine;
use filament_core::device::ConsolePort;

use crate::ihex::HexError;

/// Inputs a preset factory builds from.
pub struct SystemConfig {
    /// Sub-variant from the `-suffix` of the system string (empty if none).
    pub variant: String,
    /// ROM image path (the preset default unless overridden).
    pub rom: PathBuf,
    /// Console the machine's serial devices talk to.
    pub console: ConsolePort,
}

/// Describes a buildable system preset.
pub struct SystemEntry {
    /// CLI name used to select this system (e.g., "altair680").
    pub name: &'static str,
    /// Name of the CPU this preset runs, for `--cpu` validation.
    pub cpu: &'static str,
    /// Default ROM image path.
    pub default_rom: &'static str,
    /// Factory: construct the machine from a config.
    pub create: fn(&SystemConfig) -> Result<Box<dyn Machine>, BuildError>,
}

impl SystemEntry {
    pub const fn new(
        name: &'static str,
        cpu: &'static str,
        default_rom: &'static str,
        create: fn(&SystemConfig) -> Result<Box<dyn Machine>, BuildError>,
    ) -> Self {
        Self {
            name,
            cpu,
            default_rom,
            create,
        }
    }
}

inventory::collect!(SystemEntry);

/// All registered presets, sorted by name.
pub fn all() -> Vec<&'static SystemEntry> {
    let mut entries: Vec<_> = inventory::iter::<SystemEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a preset by its CLI name.
pub fn find(name: &str) -> Option<&'static SystemEntry> {
    inventory::iter::<SystemEntry>
        .into_iter()
        .find(|e| e.name == name)
}

/// Errors that can occur while resolving and building a system.
#[derive(Debug)]
pub enum BuildError {
    UnknownSystem(String),
    UnknownVariant {
        system: &'static str,
        variant: String,
    },
    CpuMismatch {
        system: &'static str,
        requested: String,
        supported: &'static str,
    },
    Io {
        path: PathBuf,
        err: io::Error,
    },
    Hex {
        path: PathBuf,
        err: HexError,
    },
    RomTooShort {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSystem(name) => write!(f, "unknown system '{name}'"),
            Self::UnknownVariant { system, variant } => {
                write!(f, "system '{system}' has no variant '{variant}'")
            }
            Self::CpuMismatch {
                system,
                requested,
                supported,
            } => write!(
                f,
                "system '{system}' does not support cpu '{requested}' (only '{supported}')"
            ),
            Self::Io { path, err } => write!(f, "{}: {err}", path.display()),
            Self::Hex { path, err } => write!(f, "{}: {err}", path.display()),
            Self::RomTooShort {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{}: ROM image too short: expected at least {expected} bytes, got {actual}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Resolve a `--system` string and build the machine.
///
/// The string splits at the first `-` into the main system name and a
/// sub-variant, so `6809-obc` selects the `6809` preset with its `obc`
/// memory layout.
pub fn build(
    system: &str,
    cpu: Option<&str>,
    rom: Option<&Path>,
    console: ConsolePort,
) -> Result<Box<dyn Machine>, BuildError> {
    let (name, variant) = match system.split_once('-') {
        Some((name, variant)) => (name, variant),
        None => (system, ""),
    };

    let entry = find(name).ok_or_else(|| BuildError::UnknownSystem(system.to_string()))?;

    if let Some(requested) = cpu {
        if requested != entry.cpu {
            return Err(BuildError::CpuMismatch {
                system: entry.name,
                requested: requested.to_string(),
                supported: entry.cpu,
            });
        }
    }

    let config = SystemConfig {
        variant: variant.to_string(),
        rom: rom.unwrap_or(Path::new(entry.default_rom)).to_path_buf(),
        console,
    };

    (entry.create)(&config)
}

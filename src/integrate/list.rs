//! List mode (--list option)
//!
//! Prints pets to stdout instead of starting the interactive UI.

use std::io::{self, Write};
use std::str::FromStr;

use crate::store::Pet;

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Normal exit
/// - `ERROR` (2): Runtime error (I/O error, terminal error, navigation contract violation)
/// - `INVALID` (3): Invalid command-line arguments or option values
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, invalid format)
    pub const INVALID: i32 = 3;
}

/// Output format for list mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One tab-separated pet per line (default)
    #[default]
    Lines,
    /// JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Write pets to any writer
pub fn write_pets<W: Write>(out: &mut W, pets: &[Pet], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for pet in pets {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    pet.id,
                    pet.name,
                    pet.age,
                    pet.breed,
                    pet.location,
                    pet.likes
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, pets).map_err(io::Error::other)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Output pets to stdout
pub fn output_pets(pets: &[Pet], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_pets(&mut handle, pets, format)?;
    handle.flush()
}

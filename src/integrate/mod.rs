//! Integrate module - Non-interactive output for scripts
//!
//! - List mode: print the pet repository to stdout (--list)
//! - Stable exit codes

pub mod list;

pub use list::{exit_code, output_pets, write_pets, OutputFormat};

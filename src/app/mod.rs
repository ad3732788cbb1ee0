//! Application module
//!
//! This module contains the application model, configuration,
//! logging setup and event loop for PetView.

mod config;
mod config_file;
mod event_loop;
mod logging;
mod model;
mod render;

pub use config::{parse_args, CliCommand, Config};
pub use config_file::ConfigFile;
pub use event_loop::{run_app, AppResult};
pub use logging::{init_logging, LOG_ENV};
pub use model::{load_repository, AppModel};
pub use render::render_frame;

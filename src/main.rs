//! PetView - Browse and adopt pets in your terminal

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use petview::app::{init_logging, load_repository, run_app, AppModel, Config};
use petview::integrate::{exit_code, output_pets};

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    if let Err(e) = init_logging(config.log_file.as_deref(), !config.list_mode) {
        eprintln!("Error: failed to set up logging: {}", e);
        return ExitCode::from(exit_code::ERROR as u8);
    }

    // Reported after logger setup so a log file records it too
    if let Some(warning) = &config.config_warning {
        eprintln!("Warning: {}", warning);
        if config.log_file.is_some() {
            log::warn!("{}", warning);
        }
    }

    // Handle non-interactive mode first
    if config.list_mode {
        return run_list_mode(&config);
    }

    match run_with_config(&config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Run in list output mode (non-interactive)
fn run_list_mode(config: &Config) -> ExitCode {
    let repo = match load_repository(config) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::ERROR as u8);
        }
    };

    let pets = if config.favorites_only {
        repo.favorites()
    } else {
        repo.pets().to_vec()
    };

    match output_pets(&pets, config.output_format) {
        Ok(_) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_with_config(config: &Config) -> anyhow::Result<i32> {
    // Build the model before touching the terminal so configuration
    // errors are reported on a normal screen
    let mut model = AppModel::from_config(config)?;

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut model);

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result.map(|app_result| app_result.exit_code)
}

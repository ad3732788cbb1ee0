//! Main event loop for the application

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use super::render::render_frame;
use super::AppModel;
use crate::handler::ActionResult;

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Main event loop
///
/// Runs until an action asks to quit. A navigator contract violation ends
/// the loop with an error.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut AppModel,
) -> anyhow::Result<AppResult> {
    log::info!(
        "session started: tabs {:?}, active {}",
        model.navigator.tabs(),
        model.navigator.active_tab()
    );

    loop {
        model.sync();
        terminal.draw(|frame| render_frame(frame, model))?;

        // Handle events (60ms timeout balances responsiveness and CPU usage)
        if !event::poll(Duration::from_millis(60))? {
            continue;
        }

        match event::read()? {
            // Ignore key releases reported by some terminals
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match model.handle_key(key)? {
                    ActionResult::Continue => {}
                    ActionResult::Quit(exit_code) => {
                        log::info!("session ended with exit code {}", exit_code);
                        return Ok(AppResult { exit_code });
                    }
                }
            }
            // Resizes are picked up by the next draw
            _ => {}
        }
    }
}

//! Rendering helpers for the event loop

use ratatui::prelude::*;

use super::AppModel;
use crate::core::{Destination, ViewMode};
use crate::render::{
    render_about, render_add_form, render_detail, render_pet_list, render_popups, render_start,
    render_status_bar, render_tab_bar,
};

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, model: &AppModel) {
    let size = frame.area();

    if model.state.mode == ViewMode::Start {
        render_start(frame, size);
        return;
    }

    // Tab bar, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    render_tab_bar(frame, &model.navigator, chunks[0]);
    render_destination(frame, model, chunks[1]);
    render_status_bar(frame, &model.state, &model.navigator, chunks[2]);
    render_popups(frame, &model.state);
}

/// Render whatever the active tab's back stack shows
fn render_destination(frame: &mut Frame, model: &AppModel, area: Rect) {
    let screens = &model.screens;
    match model.navigator.current() {
        Destination::Home => {
            let title = if screens.home.query().is_empty() {
                "Our pets".to_string()
            } else {
                format!("Our pets matching '{}'", screens.home.query())
            };
            render_pet_list(
                frame,
                &title,
                screens.home.list(),
                "No pets to show.",
                area,
            );
        }
        Destination::Favorites => render_pet_list(
            frame,
            "My favorites",
            screens.favorites.list(),
            "No favorites yet. Open a pet and press f to like it!",
            area,
        ),
        Destination::About => render_about(frame, area),
        Destination::AddPet => render_add_form(frame, &screens.add, area),
        Destination::PetDetail(_) => render_detail(frame, screens.detail.pet(), area),
    }
}

//! Pet list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::screen::PetList;
use crate::store::{Pet, Species};

/// Render a selectable list of pets
pub fn render_pet_list(frame: &mut Frame, title: &str, list: &PetList, empty: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", title, list.len()));

    if list.is_empty() {
        let para = Paragraph::new(empty)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = list.pets().iter().map(render_entry).collect();
    let widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::LightRed)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(list.selected_index()));
    frame.render_stateful_widget(widget, area, &mut state);
}

/// Icon for a species
pub fn species_icon(species: Species) -> &'static str {
    match species {
        Species::Dog => "\u{1f415}",
        Species::Cat => "\u{1f408}",
        Species::Other => "\u{1f43e}",
    }
}

/// Render a single pet as a ListItem
fn render_entry(pet: &Pet) -> ListItem<'static> {
    let mut spans = vec![
        Span::raw(format!("{} ", species_icon(pet.species))),
        Span::styled(
            pet.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(", {}", pet.age_label())),
        Span::styled(
            format!("  {} · {}", pet.breed, pet.location),
            Style::default().fg(Color::Gray),
        ),
    ];
    if pet.is_favorite() {
        spans.push(Span::styled(
            format!("  \u{2665} {}", pet.likes),
            Style::default().fg(Color::Red),
        ));
    }
    ListItem::new(Line::from(spans))
}

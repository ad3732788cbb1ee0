//! Pet detail rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::pets::species_icon;
use crate::store::Pet;

/// Render the detail page; `None` means the pet is gone
pub fn render_detail(frame: &mut Frame, pet: Option<&Pet>, area: Rect) {
    let Some(pet) = pet else {
        let block = Block::default().borders(Borders::ALL).title(" Detail ");
        let para = Paragraph::new("This pet is no longer available. It may have been adopted.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(para, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{}  ", species_icon(pet.species))),
            Span::styled(
                pet.name.clone(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Age       ", label),
            Span::raw(pet.age_label()),
        ]),
        Line::from(vec![
            Span::styled("Breed     ", label),
            Span::raw(pet.breed.clone()),
        ]),
        Line::from(vec![
            Span::styled("Species   ", label),
            Span::raw(pet.species.label()),
        ]),
        Line::from(vec![
            Span::styled("Location  ", label),
            Span::raw(pet.location.clone()),
        ]),
        Line::from(vec![
            Span::styled("Likes     ", label),
            Span::styled(format!("\u{2665} {}", pet.likes), Style::default().fg(Color::Red)),
        ]),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        "f: like   x: adopt   Esc: back",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Pet #{} ", pet.id));
    let para = Paragraph::new(lines).block(block);
    frame.render_widget(para, area);
}

//! Static pages: start and about

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the welcome page
pub fn render_start(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to PetView",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Find the perfect pet for you."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" See pets    "),
            Span::styled("[i]", Style::default().fg(Color::Yellow)),
            Span::raw(" About us    "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ]),
    ];
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(para, area);
}

/// Render the about page
pub fn render_about(frame: &mut Frame, area: Rect) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("\u{2665} About us", heading.fg(Color::Red))),
        Line::from("An application to adopt the perfect pet for you."),
        Line::from(""),
        Line::from(Span::styled("TECHNICAL INFORMATION", heading.fg(Color::DarkGray))),
        Line::from(format!("Version   {}", env!("CARGO_PKG_VERSION"))),
        Line::from("Data      in-memory, reset on exit"),
        Line::from("Tabs      each tab keeps its own history"),
    ];
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" About "));
    frame.render_widget(para, area);
}

//! Status bar and popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::{AppState, PendingAction, TabNavigator, ViewMode};

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, state: &AppState, navigator: &TabNavigator, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left: message or help hint
    let message = state.message.as_deref().unwrap_or("? for help");
    let msg_widget = Paragraph::new(format!(" {}", message))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[0]);

    // Right: back stack of the active tab
    let right = if state.show_breadcrumb {
        breadcrumb(navigator)
    } else {
        navigator.current().label()
    };
    let stack_widget = Paragraph::new(right)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stack_widget, chunks[1]);
}

/// "Home > Pet #1 > Add pet"
pub fn breadcrumb(navigator: &TabNavigator) -> String {
    navigator
        .active_stack()
        .entries()
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Render popups for the current mode
pub fn render_popups(frame: &mut Frame, state: &AppState) {
    match &state.mode {
        ViewMode::Search { query } => draw_input_popup(frame, "Search", query),
        ViewMode::Confirm { action } => draw_confirm_popup(frame, action),
        ViewMode::Help => draw_help_popup(frame),
        _ => {}
    }
}

/// Draw a simple input popup
fn draw_input_popup(frame: &mut Frame, title: &str, content: &str) {
    let area = centered_rect(60, 3, frame.area());

    let input = Paragraph::new(content)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(Clear, area);
    frame.render_widget(input, area);
}

fn draw_confirm_popup(frame: &mut Frame, action: &PendingAction) {
    match action {
        PendingAction::Adopt { name, .. } => {
            let area = centered_rect(50, 5, frame.area());
            let content = vec![
                Line::from(format!("Adopt {}?", name)),
                Line::from(Span::styled(
                    "[y] Yes   [n] No",
                    Style::default().fg(Color::Yellow),
                )),
            ];
            let popup = Paragraph::new(content).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Confirm ")
                    .border_style(Style::default().fg(Color::LightRed)),
            );
            frame.render_widget(Clear, area);
            frame.render_widget(popup, area);
        }
    }
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render help popup overlay
fn draw_help_popup(frame: &mut Frame) {
    let section = Style::default().add_modifier(Modifier::BOLD);
    let help_lines = vec![
        Line::from(Span::styled("Tabs", section)),
        Line::from("  1-9      Select tab (again: back to its first screen)"),
        Line::from("  Tab      Next tab"),
        Line::from("  S-Tab    Previous tab"),
        Line::from(""),
        Line::from(Span::styled("Navigation", section)),
        Line::from("  j/\u{2193}      Move down"),
        Line::from("  k/\u{2191}      Move up"),
        Line::from("  g/G      Go to top/bottom"),
        Line::from("  Enter    Open details"),
        Line::from("  Esc/h    Back"),
        Line::from(""),
        Line::from(Span::styled("Pets", section)),
        Line::from("  f        Like"),
        Line::from("  x        Adopt"),
        Line::from("  /        Search (Home)"),
        Line::from("  a        Add a pet (Home)"),
        Line::from(""),
        Line::from("  q        Quit"),
    ];

    let height = (help_lines.len() as u16 + 2).min(frame.area().height);
    let area = centered_rect(60, height, frame.area());
    let popup = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help (any key to close) "),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

//! Tab bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::TabNavigator;

/// Render the tab bar at the top of the screen
pub fn render_tab_bar(frame: &mut Frame, navigator: &TabNavigator, area: Rect) {
    let mut spans = Vec::new();
    let active = navigator.active_tab();
    let count = navigator.tabs().len();

    for (i, tab) in navigator.tabs().iter().enumerate() {
        let is_active = *tab == active;

        // Tab number doubles as its key binding
        let num = format!(" {} ", i + 1);

        // Depth marker when the tab has history
        let depth = navigator.stack(*tab).map(|s| s.depth()).unwrap_or(1);
        let name = if depth > 1 {
            format!("{} ({}) ", tab.label(), depth - 1)
        } else {
            format!("{} ", tab.label())
        };

        if is_active {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD);
            spans.push(Span::styled(num, style));
            spans.push(Span::styled(name.to_uppercase(), style));
        } else {
            spans.push(Span::styled(num, Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(name, Style::default().fg(Color::Gray)));
        }

        // Separator
        if i < count - 1 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    frame.render_widget(para, area);
}

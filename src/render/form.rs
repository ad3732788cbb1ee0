//! New pet form rendering

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::screen::{AddPetForm, FormField};

const LABEL_WIDTH: usize = 10;

/// Render the form and place the cursor in the focused text field
pub fn render_add_form(frame: &mut Frame, form: &AddPetForm, area: Rect) {
    let focus = form.focus();
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = field == focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value = if field == FormField::Species {
            format!("< {} >", form.value(field))
        } else {
            form.value(field).to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::raw(value),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(err) = form.error() {
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab/\u{2193}: next field   Enter: save   Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Add pet "));
    frame.render_widget(para, area);

    if focus != FormField::Species {
        let row = FormField::ALL.iter().position(|f| *f == focus).unwrap_or(0);
        if let Some(position) = cursor_position(area, row, form.value(focus), form.cursor()) {
            frame.set_cursor_position(position);
        }
    }
}

/// Terminal cell for a text cursor `cursor` chars into `value`
///
/// Columns are display widths. None when the cell falls outside `area`.
fn cursor_position(area: Rect, row: usize, value: &str, cursor: usize) -> Option<Position> {
    let before: String = value.chars().take(cursor).collect();
    let column = LABEL_WIDTH.checked_add(Span::raw(before).width())?;
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(u16::try_from(column).ok()?);
    let y = area
        .y
        .saturating_add(1)
        .saturating_add(u16::try_from(row).ok()?);
    (x < area.right() && y < area.bottom()).then_some(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(2, 3, 40, 10)
    }

    #[test]
    fn test_cursor_after_label() {
        assert_eq!(
            cursor_position(area(), 0, "", 0),
            Some(Position::new(13, 4))
        );
        assert_eq!(
            cursor_position(area(), 2, "Husky", 3),
            Some(Position::new(16, 6))
        );
    }

    #[test]
    fn test_cursor_counts_display_width() {
        // Each CJK char takes two cells
        assert_eq!(
            cursor_position(area(), 0, "\u{732b}\u{732b}x", 2),
            Some(Position::new(17, 4))
        );
        assert_eq!(
            cursor_position(area(), 0, "Mu\u{f1}eca", 3),
            Some(Position::new(16, 4))
        );
    }

    #[test]
    fn test_cursor_outside_area_is_skipped() {
        assert_eq!(cursor_position(area(), 0, &"a".repeat(40), 40), None);
        assert_eq!(cursor_position(area(), 12, "", 0), None);

        let huge = "a".repeat(70_000);
        assert_eq!(cursor_position(area(), 0, &huge, 70_000), None);
        assert_eq!(cursor_position(Rect::new(u16::MAX - 5, 0, 5, 3), 0, "ab", 2), None);
    }
}

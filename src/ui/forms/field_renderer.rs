//! Field rendering utilities for the intake form
//!
//! Each field occupies a bordered box plus an optional message line. Three
//! mutually exclusive states drive the coloring: neutral (DarkGray), valid
//! (Green), error (Red); the active field is always Cyan.

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Visual affordance of a rendered field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAffordance {
    Neutral,
    Valid,
    Error,
}

impl FieldAffordance {
    /// Derive the affordance from the visibility policy's outputs
    pub fn from_policy(error: Option<&str>, valid: bool) -> Self {
        if error.is_some() {
            Self::Error
        } else if valid {
            Self::Valid
        } else {
            Self::Neutral
        }
    }

    fn border_color(self) -> Color {
        match self {
            Self::Neutral => Color::DarkGray,
            Self::Valid => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Draw a form field box with its message line.
///
/// `error` is the already-gated message from the visibility policy; `note`
/// is an informational line shown when there is no error (resume selection).
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
    valid: bool,
    note: Option<&str>,
) {
    let (box_area, message_area) = split_message_line(area);
    let affordance = FieldAffordance::from_policy(error, valid);

    let border_color = if is_active {
        Color::Cyan
    } else {
        affordance.border_color()
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.value.is_empty() && !is_active {
        // Placeholder, dimmed, the way the page hints expected input
        Paragraph::new(Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.clone(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if affordance == FieldAffordance::Valid {
        format!(" {} ✓ ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);

    if let Some(message_area) = message_area {
        if let Some(error) = error {
            let msg = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
            frame.render_widget(msg, message_area);
        } else if let Some(note) = note {
            let msg = Paragraph::new(note.to_string()).style(Style::default().fg(Color::Green));
            frame.render_widget(msg, message_area);
        }
    }
}

/// Draw a checkbox row: a marker plus wrapped label, with an error line when
/// the area allows one
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    error: Option<&str>,
) {
    let (box_area, message_area) = split_message_line(area);

    let marker = if checked { "[x] " } else { "[ ] " };
    let marker_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(marker, marker_style),
        Span::raw(label.to_string()),
    ]))
    .wrap(Wrap { trim: false });
    frame.render_widget(content, box_area);

    if let (Some(message_area), Some(error)) = (message_area, error) {
        let msg = Paragraph::new(format!("    {error}")).style(Style::default().fg(Color::Red));
        frame.render_widget(msg, message_area);
    }
}

/// Reserve the bottom row of an area for a message line when it fits
fn split_message_line(area: Rect) -> (Rect, Option<Rect>) {
    if area.height < 2 {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

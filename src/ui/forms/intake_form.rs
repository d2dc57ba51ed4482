//! Volunteer intake form rendering

use super::field_renderer::{draw_checkbox, draw_field};
use crate::app::App;
use crate::state::{FieldId, CLEAR_BUTTON, SUBMIT_BUTTON};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CONSENT_LABEL: &str = "I consent to the use of the information I provided to match me with \
volunteer opportunities *";
const UPDATES_LABEL: &str = "Keep me in the loop as new projects and opportunities emerge \
(optional)";
const SUCCESS_BANNER: &str =
    "Application submitted. A core team member will reach out with next steps.";

/// Draw the intake form view
pub fn draw_intake(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Volunteer Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Banner
            Constraint::Length(4),             // Full name / Email
            Constraint::Length(4),             // Location / Areas
            Constraint::Length(4),             // Capacity / Experience
            Constraint::Length(4),             // LinkedIn / GitHub
            Constraint::Length(4),             // Resume path
            Constraint::Length(6),             // Motivation
            Constraint::Length(9),             // Consent panel
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    draw_banner(frame, chunks[0], app);

    draw_field_pair(frame, chunks[1], app, (FieldId::FullName, 0), (FieldId::Email, 1));
    draw_field_pair(frame, chunks[2], app, (FieldId::Location, 2), (FieldId::Areas, 3));
    draw_field_pair(
        frame,
        chunks[3],
        app,
        (FieldId::Capacity, 4),
        (FieldId::Experience, 5),
    );
    draw_field_pair(
        frame,
        chunks[4],
        app,
        (FieldId::Linkedin, 6),
        (FieldId::Github, 7),
    );

    draw_resume_field(frame, chunks[5], app);
    draw_single_field(frame, chunks[6], app, FieldId::Motivation, 9);
    draw_consent_panel(frame, chunks[7], app);
    draw_buttons(frame, chunks[8], app);
}

/// Banner line above the form: success, failure reason, or busy indicator
fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.state.show_success {
        Line::from(Span::styled(
            SUCCESS_BANNER,
            Style::default().fg(Color::Green),
        ))
    } else if let Some(reason) = app.state.submission.failure_reason() {
        Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::Red),
        ))
    } else if app.state.submission.is_submitting() {
        Line::from(Span::styled(
            "Submitting…",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_field_pair(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    left: (FieldId, usize),
    right: (FieldId, usize),
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    draw_single_field(frame, halves[0], app, left.0, left.1);
    draw_single_field(frame, halves[1], app, right.0, right.1);
}

fn draw_single_field(frame: &mut Frame, area: Rect, app: &App, id: FieldId, index: usize) {
    let form = &app.state.form;
    let rules = app.config.rules();
    let Some(field) = form.text_field(id) else {
        return;
    };
    let error = form.visible_error(id, &rules);
    draw_field(
        frame,
        area,
        field,
        form.active_field_index == index,
        error.as_deref(),
        form.shows_valid(id, &rules),
        None,
    );
}

/// The resume row shows the selected attachment below the path input
fn draw_resume_field(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let rules = app.config.rules();
    let error = form.visible_error(FieldId::Resume, &rules);
    let note = form
        .resume
        .as_ref()
        .map(|f| format!("Selected: {} ({:.2} MB)", f.name, f.size_mb()));
    draw_field(
        frame,
        area,
        &form.resume_path,
        form.active_field_index == 8,
        error.as_deref(),
        form.shows_valid(FieldId::Resume, &rules),
        note.as_deref(),
    );
}

fn draw_consent_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let rules = app.config.rules();

    let block = Block::default()
        .title(" Privacy and consent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro line
            Constraint::Length(3), // Consent + error line
            Constraint::Length(2), // Updates opt-in
            Constraint::Min(0),
        ])
        .split(inner);

    let intro = Paragraph::new(
        "Your information is used solely to match you with volunteer opportunities.",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(intro, rows[0]);

    let consent_error = form.visible_error(FieldId::Consent, &rules);
    draw_checkbox(
        frame,
        rows[1],
        CONSENT_LABEL,
        form.consent,
        form.active_field_index == 10,
        consent_error.as_deref(),
    );
    draw_checkbox(
        frame,
        rows[2],
        UPDATES_LABEL,
        form.updates_opt_in,
        form.active_field_index == 11,
        None,
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let submitting = app.state.submission.is_submitting();
    let on_buttons = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);

    let submit_label = if submitting { "Submitting…" } else { "Submit" };
    render_button(
        frame,
        chunks[0],
        submit_label,
        on_buttons && form.selected_button == SUBMIT_BUTTON,
        !submitting,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        "Clear form",
        on_buttons && form.selected_button == CLEAR_BUTTON,
        !submitting,
        Some(Color::Gray),
    );
}

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::session::SubmissionState;
use crate::state::AppState;

pub fn draw_result(f: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let score = session.score().unwrap_or(0);
    let total = session.questions().len();

    let (heading, heading_color) = if session.was_interrupted() {
        ("✗  Quiz Ended Early", Color::Red)
    } else {
        ("✓  Quiz Complete", Color::Green)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default()
                .fg(heading_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {} / {}", score, total),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if session.was_interrupted() {
        lines.push(Line::from(
            "The quiz window lost focus. Unanswered questions were counted as wrong.",
        ));
        lines.push(Line::from(""));
    }

    let (status, status_style) = match session.submission() {
        SubmissionState::Idle if !state.collector_configured => (
            "No collector is configured. Show this screen to the proctor.",
            Style::default().fg(Color::Yellow),
        ),
        SubmissionState::Idle => (
            "Turn your internet back on, then press Enter to submit.",
            Style::default().fg(Color::White),
        ),
        SubmissionState::InFlight => (
            "Submitting...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        SubmissionState::Submitted => (
            "✓  Result submitted. You may close the quiz.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        SubmissionState::Failed => (
            "✗  Submission failed. Check your connection and press Enter to try again.",
            Style::default().fg(Color::Red),
        ),
    };
    lines.push(Line::from(Span::styled(status, status_style)));
    lines.push(Line::from(""));

    if let Some(details) = session.details() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} · {} · {} · {}",
                details.name, details.register_number, details.department, details.year
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

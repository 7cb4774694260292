// Status bar widget: participant count, pairing state, strategy, last notice.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::PairingStatus;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [count] | [pairing state] | [strategy] | [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let separator = || Span::styled(" | ", Style::default().fg(Color::Gray));
    let (status_text, status_color) = pairing_indicator(&state.status);

    let mut spans = vec![
        Span::styled(
            format!(" {} participants", state.participants.len()),
            Style::default().fg(Color::White),
        ),
        separator(),
        Span::styled(status_text, Style::default().fg(status_color)),
        separator(),
        Span::styled(
            format!("Strategy: {}", state.strategy),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(notice) = &state.notice {
        spans.push(separator());
        spans.push(Span::styled(notice.clone(), Style::default().fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Text and color describing the pairing state.
pub fn pairing_indicator(status: &PairingStatus) -> (String, Color) {
    match status {
        PairingStatus::Empty => ("No participants".to_string(), Color::Gray),
        PairingStatus::OddCount => (
            "Odd count: add or remove one to pair".to_string(),
            Color::Yellow,
        ),
        PairingStatus::Paired => ("Everyone paired".to_string(), Color::Green),
        PairingStatus::Failed(reason) => (format!("Pairing failed: {reason}"), Color::Red),
    }
}

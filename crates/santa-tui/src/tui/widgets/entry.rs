// Entry widget: new-participant text field and the "Add Participant" button.
//
// The button is drawn dimmed while the pending name is blank; Enter is
// ignored in that state (see input.rs).

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::layout::AppLayout;
use crate::tui::{Focus, ViewState};

const PLACEHOLDER: &str = "Enter name";
const BUTTON_LABEL: &str = "Add Participant";

/// Render the entry field and button.
pub fn render(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let focused = state.focus == Focus::Entry;

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text = if state.pending_name.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(state.pending_name.as_str())
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("New participant"),
    );
    frame.render_widget(input, layout.entry_input);

    if focused && layout.entry_input.height >= 3 && layout.entry_input.width >= 3 {
        let inner_width = layout.entry_input.width.saturating_sub(2);
        let typed = state.pending_name.chars().count() as u16;
        let x = layout.entry_input.x + 1 + typed.min(inner_width.saturating_sub(1));
        frame.set_cursor_position((x, layout.entry_input.y + 1));
    }

    let button = Paragraph::new(Line::from(Span::styled(
        BUTTON_LABEL,
        button_style(state.can_add()),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(button_style(state.can_add())),
    );
    frame.render_widget(button, layout.add_button);
}

/// Button style: bold on blue when enabled, dim gray when disabled.
pub fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

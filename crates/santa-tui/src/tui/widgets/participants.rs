// Participants widget: one row per participant with their giftee.
//
// "1  Alice   Bob"
// "2  Carol   Not assigned"
// The selected row is highlighted while the table has focus and carries
// the remove hint.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use santa_core::assignment::NOT_ASSIGNED;

use crate::protocol::ParticipantRow;
use crate::tui::{Focus, ViewState};

const REMOVE_HINT: &str = "[d] Remove";

/// Render the participant table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Focus::List;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("Participants ({})", state.participants.len()));

    if state.participants.is_empty() {
        let paragraph = Paragraph::new("  No participants yet. Type a name and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let selected = if focused { state.selected } else { None };

    let rows: Vec<Row> = state
        .participants
        .iter()
        .enumerate()
        .map(|(i, row)| format_row(i, row, selected == Some(i)))
        .collect();

    let header = Row::new(vec!["#", "Name", "Giftee", ""]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(REMOVE_HINT.len() as u16),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut table_state = TableState::default();
    table_state.select(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Giftee column text.
pub fn giftee_label(row: &ParticipantRow) -> &str {
    row.giftee.as_deref().unwrap_or(NOT_ASSIGNED)
}

fn format_row(index: usize, row: &ParticipantRow, is_selected: bool) -> Row<'static> {
    let giftee_style = if row.giftee.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    };
    let hint = if is_selected { REMOVE_HINT } else { "" };

    Row::new(vec![
        Cell::from(format!("{}", index + 1)),
        Cell::from(row.name.clone()),
        Cell::from(giftee_label(row).to_string()).style(giftee_style),
        Cell::from(hint).style(Style::default().fg(Color::Red)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn state_with(rows: &[(&str, Option<&str>)]) -> ViewState {
        let mut state = ViewState::default();
        state.participants = rows
            .iter()
            .map(|(name, giftee)| ParticipantRow {
                name: name.to_string(),
                giftee: giftee.map(str::to_string),
            })
            .collect();
        state
    }

    fn render_text(state: &ViewState) -> String {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn giftee_label_falls_back_to_not_assigned() {
        let state = state_with(&[("Alice", Some("Bob")), ("Carol", None)]);
        assert_eq!(giftee_label(&state.participants[0]), "Bob");
        assert_eq!(giftee_label(&state.participants[1]), "Not assigned");
    }

    #[test]
    fn empty_table_shows_hint() {
        let text = render_text(&ViewState::default());
        assert!(text.contains("No participants yet"));
        assert!(text.contains("Participants (0)"));
    }

    #[test]
    fn rows_show_names_and_giftees() {
        let state = state_with(&[("Alice", Some("Bob")), ("Bob", Some("Alice"))]);
        let text = render_text(&state);
        assert!(text.contains("Participants (2)"));
        assert!(text.contains("Alice"));
        assert!(!text.contains(NOT_ASSIGNED));
    }

    #[test]
    fn remove_hint_only_when_list_focused() {
        let mut state = state_with(&[("Alice", None), ("Bob", None), ("Carol", None)]);
        state.selected = Some(1);
        assert!(!render_text(&state).contains(REMOVE_HINT));

        state.focus = Focus::List;
        assert!(render_text(&state).contains(REMOVE_HINT));
    }
}

// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Header: Santa art + title (6 rows)                |
// +-------------------------------+------------------+
// | Name entry (fill)             | Add button (22)  |
// +-------------------------------+------------------+
// | Participants table (fill)                         |
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the decorative header.
pub const HEADER_HEIGHT: u16 = 6;
/// Rows taken by the bordered entry field and button.
pub const ENTRY_HEIGHT: u16 = 3;
/// Columns taken by the "Add Participant" button.
pub const ADD_BUTTON_WIDTH: u16 = 22;

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub header: Rect,
    /// Text field for the next participant name.
    pub entry_input: Rect,
    pub add_button: Rect,
    /// Table of participants and their giftees.
    pub participants: Rect,
    pub status_bar: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(ENTRY_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1), // status bar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let entry_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON_WIDTH)])
        .split(vertical[1]);

    AppLayout {
        header: vertical[0],
        entry_input: entry_row[0],
        add_button: entry_row[1],
        participants: vertical[2],
        status_bar: vertical[3],
        help_bar: vertical[4],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

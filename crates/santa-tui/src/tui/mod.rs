// TUI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the last snapshot from the app
// orchestrator plus purely local state (pending name, focus, selection).
// Snapshots arrive as `UiUpdate` messages; key presses leave as
// `UserCommand`s. The frame is redrawn on a fixed render tick.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use santa_core::assignment::PairingStrategy;

use crate::protocol::{AppSnapshot, PairingStatus, ParticipantRow, UiUpdate, UserCommand};

use layout::{build_layout, AppLayout};

/// Title shown when none is configured.
pub const DEFAULT_TITLE: &str = "Secret Santa Generator";

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-participant text field.
    Entry,
    /// The participant table.
    List,
}

/// TUI-local state that mirrors the exchange for rendering.
pub struct ViewState {
    /// Header title.
    pub title: String,
    /// Participant rows from the latest snapshot.
    pub participants: Vec<ParticipantRow>,
    pub status: PairingStatus,
    pub strategy: PairingStrategy,
    /// Text typed into the entry field, not yet submitted.
    pub pending_name: String,
    pub focus: Focus,
    /// Selected row in the participant table.
    pub selected: Option<usize>,
    /// Last notice from the orchestrator.
    pub notice: Option<String>,
    /// Whether the quit confirmation dialog is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            title: DEFAULT_TITLE.to_string(),
            participants: Vec::new(),
            status: PairingStatus::Empty,
            strategy: PairingStrategy::default(),
            pending_name: String::new(),
            focus: Focus::Entry,
            selected: None,
            notice: None,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    pub fn with_title(title: impl Into<String>) -> Self {
        ViewState {
            title: title.into(),
            ..ViewState::default()
        }
    }

    /// Apply a full snapshot from the app orchestrator.
    ///
    /// The selection is kept where it was, clamped to the new list length.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        self.participants = snapshot.participants;
        self.status = snapshot.status;
        self.strategy = snapshot.strategy;

        let len = self.participants.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None if self.focus == Focus::List => Some(0),
            None => None,
        };
    }

    /// Whether the "Add Participant" control is enabled.
    pub fn can_add(&self) -> bool {
        !self.pending_name.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => {
            // A notice for this snapshot, if any, arrives right after it.
            state.notice = None;
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::Notice(text) => {
            state.notice = Some(text);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::header::render(frame, layout.header, &state.title);
    widgets::entry::render(frame, &layout, state);
    widgets::participants::render(frame, layout.participants, state);
    widgets::status_bar::render(frame, layout.status_bar, state);
    render_help_bar(frame, &layout, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state.focus),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

/// Key hints for the focused area.
pub fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Entry => " Enter:Add | Esc:Clear | Tab:List | Ctrl+C:Quit",
        Focus::List => " j/k:Move | d:Remove | r:Reshuffle | Tab/a:Add name | q:Quit",
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Selects over UI updates, keyboard input, and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    title: String,
    render_interval: Duration,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::with_title(title);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(render_interval);
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Channel closed: app is shutting down
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

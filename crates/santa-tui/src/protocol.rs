// Messages exchanged between the app orchestrator and the TUI.
//
// The orchestrator owns the exchange; the TUI only ever sees snapshots of it
// and asks for changes through `UserCommand`s.

use santa_core::assignment::PairingStrategy;

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Append a participant with the given name.
    AddParticipant(String),
    /// Remove the participant at the given list position.
    RemoveParticipant(usize),
    /// Draw a new pairing for the current list.
    Reshuffle,
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Full replacement of the participant table and pairing status.
    StateSnapshot(Box<AppSnapshot>),
    /// One-line message for the status bar (rejected input, removals, ...).
    Notice(String),
}

/// One row of the participant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub name: String,
    /// Giftee name, `None` while unassigned.
    pub giftee: Option<String>,
}

/// Overall pairing state of the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingStatus {
    /// No participants yet.
    Empty,
    /// Odd number of participants; nobody is paired.
    OddCount,
    /// Everyone has a giftee.
    Paired,
    /// Even list but the strategy gave up; carries the error text.
    Failed(String),
}

/// Snapshot of the exchange as the TUI should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSnapshot {
    pub participants: Vec<ParticipantRow>,
    pub status: PairingStatus,
    pub strategy: PairingStrategy,
}

// Application state and orchestration logic.
//
// The app task owns the `Exchange` and is the only place it is mutated.
// User commands arrive from the TUI over an mpsc channel; after each one the
// task pushes a fresh snapshot (and, where useful, a notice) back to the TUI.

use tokio::sync::mpsc;
use tracing::{info, warn};

use santa_core::exchange::Exchange;

use crate::protocol::{AppSnapshot, PairingStatus, ParticipantRow, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub exchange: Exchange,
}

impl AppState {
    pub fn new(exchange: Exchange) -> Self {
        AppState { exchange }
    }

    /// Build an `AppSnapshot` from the current exchange.
    pub fn build_snapshot(&self) -> AppSnapshot {
        let exchange = &self.exchange;
        let participants = exchange
            .participants()
            .iter()
            .enumerate()
            .map(|(i, p)| ParticipantRow {
                name: p.name().to_string(),
                giftee: exchange.giftee_of(i).map(str::to_string),
            })
            .collect();

        let status = if let Some(err) = exchange.pairing_error() {
            PairingStatus::Failed(err.to_string())
        } else if exchange.participants().is_empty() {
            PairingStatus::Empty
        } else if exchange.assignment().is_complete() {
            PairingStatus::Paired
        } else {
            PairingStatus::OddCount
        };

        AppSnapshot {
            participants,
            status,
            strategy: exchange.strategy(),
        }
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the app orchestrator until `Quit` arrives or the command channel
/// closes. Sends an initial snapshot before processing any command.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    send_snapshot(&state, &ui_tx).await;

    loop {
        match cmd_rx.recv().await {
            Some(UserCommand::Quit) => {
                info!("Quit command received, shutting down");
                break;
            }
            Some(cmd) => {
                handle_user_command(&mut state, cmd, &ui_tx).await;
            }
            None => {
                info!("Command channel closed, shutting down");
                break;
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::AddParticipant(name) => match state.exchange.append(&name) {
            Ok(()) => send_snapshot(state, ui_tx).await,
            Err(e) => {
                warn!("Rejected participant {:?}: {}", name, e);
                let _ = ui_tx.send(UiUpdate::Notice(e.to_string())).await;
            }
        },
        UserCommand::RemoveParticipant(index) => match state.exchange.remove_at(index) {
            Ok(removed) => {
                send_snapshot(state, ui_tx).await;
                let _ = ui_tx
                    .send(UiUpdate::Notice(format!("Removed {removed}")))
                    .await;
            }
            Err(e) => {
                warn!("Remove at {} failed: {}", index, e);
                let _ = ui_tx.send(UiUpdate::Notice(e.to_string())).await;
            }
        },
        UserCommand::Reshuffle => {
            state.exchange.reshuffle();
            send_snapshot(state, ui_tx).await;
            let notice = if state.exchange.assignment().is_complete() {
                "Pairings reshuffled"
            } else {
                "Nothing to reshuffle: need an even number of participants"
            };
            let _ = ui_tx.send(UiUpdate::Notice(notice.to_string())).await;
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

async fn send_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let snapshot = state.build_snapshot();
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(snapshot)))
        .await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

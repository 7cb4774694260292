// Exchange: the participant list together with its derived assignment.
//
// The assignment is recomputed eagerly after every mutation, so readers
// always see a pairing that matches the current list.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::assignment::{self, Assignment, AssignmentError, PairingStrategy};
use crate::config::Config;
use crate::participants::{Participant, ParticipantList, RosterError};

pub struct Exchange {
    participants: ParticipantList,
    assignment: Assignment,
    /// Set when the last recomputation could not pair an even list.
    pairing_error: Option<AssignmentError>,
    strategy: PairingStrategy,
    max_attempts: usize,
    rng: StdRng,
}

impl Exchange {
    pub fn new(
        participants: ParticipantList,
        strategy: PairingStrategy,
        max_attempts: usize,
        rng: StdRng,
    ) -> Self {
        let mut exchange = Exchange {
            participants,
            assignment: Assignment::default(),
            pairing_error: None,
            strategy,
            max_attempts,
            rng,
        };
        exchange.recompute();
        exchange
    }

    /// Build an exchange from configuration: initial participants, pairing
    /// strategy, and a seeded or entropy-backed random source.
    pub fn from_config(config: &Config) -> Result<Self, RosterError> {
        let participants = ParticipantList::from_names(&config.exchange.participants)?;
        let rng = match config.pairing.seed {
            Some(seed) => {
                info!("Using fixed pairing seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Ok(Self::new(
            participants,
            config.pairing.strategy,
            config.pairing.max_attempts,
            rng,
        ))
    }

    /// Append a participant and re-pair.
    pub fn append(&mut self, name: &str) -> Result<(), RosterError> {
        let added = self.participants.append(name)?.name().to_string();
        info!("Added participant {:?} ({} total)", added, self.participants.len());
        self.recompute();
        Ok(())
    }

    /// Remove the participant at `index` and re-pair.
    pub fn remove_at(&mut self, index: usize) -> Result<Participant, RosterError> {
        let removed = self.participants.remove_at(index)?;
        info!(
            "Removed participant {:?} at index {} ({} left)",
            removed.name(),
            index,
            self.participants.len()
        );
        self.recompute();
        Ok(removed)
    }

    /// Draw a fresh pairing for the unchanged list.
    pub fn reshuffle(&mut self) {
        info!("Reshuffling {} participants", self.participants.len());
        self.recompute();
    }

    pub fn participants(&self) -> &ParticipantList {
        &self.participants
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn pairing_error(&self) -> Option<&AssignmentError> {
        self.pairing_error.as_ref()
    }

    pub fn strategy(&self) -> PairingStrategy {
        self.strategy
    }

    /// Giftee name for the participant at `giver`, if assigned.
    pub fn giftee_of(&self, giver: usize) -> Option<&str> {
        self.assignment
            .giftee_name(self.participants.as_slice(), giver)
    }

    fn recompute(&mut self) {
        let result = assignment::assign(
            self.participants.as_slice(),
            self.strategy,
            self.max_attempts,
            &mut self.rng,
        );
        match result {
            Ok(assignment) => {
                debug!(
                    "Recomputed assignment: {} entries, complete={}",
                    assignment.len(),
                    assignment.is_complete()
                );
                self.assignment = assignment;
                self.pairing_error = None;
            }
            Err(e) => {
                warn!("Pairing failed: {}", e);
                self.assignment = Assignment::unassigned(self.participants.len());
                self.pairing_error = Some(e);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

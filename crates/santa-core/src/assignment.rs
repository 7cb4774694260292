// Assignment engine: derives who gives to whom from the participant list.
//
// Odd-sized lists are never paired; every participant is left unassigned.
// Even-sized lists always get a full derangement (nobody draws themselves),
// produced by one of three strategies:
//
//   single_cycle  shuffle the positions and chain each to the next one,
//                 wrapping around. One pass, no retries.
//   rejection     draw random permutations until one has no fixed point.
//   greedy        walk the list in order, drawing each recipient from the
//                 shrinking pool. The last giver can be stranded with only
//                 themselves left; the walk is then restarted.
//
// Lists with repeated names are redrawn (up to the attempt limit) until no
// giver draws someone sharing their name. When no such draw turns up, the
// last draw is kept; it is still a derangement by position.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::participants::Participant;

/// Display text for a participant without a giftee.
pub const NOT_ASSIGNED: &str = "Not assigned";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("{strategy} pairing found no valid draw after {attempts} attempts")]
    AttemptsExhausted {
        strategy: PairingStrategy,
        attempts: usize,
    },
}

// ---------------------------------------------------------------------------
// PairingStrategy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// Uniformly random single cycle over all participants.
    #[default]
    SingleCycle,
    /// Uniformly random derangement by rejection sampling.
    Rejection,
    /// In-order greedy draw from a shrinking pool, restarted when stranded.
    Greedy,
}

impl PairingStrategy {
    pub const ALL: [PairingStrategy; 3] = [
        PairingStrategy::SingleCycle,
        PairingStrategy::Rejection,
        PairingStrategy::Greedy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PairingStrategy::SingleCycle => "single cycle",
            PairingStrategy::Rejection => "rejection",
            PairingStrategy::Greedy => "greedy",
        }
    }
}

impl std::fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// Giver position -> recipient position, `None` when unassigned.
///
/// Positions index into the participant list the assignment was derived
/// from; the assignment is stale once that list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    recipients: Vec<Option<usize>>,
}

impl Assignment {
    /// An assignment with `len` entries, all unassigned.
    pub fn unassigned(len: usize) -> Self {
        Assignment {
            recipients: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    /// Recipient position for the giver at `giver`.
    pub fn recipient_of(&self, giver: usize) -> Option<usize> {
        self.recipients.get(giver).copied().flatten()
    }

    /// `(giver, recipient)` for every entry, in list order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.recipients.iter().copied().enumerate()
    }

    /// True when there is at least one entry and every entry has a recipient.
    pub fn is_complete(&self) -> bool {
        !self.recipients.is_empty() && self.recipients.iter().all(Option::is_some)
    }

    /// True when every entry has an in-range recipient other than itself and
    /// no recipient is drawn twice.
    pub fn is_derangement(&self) -> bool {
        let n = self.recipients.len();
        let mut seen = vec![false; n];
        for (giver, recipient) in self.pairs() {
            match recipient {
                Some(r) if r < n && r != giver && !seen[r] => seen[r] = true,
                _ => return false,
            }
        }
        true
    }

    /// Name of the giftee drawn by `giver`, resolved against `participants`.
    pub fn giftee_name<'a>(
        &self,
        participants: &'a [Participant],
        giver: usize,
    ) -> Option<&'a str> {
        self.recipient_of(giver)
            .and_then(|r| participants.get(r))
            .map(Participant::name)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Derive an assignment for `participants`.
///
/// Empty lists give an empty assignment and odd lists give an all-unassigned
/// one. Even lists give a derangement or, for the bounded strategies, an
/// error once `max_attempts` draws have failed.
pub fn assign<R: Rng + ?Sized>(
    participants: &[Participant],
    strategy: PairingStrategy,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Assignment, AssignmentError> {
    let n = participants.len();
    if n % 2 == 1 {
        debug!("{} participants (odd), leaving everyone unassigned", n);
        return Ok(Assignment::unassigned(n));
    }
    if n == 0 {
        return Ok(Assignment::default());
    }

    let mut recipients = draw(n, strategy, max_attempts, rng)?;
    if has_repeated_names(participants) {
        let mut redraws = 0;
        while redraws < max_attempts && same_name_draws(participants, &recipients) > 0 {
            match draw(n, strategy, max_attempts, rng) {
                Ok(next) => recipients = next,
                Err(_) => break,
            }
            redraws += 1;
        }
        let clashes = same_name_draws(participants, &recipients);
        if clashes > 0 {
            debug!("{} givers share a name with their giftee after {} redraws", clashes, redraws);
        }
    }

    let assignment = Assignment { recipients };
    debug_assert!(assignment.is_derangement());
    debug!("Paired {} participants using {} strategy", n, strategy);
    Ok(assignment)
}

fn draw<R: Rng + ?Sized>(
    n: usize,
    strategy: PairingStrategy,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Option<usize>>, AssignmentError> {
    match strategy {
        PairingStrategy::SingleCycle => Ok(single_cycle(n, rng)),
        PairingStrategy::Rejection => rejection(n, max_attempts, rng),
        PairingStrategy::Greedy => greedy(n, max_attempts, rng),
    }
}

fn has_repeated_names(participants: &[Participant]) -> bool {
    let mut seen = HashSet::new();
    participants.iter().any(|p| !seen.insert(p.name()))
}

/// Number of givers whose recipient carries the same name as they do.
fn same_name_draws(participants: &[Participant], recipients: &[Option<usize>]) -> usize {
    recipients
        .iter()
        .enumerate()
        .filter(|&(giver, r)| {
            r.is_some_and(|r| participants[r].name() == participants[giver].name())
        })
        .count()
}

fn single_cycle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Option<usize>> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut recipients = vec![None; n];
    for (i, &giver) in order.iter().enumerate() {
        recipients[giver] = Some(order[(i + 1) % n]);
    }
    recipients
}

fn rejection<R: Rng + ?Sized>(
    n: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Option<usize>>, AssignmentError> {
    let mut perm: Vec<usize> = (0..n).collect();
    for attempt in 1..=max_attempts {
        perm.shuffle(rng);
        if perm.iter().enumerate().all(|(giver, &r)| giver != r) {
            debug!("Rejection sampling accepted draw {}", attempt);
            return Ok(perm.iter().map(|&r| Some(r)).collect());
        }
    }
    warn!("Rejection sampling exhausted {} attempts for {} participants", max_attempts, n);
    Err(AssignmentError::AttemptsExhausted {
        strategy: PairingStrategy::Rejection,
        attempts: max_attempts,
    })
}

fn greedy<R: Rng + ?Sized>(
    n: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Option<usize>>, AssignmentError> {
    for attempt in 1..=max_attempts {
        if let Some(recipients) = greedy_walk(n, rng) {
            return Ok(recipients);
        }
        debug!("Greedy walk {} stranded the last giver, restarting", attempt);
    }
    warn!("Greedy pairing exhausted {} attempts for {} participants", max_attempts, n);
    Err(AssignmentError::AttemptsExhausted {
        strategy: PairingStrategy::Greedy,
        attempts: max_attempts,
    })
}

/// One in-order pass. `None` when a giver has no candidate but themselves.
fn greedy_walk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Option<Vec<Option<usize>>> {
    let mut pool: Vec<usize> = (0..n).collect();
    let mut recipients = vec![None; n];

    for giver in 0..n {
        let candidates: Vec<usize> = pool.iter().copied().filter(|&c| c != giver).collect();
        let &chosen = candidates.choose(rng)?;
        recipients[giver] = Some(chosen);
        pool.retain(|&c| c != chosen);
    }
    Some(recipients)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn people(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::new(n).unwrap()).collect()
    }

    fn numbered(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant::new(&format!("P{i}")).unwrap())
            .collect()
    }

    #[test]
    fn empty_list_has_no_entries() {
        let mut rng = StdRng::seed_from_u64(1);
        for strategy in PairingStrategy::ALL {
            let a = assign(&[], strategy, 10, &mut rng).unwrap();
            assert!(a.is_empty());
            assert!(!a.is_complete());
        }
    }

    #[test]
    fn odd_list_is_all_unassigned() {
        let list = people(&["Alice", "Bob", "Carol"]);
        let mut rng = StdRng::seed_from_u64(7);
        for strategy in PairingStrategy::ALL {
            let a = assign(&list, strategy, 10, &mut rng).unwrap();
            assert_eq!(a.len(), 3);
            assert!(a.pairs().all(|(_, r)| r.is_none()), "{strategy} paired an odd list");
            assert_eq!(a.giftee_name(&list, 0), None);
        }
    }

    #[test]
    fn single_participant_is_unassigned() {
        let list = people(&["Alice"]);
        let mut rng = StdRng::seed_from_u64(3);
        let a = assign(&list, PairingStrategy::SingleCycle, 10, &mut rng).unwrap();
        assert_eq!(a, Assignment::unassigned(1));
    }

    #[test]
    fn two_participants_give_to_each_other() {
        let list = people(&["Alice", "Bob"]);
        for strategy in PairingStrategy::ALL {
            let mut rng = StdRng::seed_from_u64(11);
            let a = assign(&list, strategy, 1000, &mut rng).unwrap();
            assert_eq!(a.giftee_name(&list, 0), Some("Bob"));
            assert_eq!(a.giftee_name(&list, 1), Some("Alice"));
        }
    }

    #[test]
    fn even_lists_never_self_assign() {
        // Regression probe for the stranded-last-giver defect of a bare
        // greedy walk: every strategy must yield a valid derangement.
        for strategy in PairingStrategy::ALL {
            for n in [2, 4, 6] {
                let list = numbered(n);
                for seed in 0..500 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let a = assign(&list, strategy, 1000, &mut rng).unwrap();
                    assert!(a.is_complete());
                    assert!(
                        a.is_derangement(),
                        "{strategy} produced {a:?} for n={n}, seed={seed}"
                    );
                }
            }
        }
    }

    #[test]
    fn duplicate_names_are_paired_by_position() {
        let list = people(&["Sam", "Sam", "Kim", "Kim"]);
        let mut rng = StdRng::seed_from_u64(5);
        let a = assign(&list, PairingStrategy::Greedy, 1000, &mut rng).unwrap();
        assert!(a.is_derangement());
        for (giver, recipient) in a.pairs() {
            assert_ne!(Some(giver), recipient);
        }
    }

    #[test]
    fn repeated_names_avoid_drawing_their_namesake() {
        let list = people(&["Sam", "Sam", "Kim", "Kim"]);
        for strategy in PairingStrategy::ALL {
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let a = assign(&list, strategy, 1000, &mut rng).unwrap();
                assert!(a.is_derangement());
                for giver in 0..list.len() {
                    assert_ne!(
                        a.giftee_name(&list, giver),
                        Some(list[giver].name()),
                        "{strategy} drew a namesake for seed={seed}"
                    );
                }
            }
        }
    }

    #[test]
    fn unavoidable_namesake_still_pairs() {
        let list = people(&["Sam", "Sam"]);
        let mut rng = StdRng::seed_from_u64(8);
        for strategy in PairingStrategy::ALL {
            let a = assign(&list, strategy, 50, &mut rng).unwrap();
            assert_eq!(a.recipient_of(0), Some(1));
            assert_eq!(a.recipient_of(1), Some(0));
        }
    }

    #[test]
    fn single_cycle_visits_everyone() {
        let list = numbered(8);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let a = assign(&list, PairingStrategy::SingleCycle, 1, &mut rng).unwrap();
            let mut visited = vec![false; 8];
            let mut current = 0;
            for _ in 0..8 {
                visited[current] = true;
                current = a.recipient_of(current).unwrap();
            }
            assert_eq!(current, 0, "cycle should close after 8 hops");
            assert!(visited.iter().all(|v| *v));
        }
    }

    #[test]
    fn same_seed_gives_same_pairing() {
        let list = numbered(6);
        for strategy in PairingStrategy::ALL {
            let first = assign(&list, strategy, 1000, &mut StdRng::seed_from_u64(42)).unwrap();
            let second = assign(&list, strategy, 1000, &mut StdRng::seed_from_u64(42)).unwrap();
            assert_eq!(first, second);
            assert!(first.is_derangement());
        }
    }

    #[test]
    fn bare_greedy_walk_can_strand_last_giver() {
        let stranded = (0..200)
            .filter(|&seed| greedy_walk(4, &mut StdRng::seed_from_u64(seed)).is_none())
            .count();
        assert!(stranded > 0, "expected at least one stranded walk");
    }

    #[test]
    fn zero_attempts_exhausts_bounded_strategies() {
        let list = numbered(4);
        let mut rng = StdRng::seed_from_u64(9);
        for strategy in [PairingStrategy::Rejection, PairingStrategy::Greedy] {
            let err = assign(&list, strategy, 0, &mut rng).unwrap_err();
            assert_eq!(
                err,
                AssignmentError::AttemptsExhausted {
                    strategy,
                    attempts: 0
                }
            );
        }
        // single cycle never needs a retry
        assert!(assign(&list, PairingStrategy::SingleCycle, 0, &mut rng).is_ok());
    }

    #[test]
    fn is_derangement_rejects_invalid_maps() {
        let fixed_point = Assignment {
            recipients: vec![Some(0), Some(1)],
        };
        assert!(!fixed_point.is_derangement());

        let repeated = Assignment {
            recipients: vec![Some(1), Some(0), Some(0), Some(2)],
        };
        assert!(!repeated.is_derangement());

        let out_of_range = Assignment {
            recipients: vec![Some(1), Some(5)],
        };
        assert!(!out_of_range.is_derangement());

        assert!(!Assignment::unassigned(2).is_derangement());
    }

    #[test]
    fn strategy_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: PairingStrategy,
        }
        let w: Wrapper = toml::from_str("strategy = \"single_cycle\"").unwrap();
        assert_eq!(w.strategy, PairingStrategy::SingleCycle);
        let w: Wrapper = toml::from_str("strategy = \"greedy\"").unwrap();
        assert_eq!(w.strategy, PairingStrategy::Greedy);
        assert!(toml::from_str::<Wrapper>("strategy = \"random\"").is_err());
    }
}

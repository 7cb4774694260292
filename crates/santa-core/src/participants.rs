// Participant list: ordered names, appended and removed by position.

use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("participant name must not be empty")]
    EmptyName,

    #[error("no participant at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// A named entrant in the gift exchange.
///
/// Names are trimmed on construction and are never empty. Two participants
/// with the same name are still distinct entries; identity is the position
/// in the list, not the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: &str) -> Result<Self, RosterError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }
        Ok(Participant(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ParticipantList
// ---------------------------------------------------------------------------

/// Ordered participant list. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantList {
    entries: Vec<Participant>,
}

impl ParticipantList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from raw names, rejecting the first empty one.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|n| Participant::new(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ParticipantList { entries })
    }

    /// Append a participant to the end of the list.
    pub fn append(&mut self, name: &str) -> Result<&Participant, RosterError> {
        let participant = Participant::new(name)?;
        self.entries.push(participant);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the participant at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> Result<Participant, RosterError> {
        if index >= self.entries.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.entries
    }

    /// Names in list order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(Participant::name).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_trims_whitespace() {
        let p = Participant::new("  Alice \t").unwrap();
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.to_string(), "Alice");
    }

    #[test]
    fn participant_rejects_empty_and_blank() {
        assert_eq!(Participant::new(""), Err(RosterError::EmptyName));
        assert_eq!(Participant::new("   "), Err(RosterError::EmptyName));
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut list = ParticipantList::new();
        list.append("Alice").unwrap();
        list.append("Bob").unwrap();
        list.append("Carol").unwrap();
        assert_eq!(list.names(), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn append_rejects_empty_name_and_leaves_list_unchanged() {
        let mut list = ParticipantList::from_names(["Alice"]).unwrap();
        assert_eq!(list.append(""), Err(RosterError::EmptyName));
        assert_eq!(list.names(), vec!["Alice"]);
    }

    #[test]
    fn duplicates_are_distinct_entries() {
        let mut list = ParticipantList::new();
        list.append("Sam").unwrap();
        list.append("Sam").unwrap();
        assert_eq!(list.len(), 2);
        let removed = list.remove_at(0).unwrap();
        assert_eq!(removed.name(), "Sam");
        assert_eq!(list.names(), vec!["Sam"]);
    }

    #[test]
    fn remove_at_shifts_later_entries_down() {
        let mut list = ParticipantList::from_names(["Alice", "Bob", "Carol", "Dave"]).unwrap();
        let removed = list.remove_at(1).unwrap();
        assert_eq!(removed.name(), "Bob");
        assert_eq!(list.names(), vec!["Alice", "Carol", "Dave"]);
        assert_eq!(list.get(1).map(Participant::name), Some("Carol"));
    }

    #[test]
    fn remove_at_out_of_range_is_an_error() {
        let mut list = ParticipantList::from_names(["Alice"]).unwrap();
        assert_eq!(
            list.remove_at(1),
            Err(RosterError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(list.len(), 1);

        let mut empty = ParticipantList::new();
        assert!(empty.remove_at(0).is_err());
    }

    #[test]
    fn from_names_rejects_blank_entry() {
        let result = ParticipantList::from_names(["Alice", " ", "Bob"]);
        assert_eq!(result, Err(RosterError::EmptyName));
    }
}

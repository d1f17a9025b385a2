//! Integer note identifier assigned by a monotonic counter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A note's unique identifier.
///
/// IDs are non-negative integers handed out by a counter that only ever
/// increases, so an ID is never reused even after the note is deleted.
/// Filenames (`<id>.md`) and index entries both use this value.
///
/// # Examples
///
/// ```
/// use mdn::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.to_string(), "42");
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

/// Error returned when parsing an invalid note ID.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError(String);

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': expected a non-negative integer", self.0)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl NoteId {
    /// Creates a NoteId from a raw counter value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the ID immediately after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError(s.to_string()))
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

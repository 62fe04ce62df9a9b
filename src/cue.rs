/*!
 * Cue records and identifiers.
 *
 * A `Cue` is one timed text entry in the transcript: a start and end
 * timecode plus the entry text. Cues are created and owned by a
 * `CueStore`; the UI holds only ids and re-fetches after every mutation.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::timecode::TimeCode;

/// Opaque identifier for a cue.
///
/// Assigned by the store from a monotonically increasing counter; an id is
/// never reused within a store's lifetime, even after the cue is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CueId(pub(crate) u64);

impl CueId {
    /// Raw numeric value, for display and host-side bookkeeping
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// @struct: Single timed transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    /// Store-assigned identifier
    pub id: CueId,

    /// Start time
    pub start: TimeCode,

    /// End time, strictly after start
    pub end: TimeCode,

    /// Entry text: non-empty, surrounding whitespace trimmed, may contain
    /// embedded line breaks
    pub text: String,
}

impl Cue {
    /// True if this cue carries the same (start, end, text) triple as the
    /// given fields. Used for duplicate detection; text comparison is exact,
    /// so entries differing only in internal whitespace are distinct.
    pub fn matches(&self, start: TimeCode, end: TimeCode, text: &str) -> bool {
        self.start == start && self.end == end && self.text == text
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} --> {}", self.start, self.end)?;
        write!(f, "{}", self.text)
    }
}

/*!
 * Error types for the cue-list engine.
 *
 * Every failure is recoverable, local, and user-facing: the error messages
 * are complete sentences a host UI can surface directly. The engine never
 * panics on bad input and a failed operation leaves the store unchanged.
 */

use thiserror::Error;

use crate::cue::CueId;
use crate::timecode::TimeCode;

/// Errors that can occur when mutating or exporting a cue store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CueError {
    /// Text field was empty or whitespace-only on add/update
    #[error("Please enter some text for the entry.")]
    EmptyText,

    /// Start time is not strictly before end time
    #[error("Start time {start} must be before end time {end}.")]
    InvalidRange {
        /// Rejected start time
        start: TimeCode,
        /// Rejected end time
        end: TimeCode,
    },

    /// An identical (start, end, text) triple already exists
    #[error("This entry already exists. Duplicate entries are not allowed.")]
    DuplicateEntry,

    /// Referenced cue id does not exist
    #[error("No entry with id {0} exists.")]
    NotFound(CueId),

    /// Export attempted on a store with zero cues
    #[error("There are no entries to export.")]
    EmptyStore,
}

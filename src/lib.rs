/*!
 * # cuelist - cue-list engine for subtitle/transcript authoring
 *
 * An in-memory library that maintains an ordered set of timed text entries
 * (a cue list), validates each entry's timing, prevents duplicates, keeps
 * the list sorted by start time, and serializes it to a plain-text
 * transcript format.
 *
 * ## Features
 *
 * - Four-field timecodes (`HH:MM:SS:CC`) with clamp-not-reject parsing and
 *   a total order over their value in seconds
 * - Validated add/update/delete with typed, user-facing failures
 * - Ordering invariant maintained after every mutation (stable on ties)
 * - Duplicate detection over (start, end, text) triples
 * - Sentinel-wrapped transcript export, to a string or a file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: the `TimeCode` value type (parsing, formatting, ordering)
 * - `cue`: `Cue` records and `CueId` identifiers
 * - `store`: `CueStore`, the ordered validated collection, and the
 *   request/commit deletion flow
 * - `transcript`: the export serializer and file writer
 * - `errors`: typed error taxonomy for all operations
 *
 * The store is a plain session-scoped object: the host UI owns one per
 * editing session, calls into it synchronously, and renders the returned
 * values or error messages. No presentation concern lives here.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod cue;
pub mod errors;
pub mod store;
pub mod timecode;
pub mod transcript;

// Re-export main types for easier usage
pub use cue::{Cue, CueId};
pub use errors::CueError;
pub use store::{CueStore, DeleteRequest};
pub use timecode::{TimeCode, TimeCodeFormatError};
pub use transcript::write_transcript;

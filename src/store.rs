/*!
 * Cue store: the ordered, validated, deduplicated collection of cues.
 *
 * The store owns all cues for one editing session and keeps them sorted
 * ascending by start-time key after every mutation, with ties between equal
 * start times preserving insertion order. All operations are synchronous
 * and run to completion; a failed operation leaves the store unchanged.
 */

use log::{debug, warn};

use crate::cue::{Cue, CueId};
use crate::errors::CueError;
use crate::timecode::TimeCode;
use crate::transcript;

/// Ordered collection of cue entries for one editing session.
///
/// Created once per session and discarded with it; there is no persistence.
/// The UI holds only `CueId`s and must re-fetch [`CueStore::cues`] after
/// every mutating call, because positions shift on insert, delete, and
/// re-sort.
#[derive(Debug)]
pub struct CueStore {
    /// Cues, always sorted ascending by start key (stable on ties)
    cues: Vec<Cue>,

    /// Next id to assign; ids are never reused
    next_id: u64,
}

/// Pending deletion returned by [`CueStore::request_delete`].
///
/// Carries a snapshot of the doomed cue so the UI can show it in a
/// confirmation prompt. Nothing is removed until the request is committed;
/// the UI must not run another mutating action while a request is pending.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    id: CueId,
    cue: Cue,
}

impl DeleteRequest {
    /// Id of the cue this request would remove
    pub fn id(&self) -> CueId {
        self.id
    }

    /// Snapshot of the cue as it was when the request was made
    pub fn cue(&self) -> &Cue {
        &self.cue
    }

    /// Commit the deletion after the user has confirmed.
    pub fn commit(self, store: &mut CueStore) -> Result<Cue, CueError> {
        store.delete(self.id)
    }
}

impl CueStore {
    /// Create an empty store for a new editing session
    pub fn new() -> Self {
        CueStore {
            cues: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new cue.
    ///
    /// Validates that the text is non-empty after trimming, that `start` is
    /// strictly before `end`, and that no identical (start, end, text)
    /// triple is already present. On success the cue gets a fresh id, the
    /// list is re-sorted, and a clone of the new cue is returned.
    pub fn add(&mut self, start: TimeCode, end: TimeCode, text: &str) -> Result<Cue, CueError> {
        let text = Self::validate_fields(start, end, text)?;

        if self.is_duplicate(start, end, &text, None) {
            warn!("Rejected duplicate cue at {} --> {}", start, end);
            return Err(CueError::DuplicateEntry);
        }

        let cue = Cue {
            id: self.fresh_id(),
            start,
            end,
            text,
        };
        debug!("Added cue {} ({} --> {})", cue.id, cue.start, cue.end);

        self.cues.push(cue.clone());
        self.sort_by_start();
        Ok(cue)
    }

    /// Replace the fields of an existing cue.
    ///
    /// Runs the same validations as [`CueStore::add`], except the duplicate
    /// check excludes the cue being updated, so a cue may be updated to its
    /// own current values. Fails with `NotFound` if `id` matches nothing.
    pub fn update(
        &mut self,
        id: CueId,
        start: TimeCode,
        end: TimeCode,
        text: &str,
    ) -> Result<Cue, CueError> {
        let text = Self::validate_fields(start, end, text)?;

        let index = self.index_of(id).ok_or(CueError::NotFound(id))?;

        if self.is_duplicate(start, end, &text, Some(id)) {
            warn!("Rejected duplicate update of cue {}", id);
            return Err(CueError::DuplicateEntry);
        }

        let cue = &mut self.cues[index];
        cue.start = start;
        cue.end = end;
        cue.text = text;
        let updated = cue.clone();
        debug!("Updated cue {} ({} --> {})", id, start, end);

        self.sort_by_start();
        Ok(updated)
    }

    /// Begin deleting a cue: validate the id and hand back a snapshot the
    /// UI can show in its confirmation prompt. The store is not mutated.
    pub fn request_delete(&self, id: CueId) -> Result<DeleteRequest, CueError> {
        let index = self.index_of(id).ok_or(CueError::NotFound(id))?;
        Ok(DeleteRequest {
            id,
            cue: self.cues[index].clone(),
        })
    }

    /// Remove a cue unconditionally, returning it.
    ///
    /// This is the commit half of deletion: obtaining user confirmation is
    /// the caller's responsibility, normally via [`CueStore::request_delete`].
    pub fn delete(&mut self, id: CueId) -> Result<Cue, CueError> {
        let index = self.index_of(id).ok_or(CueError::NotFound(id))?;
        let removed = self.cues.remove(index);
        debug!("Deleted cue {} ({} --> {})", id, removed.start, removed.end);
        Ok(removed)
    }

    /// Read-only view of the cues in current sort order
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Number of cues in the store
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// True if the store holds no cues
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Look up a cue by id
    pub fn get(&self, id: CueId) -> Option<&Cue> {
        self.index_of(id).map(|i| &self.cues[i])
    }

    /// Serialize the store to the transcript text format.
    ///
    /// Fails with `EmptyStore` if there are no cues; otherwise the output
    /// is the sentinel-wrapped transcript block described in
    /// [`crate::transcript`].
    pub fn export(&self) -> Result<String, CueError> {
        if self.cues.is_empty() {
            warn!("Export requested on empty store");
            return Err(CueError::EmptyStore);
        }
        debug!("Exporting {} cues", self.cues.len());
        Ok(transcript::render(&self.cues))
    }

    /// Shared add/update validation: trimmed non-empty text, start strictly
    /// before end. Returns the trimmed text to store.
    fn validate_fields(start: TimeCode, end: TimeCode, text: &str) -> Result<String, CueError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CueError::EmptyText);
        }
        if start >= end {
            return Err(CueError::InvalidRange { start, end });
        }
        Ok(trimmed.to_string())
    }

    /// Linear scan for an identical (start, end, text) triple, optionally
    /// excluding one cue (the one being updated).
    fn is_duplicate(
        &self,
        start: TimeCode,
        end: TimeCode,
        text: &str,
        exclude: Option<CueId>,
    ) -> bool {
        self.cues
            .iter()
            .filter(|cue| exclude != Some(cue.id))
            .any(|cue| cue.matches(start, end, text))
    }

    fn index_of(&self, id: CueId) -> Option<usize> {
        self.cues.iter().position(|cue| cue.id == id)
    }

    fn fresh_id(&mut self) -> CueId {
        let id = CueId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Re-establish the ordering invariant. `sort_by_key` is stable, so
    /// cues with equal start times keep their relative insertion order.
    fn sort_by_start(&mut self) {
        self.cues.sort_by_key(|cue| cue.start);
    }
}

impl Default for CueStore {
    fn default() -> Self {
        Self::new()
    }
}

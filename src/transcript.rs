/*!
 * Transcript export serializer.
 *
 * Renders an ordered cue slice to the plain-text transcript format:
 *
 * ```text
 * <begin subtitles>
 *
 * HH:MM:SS:CC HH:MM:SS:CC
 * <flattened text>
 *
 * <end subtitles>
 * ```
 *
 * Entries appear in store order, each as a time-range line followed by its
 * text with internal line breaks collapsed to single spaces. Entries are
 * separated by a line containing a single space, and the whole block is
 * wrapped in literal sentinel lines. The exact bytes are a compatibility
 * contract for consumers parsing the export; no escaping is performed
 * beyond line-break flattening.
 */

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::Cue;
use crate::store::CueStore;

/// Opening sentinel line
pub const BEGIN_SENTINEL: &str = "<begin subtitles>";

/// Closing sentinel line
pub const END_SENTINEL: &str = "<end subtitles>";

/// Conventional file name for a saved transcript
pub const DEFAULT_FILE_NAME: &str = "transcript.txt";

// Entries are separated by a line holding a single space, not a blank line
const ENTRY_SEPARATOR: &str = "\n \n";

// @const: line-break runs collapsed during flattening
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Render cues to the transcript text. The caller guarantees the slice is
/// non-empty and sorted; [`CueStore::export`] enforces both.
pub fn render(cues: &[Cue]) -> String {
    let body = cues
        .iter()
        .map(|cue| format!("{} {}\n{}", cue.start, cue.end, flatten_text(&cue.text)))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR);

    format!("{}\n\n{}\n\n{}", BEGIN_SENTINEL, body, END_SENTINEL)
}

/// Collapse internal line-break runs to single spaces and trim the ends.
/// Line breaks inside a cue's text are not representable in the transcript
/// format, where a line break terminates the entry.
fn flatten_text(text: &str) -> String {
    LINE_BREAK_REGEX.replace_all(text, " ").trim().to_string()
}

/// Write the store's transcript to a file, creating parent directories as
/// needed. Fails if the store is empty.
pub fn write_transcript<P: AsRef<Path>>(store: &CueStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let text = store.export()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create transcript file: {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write transcript file: {}", path.display()))?;

    Ok(())
}

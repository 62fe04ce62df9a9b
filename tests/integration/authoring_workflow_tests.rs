/*!
 * End-to-end authoring session tests: raw field input through export
 */

use std::fs;

use anyhow::Result;
use cuelist::{transcript, CueError, CueStore, TimeCode};

use crate::common::{self, timecode};

/// A full session: raw per-field input, add, edit, delete, export
#[test]
fn test_authoringSession_withFullWorkflow_shouldExportFinalState() {
    let mut store = CueStore::new();

    // The UI hands over raw per-field strings; parsing clamps, never fails
    let start = TimeCode::parse_fields("0", "0", "5", "0");
    let end = TimeCode::parse_fields("0", "0", "7", "");
    let later = store.add(start, end, "Second cue").unwrap();

    let first = store
        .add(
            TimeCode::parse_fields("", "0", "1", "0"),
            TimeCode::parse_fields("0", "0", "3", "50"),
            "First cue\ntypes across lines",
        )
        .unwrap();

    // The list re-sorted under the UI's feet
    assert_eq!(store.cues()[0].id, first.id);
    assert_eq!(store.cues()[1].id, later.id);

    // Edit the second cue via the modal flow
    store
        .update(later.id, timecode("00:00:05:00"), timecode("00:00:08:00"), "Second cue, edited")
        .unwrap();

    // Delete the first after confirmation
    let request = store.request_delete(first.id).unwrap();
    request.commit(&mut store).unwrap();

    let text = store.export().unwrap();
    assert!(text.starts_with("<begin subtitles>\n\n"));
    assert!(text.contains("00:00:05:00 00:00:08:00\nSecond cue, edited"));
    assert!(text.ends_with("\n\n<end subtitles>"));
    assert!(!text.contains("First cue"));
}

/// The transcript file writer creates parent directories and exact bytes
#[test]
fn test_writeTranscript_withNestedPath_shouldCreateDirsAndWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let store = common::create_hello_world_store();

    let path = temp_dir
        .path()
        .join("exports")
        .join(transcript::DEFAULT_FILE_NAME);
    transcript::write_transcript(&store, &path)?;

    let written = fs::read_to_string(&path)?;
    assert_eq!(written, store.export().unwrap());
    Ok(())
}

/// Writing an empty store's transcript fails rather than producing a file
#[test]
fn test_writeTranscript_withEmptyStore_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let store = CueStore::new();

    let path = temp_dir.path().join(transcript::DEFAULT_FILE_NAME);
    let result = transcript::write_transcript(&store, &path);

    assert!(result.is_err());
    assert!(!path.exists());
    Ok(())
}

/// Error values surface to the UI while the session keeps going
#[test]
fn test_authoringSession_withRejectedInputs_shouldRecover() {
    let mut store = CueStore::new();

    assert_eq!(
        store.add(timecode("00:00:01:00"), timecode("00:00:02:00"), "\n\t "),
        Err(CueError::EmptyText)
    );
    assert!(matches!(
        store.add(timecode("00:00:05:00"), timecode("00:00:02:00"), "inverted"),
        Err(CueError::InvalidRange { .. })
    ));
    assert!(store.is_empty());

    // The same session accepts a corrected entry afterwards
    assert!(store
        .add(timecode("00:00:02:00"), timecode("00:00:05:00"), "corrected")
        .is_ok());
    assert_eq!(store.len(), 1);
}

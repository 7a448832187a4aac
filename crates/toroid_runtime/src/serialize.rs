//! Editor state snapshots using `MessagePack`.
//!
//! A snapshot holds FungeSpace and the edit cursor. Run state (IPs, stacks,
//! output) is never saved; a restored session is always in the edit state.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use toroid_foundation::{Error, ErrorContext, ErrorKind, Result, Vector};
use toroid_space::FungeSpace;

/// Bumped whenever the snapshot layout changes.
pub const FORMAT_VERSION: u32 = 1;

/// Everything a snapshot restores.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedState {
    /// Snapshot layout version.
    pub version: u32,
    /// The program.
    pub space: FungeSpace,
    /// Edit cursor position.
    pub cursor: Vector,
    /// Edit cursor heading.
    pub heading: Vector,
}

impl SavedState {
    /// Captures a space and cursor.
    #[must_use]
    pub fn new(space: FungeSpace, cursor: Vector, heading: Vector) -> Self {
        Self {
            version: FORMAT_VERSION,
            space,
            cursor,
            heading,
        }
    }
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::io(format!("failed to {action}: {e}"))
        .with_context(ErrorContext::new().with_source(path.display().to_string()))
}

/// Serializes a snapshot to bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &SavedState) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(state).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a snapshot from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a snapshot or were written by a
/// newer format version.
pub fn from_bytes(bytes: &[u8]) -> Result<SavedState> {
    let state: SavedState = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))?;
    if state.version > FORMAT_VERSION {
        return Err(Error::new(ErrorKind::Serialization(format!(
            "snapshot version {} is newer than supported version {FORMAT_VERSION}",
            state.version
        ))));
    }
    Ok(state)
}

/// Saves a snapshot to a file, replacing it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &SavedState, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(state)?;
    let file = File::create(path).map_err(|e| io_error("create file", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write file", path, &e))?;
    writer.flush().map_err(|e| io_error("flush file", path, &e))
}

/// Loads a snapshot from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a snapshot.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SavedState> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open file", path, &e))?;
    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read file", path, &e))?;
    from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SavedState {
        let mut space = FungeSpace::from_text("64+\"!dlroW ,olleH\">:#,_@");
        space.write(Vector::new(-40, 1_000_000), 7);
        SavedState::new(space, Vector::new(3, 2), Vector::SOUTH)
    }

    #[test]
    fn bytes_preserve_cells_and_bounds() {
        let state = sample();
        let restored = from_bytes(&to_bytes(&state).unwrap()).unwrap();
        assert_eq!(restored.space.len(), state.space.len());
        assert_eq!(restored.space.bounds(), state.space.bounds());
        assert_eq!(restored.space.read(Vector::new(-40, 1_000_000)), 7);
        assert_eq!(restored.cursor, Vector::new(3, 2));
        assert_eq!(restored.heading, Vector::SOUTH);
    }

    #[test]
    fn file_roundtrip() {
        let path = std::env::temp_dir().join(format!("toroid_state_{}.msgpack", std::process::id()));
        save_to_file(&sample(), &path).unwrap();
        let restored = load_from_file(&path).unwrap();
        assert_eq!(restored.space.read(Vector::new(0, 0)), i32::from(b'6'));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn newer_versions_are_rejected() {
        let mut state = sample();
        state.version = FORMAT_VERSION + 1;
        let bytes = to_bytes(&state).unwrap();
        assert!(matches!(
            from_bytes(&bytes).map_err(|e| e.kind),
            Err(ErrorKind::Serialization(_))
        ));
    }

    #[test]
    fn garbage_and_missing_files_fail() {
        assert!(from_bytes(b"not a snapshot").is_err());
        assert!(load_from_file("/nonexistent/path/state.msgpack").is_err());
    }
}

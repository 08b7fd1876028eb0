// src/game/save.rs
//! Two-line save file: line 1 is the quote record tagged with its type,
//! line 2 is the remaining guess count.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::consts::MAX_GUESSES;
use crate::error::{Error, Result};
use crate::file::{open_file, OpenMode};
use crate::store::QuoteRecord;

use super::state::{GameState, StateError};

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum Tagged {
    QuoteRecord(QuoteRecord),
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing {0} line")]
    MissingLine(&'static str),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("guess count {0} is out of range")]
    OutOfRange(u8),
    #[error(transparent)]
    State(#[from] StateError),
}

pub fn encode(record: &QuoteRecord, remaining: u8) -> serde_json::Result<String> {
    let record_line = serde_json::to_string(&Tagged::QuoteRecord(record.clone()))?;
    let count_line = serde_json::to_string(&remaining)?;
    Ok(format!("{record_line}\n{count_line}\n"))
}

pub fn decode(blob: &str) -> std::result::Result<(QuoteRecord, u8), DecodeError> {
    let mut lines = blob.lines().map(str::trim).filter(|l| !l.is_empty());
    let record_line = lines.next().ok_or(DecodeError::MissingLine("record"))?;
    let count_line = lines.next().ok_or(DecodeError::MissingLine("guess count"))?;

    let Tagged::QuoteRecord(record) = serde_json::from_str::<Tagged>(record_line)?;
    let remaining: u8 = serde_json::from_str(count_line)?;
    if remaining > MAX_GUESSES {
        return Err(DecodeError::OutOfRange(remaining));
    }
    Ok((record, remaining))
}

/// Write `state` to `path`, replacing any previous save.
pub fn save_game(path: &Path, state: &GameState) -> Result<()> {
    let blob = encode(state.record(), state.remaining()).map_err(|e| malformed(path, e.into()))?;
    let mut file = open_file(path, OpenMode::Write)?;
    file.write_all(blob.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    logf!("Save: {} with {} guesses left -> {}", state.author(), state.remaining(), path.display());
    Ok(())
}

/// Read a save back into a playable state. Anything that does not decode,
/// including a blank author name, is `MalformedSave`.
pub fn load_game(path: &Path) -> Result<GameState> {
    let mut blob = s!();
    {
        let mut file = open_file(path, OpenMode::Read)?;
        file.read_to_string(&mut blob)?;
    }
    let (record, remaining) = decode(&blob).map_err(|e| malformed(path, e))?;
    let state = GameState::new(record, remaining).map_err(|e| malformed(path, e.into()))?;
    logf!("Load: {} with {} guesses left <- {}", state.author(), remaining, path.display());
    Ok(state)
}

fn malformed(path: &Path, err: DecodeError) -> Error {
    Error::MalformedSave { path: path.display().to_string(), reason: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QuoteRecord {
        QuoteRecord::new(
            "Jane Austen",
            "“The person, be it gentleman or lady, who has not pleasure in a good novel, must be intolerably stupid.”",
            "http://quotes.toscrape.com/author/Jane-Austen",
        )
    }

    #[test]
    fn layout_is_tagged_record_then_count() {
        let blob = encode(&record(), 3).unwrap();
        let lines: Vec<&str> = blob.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(r#"{"type":"QuoteRecord","Name":"Jane Austen","Quote":"#));
        assert!(lines[0].contains(r#""Link to Bio":"http://quotes.toscrape.com/author/Jane-Austen""#));
        assert_eq!(lines[1], "3");
    }

    #[test]
    fn round_trips_every_count() {
        for n in 0..=MAX_GUESSES {
            let blob = encode(&record(), n).unwrap();
            assert_eq!(decode(&blob).unwrap(), (record(), n));
        }
    }

    #[test]
    fn rejects_bad_blobs() {
        assert!(matches!(decode(""), Err(DecodeError::MissingLine("record"))));

        let only_record = encode(&record(), 2).unwrap().lines().next().unwrap().to_string();
        assert!(matches!(decode(&only_record), Err(DecodeError::MissingLine("guess count"))));

        let untagged = r#"{"Name":"A B","Quote":"Q","Link to Bio":"u"}
2"#;
        assert!(matches!(decode(untagged), Err(DecodeError::Json(_))));

        let wrong_tag = r#"{"type":"Other","Name":"A B","Quote":"Q","Link to Bio":"u"}
2"#;
        assert!(matches!(decode(wrong_tag), Err(DecodeError::Json(_))));

        let big = encode(&record(), 2).unwrap().replace("\n2\n", "\n9\n");
        assert!(matches!(decode(&big), Err(DecodeError::OutOfRange(9))));
    }

    #[test]
    fn save_then_load_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let state = GameState::new(record(), 3).unwrap();
        save_game(&path, &state).unwrap();
        assert_eq!(load_game(&path).unwrap(), state);
    }

    #[test]
    fn blank_author_in_save_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.json");
        let blob = encode(&QuoteRecord::new("  ", "Q", "u"), 4).unwrap();
        std::fs::write(&path, blob).unwrap();

        let err = load_game(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedSave { .. }));
        assert!(err.to_string().contains("author name is empty"));
    }
}

//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Save files on disk.
//!
//! Each save is one JSON file named `<slot>_<YYYYmmdd_HHMMSS>.json`; saving
//! the same slot again writes a new file, and loading a slot picks its
//! newest file, so a bad save never destroys the previous one. Quicksaves
//! are pruned to the newest few after each write. The manager only moves
//! [`SaveData`] to and from disk; capturing and applying session state is
//! the session's job, which keeps the all-or-nothing guarantee in one
//! place.

use crate::puzzles::PuzzleState;
use crate::world::Item;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Slot used when the player does not name one.
pub const DEFAULT_SLOT: &str = "quicksave";

/// Format version written into every save; files carrying any other
/// version are refused.
pub const SAVE_VERSION: &str = "1.0";

const DEFAULT_KEEP_QUICKSAVES: usize = 5;

/// Why a save or load failed.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no saved game found in slot: {slot}")]
    NotFound { slot: String },

    /// The file parsed as JSON but is missing sections or carries an
    /// unsupported version.
    #[error("save file is corrupted or from a different version")]
    Incompatible,

    /// The save references a world the current content set does not have.
    #[error("unknown world in save file: {world}")]
    UnknownWorld { world: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid save data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to reconstruct a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub metadata: SaveMetadata,
    pub player_state: PlayerState,
    pub world_state: WorldSnapshot,
    pub puzzle_state: BTreeMap<String, PuzzleState>,
    #[serde(default)]
    pub world_progress: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub slot: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub current_room: String,
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub visited_rooms: BTreeSet<String>,
    #[serde(default)]
    pub discovered_commands: BTreeSet<String>,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub world: String,
    pub room: String,
}

/// Room contents for every world the session has entered, keyed by world
/// id then room id. Rooms absent from a world's map kept their pristine
/// contents and are not recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub current_world: String,
    pub worlds: BTreeMap<String, BTreeMap<String, RoomSnapshot>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub items: Vec<Item>,
}

/// One save file as shown by `list saves`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub slot: String,
    pub timestamp: String,
    pub filename: String,
}

/// Reads and writes save files under one directory.
#[derive(Debug, Clone)]
pub struct SaveManager {
    directory: PathBuf,
    keep_quicksaves: usize,
}

impl SaveManager {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_retention(directory, DEFAULT_KEEP_QUICKSAVES)
    }

    pub fn with_retention(directory: impl Into<PathBuf>, keep_quicksaves: usize) -> Self {
        Self {
            directory: directory.into(),
            keep_quicksaves,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Write a save file for the slot named in its metadata, creating the
    /// save directory on first use. Quicksaves beyond the retention count
    /// are deleted, oldest first, after a successful write.
    pub fn write(&self, data: &SaveData) -> Result<PathBuf, SaveError> {
        fs::create_dir_all(&self.directory)?;
        let filename = format!("{}_{}.json", data.metadata.slot, data.metadata.timestamp);
        let path = self.directory.join(filename);
        let payload = serde_json::to_string_pretty(data)?;
        fs::write(&path, payload)?;
        if data.metadata.slot == DEFAULT_SLOT {
            self.prune_quicksaves()?;
        }
        Ok(path)
    }

    /// Read the newest save file for a slot, newest by modification time.
    pub fn read_latest(&self, slot: &str) -> Result<SaveData, SaveError> {
        let mut files = self.slot_files(slot)?;
        files.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        let (path, _) = files.pop().ok_or_else(|| SaveError::NotFound {
            slot: slot.to_string(),
        })?;

        let text = fs::read_to_string(&path)?;
        // Malformed JSON is an I/O-level fault; a well-formed file with the
        // wrong shape or version is an incompatible save.
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let data: SaveData =
            serde_json::from_value(value).map_err(|_| SaveError::Incompatible)?;
        if data.metadata.version != SAVE_VERSION {
            return Err(SaveError::Incompatible);
        }
        Ok(data)
    }

    /// Every readable save file, newest first. Files that are not save
    /// files are skipped, not errors.
    pub fn list(&self) -> Result<Vec<SaveSummary>, SaveError> {
        #[derive(Deserialize)]
        struct MetadataOnly {
            metadata: SaveMetadata,
        }

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        let mut found: Vec<(SystemTime, String, SaveSummary)> = Vec::new();
        for entry in entries {
            let entry = entry?;
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !filename.ends_with(".json") {
                continue;
            }
            let text = match fs::read_to_string(entry.path()) {
                Ok(text) => text,
                Err(_) => continue,
            };
            let Ok(parsed) = serde_json::from_str::<MetadataOnly>(&text) else {
                tracing::debug!(file = %filename, "skipping unreadable save file");
                continue;
            };
            let modified = entry.metadata()?.modified()?;
            found.push((
                modified,
                filename.clone(),
                SaveSummary {
                    slot: parsed.metadata.slot,
                    timestamp: parsed.metadata.timestamp,
                    filename,
                },
            ));
        }
        found.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
        Ok(found.into_iter().map(|(_, _, summary)| summary).collect())
    }

    fn prune_quicksaves(&self) -> Result<(), SaveError> {
        let mut quicksaves = self.slot_files(DEFAULT_SLOT)?;
        if quicksaves.len() <= self.keep_quicksaves {
            return Ok(());
        }
        quicksaves.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        let excess = quicksaves.len() - self.keep_quicksaves;
        for (path, _) in quicksaves.into_iter().take(excess) {
            tracing::debug!(file = %path.display(), "pruning old quicksave");
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Files belonging to a slot: `<slot>_<timestamp>.json` exactly, so
    /// slot `save` never claims the files of slot `save_game`.
    fn slot_files(&self, slot: &str) -> Result<Vec<(PathBuf, SystemTime)>, SaveError> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(stem) = name.strip_suffix(".json") else {
                continue;
            };
            let Some(rest) = stem
                .strip_prefix(slot)
                .and_then(|rest| rest.strip_prefix('_'))
            else {
                continue;
            };
            if !is_timestamp(rest) {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            files.push((entry.path(), modified));
        }
        Ok(files)
    }
}

/// `YYYYmmdd_HHMMSS`, as produced when a save is captured.
fn is_timestamp(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 15
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[8] == b'_'
        && bytes[9..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(slot: &str, timestamp: &str) -> SaveData {
        SaveData {
            metadata: SaveMetadata {
                slot: slot.to_string(),
                timestamp: timestamp.to_string(),
                version: SAVE_VERSION.to_string(),
            },
            player_state: PlayerState {
                current_room: "level_one/gate".to_string(),
                inventory: vec![Item::new("Torch", "Still smoldering.")],
                visited_rooms: BTreeSet::from(["level_one/gate".to_string()]),
                discovered_commands: BTreeSet::new(),
                attributes: HashMap::new(),
                position: Position {
                    world: "test_world".to_string(),
                    room: "level_one/gate".to_string(),
                },
            },
            world_state: WorldSnapshot {
                current_world: "test_world".to_string(),
                worlds: BTreeMap::new(),
            },
            puzzle_state: BTreeMap::new(),
            world_progress: BTreeMap::from([("test_world".to_string(), 1)]),
        }
    }

    #[test]
    fn test_is_timestamp() {
        assert!(is_timestamp("20260823_141500"));
        assert!(!is_timestamp("20260823-141500"));
        assert!(!is_timestamp("20260823_1415"));
        assert!(!is_timestamp("abcdefgh_ijklmn"));
    }

    #[test]
    fn test_write_then_read_latest_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());

        let path = manager.write(&sample("tower", "20260101_090000")).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "tower_20260101_090000.json"
        );

        let loaded = manager.read_latest("tower").unwrap();
        assert_eq!(loaded.metadata.slot, "tower");
        assert_eq!(loaded.player_state.inventory[0].name, "Torch");
        assert_eq!(loaded.world_progress.get("test_world"), Some(&1));
    }

    #[test]
    fn test_read_latest_prefers_newest_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());

        manager.write(&sample("tower", "20260101_090000")).unwrap();
        manager.write(&sample("tower", "20260102_090000")).unwrap();

        let loaded = manager.read_latest("tower").unwrap();
        assert_eq!(loaded.metadata.timestamp, "20260102_090000");
    }

    #[test]
    fn test_read_latest_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        manager.write(&sample("tower", "20260101_090000")).unwrap();

        let error = manager.read_latest("castle").unwrap_err();
        assert!(matches!(error, SaveError::NotFound { slot } if slot == "castle"));
    }

    #[test]
    fn test_slot_prefix_does_not_leak_across_slots() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        manager
            .write(&sample("save_game", "20260101_090000"))
            .unwrap();

        // Slot "save" must not pick up "save_game_<ts>.json".
        assert!(matches!(
            manager.read_latest("save"),
            Err(SaveError::NotFound { .. })
        ));
        assert!(manager.read_latest("save_game").is_ok());
    }

    #[test]
    fn test_quicksave_retention() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_retention(dir.path(), 3);

        for day in 1..=6 {
            let timestamp = format!("2026010{day}_090000");
            manager.write(&sample(DEFAULT_SLOT, &timestamp)).unwrap();
        }

        let summaries = manager.list().unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].timestamp, "20260106_090000");
        assert!(summaries
            .iter()
            .all(|summary| summary.timestamp >= "20260104_090000".to_string()));
    }

    #[test]
    fn test_retention_only_touches_quicksaves() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_retention(dir.path(), 1);

        manager.write(&sample("tower", "20260101_090000")).unwrap();
        manager.write(&sample("castle", "20260102_090000")).unwrap();
        manager.write(&sample(DEFAULT_SLOT, "20260103_090000")).unwrap();
        manager.write(&sample(DEFAULT_SLOT, "20260104_090000")).unwrap();

        let summaries = manager.list().unwrap();
        let slots: Vec<&str> = summaries.iter().map(|s| s.slot.as_str()).collect();
        assert!(slots.contains(&"tower"));
        assert!(slots.contains(&"castle"));
        assert_eq!(
            slots.iter().filter(|slot| **slot == DEFAULT_SLOT).count(),
            1
        );
    }

    #[test]
    fn test_version_mismatch_is_incompatible() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());

        let mut data = sample("tower", "20260101_090000");
        data.metadata.version = "0.9".to_string();
        manager.write(&data).unwrap();

        assert!(matches!(
            manager.read_latest("tower"),
            Err(SaveError::Incompatible)
        ));
    }

    #[test]
    fn test_wrong_shape_is_incompatible() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        std::fs::write(
            dir.path().join("tower_20260101_090000.json"),
            r#"{"metadata": {"slot": "tower", "timestamp": "x", "version": "1.0"}}"#,
        )
        .unwrap();

        assert!(matches!(
            manager.read_latest("tower"),
            Err(SaveError::Incompatible)
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        std::fs::write(dir.path().join("tower_20260101_090000.json"), "{not json").unwrap();

        assert!(matches!(
            manager.read_latest("tower"),
            Err(SaveError::Json(_))
        ));
    }

    #[test]
    fn test_list_skips_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        manager.write(&sample("tower", "20260101_090000")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a save").unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let summaries = manager.list().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].slot, "tower");
        assert_eq!(summaries[0].filename, "tower_20260101_090000.json");
    }

    #[test]
    fn test_list_on_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path().join("never_created"));
        assert!(manager.list().unwrap().is_empty());
        assert!(matches!(
            manager.read_latest(DEFAULT_SLOT),
            Err(SaveError::NotFound { .. })
        ));
    }
}

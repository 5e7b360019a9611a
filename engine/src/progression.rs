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

//! Level progression and room gating.
//!
//! Each world unlocks one level at a time, starting at level one.
//! Completing the puzzle assigned to a level in that world's sequence
//! raises the unlocked level by one, except for the final puzzle, which
//! unlocks nothing further. Rooms whose ids carry no recognizable level
//! prefix are always accessible, as is everything once dev mode is on.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Keyword that switches dev mode on. There is no off switch.
pub const DEV_MODE_KEYWORD: &str = "florbglorbule";

static LEVEL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^level_(\w+)/").expect("level prefix pattern compiles"));

/// Per-world puzzle order: which puzzle guards which level.
fn world_sequence(world_id: &str) -> &'static [(&'static str, u32)] {
    match world_id {
        "elemental_conflux" => &[
            ("air_currents_puzzle", 1),
            ("earth_stability_puzzle", 2),
            ("fire_mastery_puzzle", 3),
            ("water_mastery_puzzle", 4),
            ("spirit_level_puzzle", 5),
        ],
        "harmonic_nexus" => &[
            ("alternative_rock_puzzle", 1),
            ("chiptune_puzzle", 2),
            ("steampunk_music_puzzle", 3),
        ],
        "whimsical_realm" => &[
            ("nostalgia_puzzle", 1),
            ("creative_convergence_puzzle", 2),
            ("childhood_puzzle", 3),
        ],
        _ => &[],
    }
}

/// Tracks the highest unlocked level per world, plus the dev-mode flag.
#[derive(Debug, Default)]
pub struct ProgressionTracker {
    world_progress: BTreeMap<String, u32>,
    dev_mode: bool,
}

impl ProgressionTracker {
    /// Create a tracker with every world at level one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the numeric level from a room id. `level_two/forge` is 2;
    /// ids without the prefix, or with an unknown level word, yield `None`.
    pub fn level_number(room_id: &str) -> Option<u32> {
        let captures = LEVEL_PREFIX.captures(room_id)?;
        match captures.get(1)?.as_str().to_lowercase().as_str() {
            "one" => Some(1),
            "two" => Some(2),
            "three" => Some(3),
            "four" => Some(4),
            "five" => Some(5),
            _ => None,
        }
    }

    /// The highest unlocked level for a world, defaulting to one.
    pub fn unlocked_level(&self, world_id: &str) -> u32 {
        self.world_progress.get(world_id).copied().unwrap_or(1)
    }

    /// Whether the player may enter a room of this world.
    pub fn is_room_accessible(&self, world_id: &str, room_id: &str) -> bool {
        if self.dev_mode {
            return true;
        }
        match Self::level_number(room_id) {
            Some(level) => level <= self.unlocked_level(world_id),
            None => true,
        }
    }

    /// Raise a world's unlocked level by one.
    pub fn unlock_next_level(&mut self, world_id: &str) {
        let next = self.unlocked_level(world_id) + 1;
        self.world_progress.insert(world_id.to_string(), next);
        tracing::info!(world = %world_id, level = next, "unlocked next level");
    }

    /// React to a completed puzzle: if it sits in this world's sequence
    /// below the final position, unlock the next level.
    pub fn handle_puzzle_completion(&mut self, world_id: &str, puzzle_id: &str) {
        let sequence = world_sequence(world_id);
        let Some(&(_, position)) = sequence.iter().find(|(id, _)| *id == puzzle_id) else {
            return;
        };
        let max_position = sequence.iter().map(|&(_, pos)| pos).max().unwrap_or(position);
        if position < max_position {
            self.unlock_next_level(world_id);
        }
    }

    /// Switch dev mode on. One-directional by design of the unlock keyword.
    pub fn activate_dev_mode(&mut self) {
        self.dev_mode = true;
        tracing::warn!("dev mode activated, all rooms unlocked");
    }

    /// Whether dev mode is active.
    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Copy of the per-world progress table, for saving.
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        self.world_progress.clone()
    }

    /// Replace the progress table wholesale, for loading. Dev mode is a
    /// session attribute and never restored from a save.
    pub fn restore(&mut self, world_progress: BTreeMap<String, u32>) {
        self.world_progress = world_progress;
    }
}

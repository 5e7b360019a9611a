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

//! Puzzle engine.
//!
//! Each world carries a [`PuzzleSet`] of independent trials. Commands the
//! router does not recognize are offered to the set, and the first puzzle
//! that claims one answers it. Puzzles never touch world or player state
//! directly; they report progress through [`PuzzleReply`] and the game
//! applies the consequences.

pub mod aspect;
pub mod library;
pub mod themes;

pub use aspect::{AspectDef, AspectPuzzle, PuzzleBlueprint};

use crate::world::{Item, WorldState};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Read-only view of the game a puzzle sees while answering a command.
pub struct PuzzleContext<'a> {
    /// The raw player input.
    pub command: &'a str,
    /// The world the player is in.
    pub world_id: &'a str,
    /// The room the player is in.
    pub room_id: &'a str,
    /// Everything the player carries.
    pub inventory: &'a [Item],
}

/// What a puzzle did with an offered command.
#[derive(Clone, Debug, Default)]
pub struct PuzzleReply {
    /// The puzzle claimed the command; no other handler should see it.
    pub handled: bool,
    /// The command advanced the puzzle towards completion.
    pub advanced: bool,
    /// Narration to show the player.
    pub message: Option<String>,
}

impl PuzzleReply {
    /// The command is not for this puzzle.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// The puzzle claimed the command without making progress.
    pub fn consumed(message: impl Into<String>) -> Self {
        Self {
            handled: true,
            advanced: false,
            message: Some(message.into()),
        }
    }

    /// The command solved one step of the puzzle.
    pub fn progressed(message: impl Into<String>) -> Self {
        Self {
            handled: true,
            advanced: true,
            message: Some(message.into()),
        }
    }
}

/// Durable progress of a single puzzle, as written into save files.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PuzzleState {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_groups: BTreeSet<String>,
}

/// A multi-step trial bound to one or more rooms of a world.
pub trait Puzzle: Send {
    /// Stable identifier, as referenced by world manifests and saves.
    fn id(&self) -> &str;

    /// Human-readable title.
    fn name(&self) -> &str;

    /// Whether this puzzle listens for commands in the given room.
    ///
    /// Completion does not retire a puzzle from its rooms; a solved trial
    /// still claims commands aimed at it.
    fn is_active(&self, room_id: &str) -> bool;

    /// Whether every step has been solved.
    fn is_complete(&self) -> bool;

    /// Offer a command the router could not route.
    fn handle_command(&mut self, context: &PuzzleContext<'_>) -> PuzzleReply;

    /// Snapshot progress for persistence.
    fn completion_state(&self) -> PuzzleState;

    /// Restore progress from a snapshot.
    fn restore(&mut self, state: &PuzzleState);

    /// Replace an NPC's answer on a topic, if this puzzle wants to.
    fn dialogue_override(
        &self,
        _npc_name: &str,
        _topic: &str,
        _inventory: &[Item],
    ) -> Option<String> {
        None
    }

    /// Extra room narration reflecting puzzle progress.
    fn room_description_addon(&self, _room_id: &str) -> Option<String> {
        None
    }
}

/// The puzzles of one world, in manifest order.
#[derive(Default)]
pub struct PuzzleSet {
    puzzles: Vec<Box<dyn Puzzle>>,
}

impl PuzzleSet {
    /// Instantiate every puzzle a world's manifest names.
    ///
    /// Ids the library does not know are skipped with a warning rather
    /// than failing the world.
    pub fn for_world(world: &WorldState) -> Self {
        let puzzles = world
            .puzzle_ids
            .iter()
            .filter_map(|puzzle_id| match library::instantiate(puzzle_id) {
                Some(puzzle) => Some(Box::new(puzzle) as Box<dyn Puzzle>),
                None => {
                    tracing::warn!(
                        world = %world.id,
                        puzzle = %puzzle_id,
                        "world manifest names an unknown puzzle"
                    );
                    None
                }
            })
            .collect();
        Self { puzzles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Puzzle> {
        self.puzzles.iter().map(Box::as_ref)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Puzzle>> {
        self.puzzles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Snapshot every puzzle's progress, keyed by puzzle id.
    pub fn snapshot(&self) -> BTreeMap<String, PuzzleState> {
        self.puzzles
            .iter()
            .map(|puzzle| (puzzle.id().to_string(), puzzle.completion_state()))
            .collect()
    }

    /// Restore progress for the puzzles named in a snapshot.
    ///
    /// Puzzles absent from the snapshot keep their current state, and
    /// snapshot entries for puzzles this set does not hold are ignored.
    pub fn restore(&mut self, states: &BTreeMap<String, PuzzleState>) {
        for puzzle in &mut self.puzzles {
            if let Some(state) = states.get(puzzle.id()) {
                puzzle.restore(state);
            }
        }
    }
}

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

//! One game session.
//!
//! A [`Game`] owns everything that changes while one player plays: their
//! per-world [`WorldState`] copies, puzzle progress, inventory, level
//! progression, and any prompt awaiting an answer. Worlds are cloned out
//! of the shared [`WorldCatalog`] lazily, the first time the player enters
//! them, and keep their mutations (taken items, dropped items) for the
//! rest of the session.
//!
//! The session is synchronous and push-free: every call to
//! [`Game::process_command`] returns a [`Turn`] carrying the complete
//! ordered output for that input line, so the terminal front end and the
//! gateway can share it unchanged.

use crate::commands::{self, CommandResult, CommandRouter};
use crate::content::WorldCatalog;
use crate::epilogue;
use crate::output::OutputQueue;
use crate::persistence::{
    PlayerState, Position, RoomSnapshot, SAVE_VERSION, SaveData, SaveError, SaveManager,
    SaveMetadata, WorldSnapshot,
};
use crate::player::Player;
use crate::progression::ProgressionTracker;
use crate::puzzles::{PuzzleContext, PuzzleSet};
use crate::world::WorldState;
use shardrealms_common::OutputEvent;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// The result of feeding one input line to a session: everything to show
/// the player, and whether the game is over.
#[derive(Debug)]
pub struct Turn {
    pub events: Vec<OutputEvent>,
    pub ended: bool,
}

/// A question the session asked; the next input line answers it instead
/// of being parsed as a command.
#[derive(Debug, Clone)]
pub(crate) enum PendingPrompt {
    /// `save` with no slot name: the next line names the slot.
    SaveName,
    /// `load` with no slot name: the next line picks from this menu.
    LoadChoice { slots: Vec<String> },
    /// The finale menu is on screen.
    EpilogueChoice,
}

/// A single player's running game.
pub struct Game {
    pub(crate) catalog: Arc<WorldCatalog>,
    pub(crate) runtimes: BTreeMap<String, WorldState>,
    pub(crate) puzzles: BTreeMap<String, PuzzleSet>,
    pub(crate) player: Player,
    pub(crate) progression: ProgressionTracker,
    pub(crate) output: OutputQueue,
    pub(crate) saves: SaveManager,
    pub(crate) pending: Option<PendingPrompt>,
    epilogue_played: bool,
    router: CommandRouter,
}

impl Game {
    pub fn new(catalog: Arc<WorldCatalog>, saves: SaveManager) -> Self {
        Self {
            catalog,
            runtimes: BTreeMap::new(),
            puzzles: BTreeMap::new(),
            player: Player::new(),
            progression: ProgressionTracker::new(),
            output: OutputQueue::new(),
            saves,
            pending: None,
            epilogue_played: false,
            router: CommandRouter::new(),
        }
    }

    /// Open the session: welcome banner, then spawn into the requested
    /// world, or the first world of the catalog when none is requested or
    /// the requested one does not exist.
    pub fn start(&mut self, world_id: Option<&str>) -> Turn {
        self.output.header(
            "Welcome to Shardrealms\n\nType 'help' at any time to see available actions.",
        );

        let chosen = world_id
            .and_then(|id| {
                if self.catalog.world(id).is_some() {
                    Some(id.to_string())
                } else {
                    tracing::warn!(world = %id, "configured world not found, using first world");
                    None
                }
            })
            .or_else(|| self.catalog.worlds().next().map(|world| world.id.clone()));

        if let Some(world_id) = chosen {
            self.enter_world(&world_id);
            if self.player.current_room_id.is_some() {
                commands::look::look(self, Vec::new());
            }
        }
        self.finish_turn(false)
    }

    /// Feed one line of player input through the session.
    ///
    /// A pending prompt swallows the line whole; otherwise it is routed as
    /// a command, and lines no command claims are offered to the puzzles of
    /// the current room. The finale check runs after every routed line so
    /// the game can end on whichever command united the shards.
    pub fn process_command(&mut self, input: &str) -> Turn {
        let line = input.trim().to_string();

        if let Some(prompt) = self.pending.take() {
            let ended = self.answer_prompt(prompt, &line);
            return self.finish_turn(ended);
        }

        if line.is_empty() {
            return self.finish_turn(false);
        }

        let tokens = commands::tokenize(&line);
        let mut ended = false;
        match self.router.resolve(&tokens) {
            Some(resolution) => {
                let name = resolution.name;
                match (resolution.handler)(self, resolution.args) {
                    CommandResult::Success => self.player.discover_command(name),
                    CommandResult::Quit => ended = true,
                    CommandResult::Failure | CommandResult::Invalid => {}
                }
            }
            None => {
                if !self.offer_to_puzzles(&line) {
                    self.output.block("I don't understand that command.");
                }
            }
        }

        if !ended {
            self.maybe_begin_epilogue();
        }
        self.finish_turn(ended)
    }

    /// The player's current world and room ids, once spawned.
    pub(crate) fn location(&self) -> Option<(String, String)> {
        let world = self.player.current_world_id.clone()?;
        let room = self.player.current_room_id.clone()?;
        Some((world, room))
    }

    /// Clone a world out of the catalog on first entry, along with its
    /// puzzle set. Returns false when the catalog has no such world.
    pub(crate) fn ensure_runtime(&mut self, world_id: &str) -> bool {
        if self.runtimes.contains_key(world_id) {
            return true;
        }
        let Some(template) = self.catalog.world(world_id) else {
            return false;
        };
        self.puzzles
            .insert(world_id.to_string(), PuzzleSet::for_world(template));
        self.runtimes.insert(world_id.to_string(), template.clone());
        true
    }

    /// Snapshot the whole session into a save payload.
    pub(crate) fn capture_save(&self, slot: &str) -> SaveData {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let (world, room) = self.location().unwrap_or_default();

        let worlds = self
            .runtimes
            .iter()
            .map(|(world_id, state)| {
                let rooms = state
                    .rooms
                    .iter()
                    .map(|(room_id, room)| {
                        (
                            room_id.clone(),
                            RoomSnapshot {
                                items: room.items.clone(),
                            },
                        )
                    })
                    .collect();
                (world_id.clone(), rooms)
            })
            .collect();

        let mut puzzle_state = BTreeMap::new();
        for set in self.puzzles.values() {
            puzzle_state.extend(set.snapshot());
        }

        SaveData {
            metadata: SaveMetadata {
                slot: slot.to_string(),
                timestamp,
                version: SAVE_VERSION.to_string(),
            },
            player_state: PlayerState {
                current_room: room.clone(),
                inventory: self.player.inventory.clone(),
                visited_rooms: self.player.visited_rooms.clone(),
                discovered_commands: self.player.discovered_commands.clone(),
                attributes: self.player.attributes.clone(),
                position: Position {
                    world: world.clone(),
                    room,
                },
            },
            world_state: WorldSnapshot {
                current_world: world,
                worlds,
            },
            puzzle_state,
            world_progress: self.progression.snapshot(),
        }
    }

    /// Replace the session with a loaded save.
    ///
    /// Every world the save names is rebuilt from the catalog and patched
    /// with the saved room contents before anything is touched, so a save
    /// that fails validation leaves the running session exactly as it was.
    pub(crate) fn apply_save(&mut self, data: SaveData) -> Result<(), SaveError> {
        let target_world = data.world_state.current_world.clone();
        let target_room = data.player_state.position.room.clone();

        let mut world_ids: BTreeSet<String> = data.world_state.worlds.keys().cloned().collect();
        world_ids.insert(target_world.clone());

        let mut runtimes: BTreeMap<String, WorldState> = BTreeMap::new();
        let mut puzzles: BTreeMap<String, PuzzleSet> = BTreeMap::new();
        for world_id in &world_ids {
            let Some(template) = self.catalog.world(world_id) else {
                return Err(SaveError::UnknownWorld {
                    world: world_id.clone(),
                });
            };
            let mut world = template.clone();
            if let Some(rooms) = data.world_state.worlds.get(world_id) {
                for (room_id, snapshot) in rooms {
                    match world.room_mut(room_id) {
                        Some(room) => room.items = snapshot.items.clone(),
                        None => tracing::warn!(
                            world = %world_id,
                            room = %room_id,
                            "save references a room this world no longer has, skipping"
                        ),
                    }
                }
            }
            let mut set = PuzzleSet::for_world(template);
            set.restore(&data.puzzle_state);
            puzzles.insert(world_id.clone(), set);
            runtimes.insert(world_id.clone(), world);
        }

        let target_exists = runtimes
            .get(&target_world)
            .map(|world| world.room(&target_room).is_some())
            .unwrap_or(false);
        if !target_exists {
            return Err(SaveError::Incompatible);
        }

        self.runtimes = runtimes;
        self.puzzles = puzzles;
        self.player.inventory = data.player_state.inventory;
        self.player.visited_rooms = data.player_state.visited_rooms;
        self.player.discovered_commands = data.player_state.discovered_commands;
        self.player.attributes = data.player_state.attributes;
        self.player.current_world_id = Some(target_world);
        self.player.current_room_id = Some(target_room);
        self.progression.restore(data.world_progress);
        Ok(())
    }

    /// Place the player at a world's entry room. With no resolvable entry
    /// room the player is left nowhere and a warning is shown.
    fn enter_world(&mut self, world_id: &str) {
        if !self.ensure_runtime(world_id) {
            return;
        }
        self.player.current_world_id = Some(world_id.to_string());
        let start = self
            .runtimes
            .get(world_id)
            .and_then(|world| world.starting_room_id().map(str::to_string));
        match start {
            Some(room_id) => self.player.move_to(&room_id),
            None => {
                let name = self
                    .runtimes
                    .get(world_id)
                    .map(|world| world.name.clone())
                    .unwrap_or_else(|| world_id.to_string());
                self.output.line(format!(
                    "Warning: No starting room found in {name}. \
                     Please check the world configuration."
                ));
            }
        }
    }

    /// Offer an unrouted line to the current room's puzzles; the first
    /// puzzle that claims it wins. Returns whether any puzzle claimed it.
    fn offer_to_puzzles(&mut self, line: &str) -> bool {
        let Some((world_id, room_id)) = self.location() else {
            return false;
        };
        let sequence_enabled = self
            .runtimes
            .get(&world_id)
            .map(|world| world.sequence_enabled)
            .unwrap_or(true);
        let Some(set) = self.puzzles.get_mut(&world_id) else {
            return false;
        };

        let context = PuzzleContext {
            command: line,
            world_id: &world_id,
            room_id: &room_id,
            inventory: &self.player.inventory,
        };
        let mut handled = false;
        let mut completed = Vec::new();
        for puzzle in set.iter_mut() {
            if !puzzle.is_active(&room_id) {
                continue;
            }
            let reply = puzzle.handle_command(&context);
            if !reply.handled {
                continue;
            }
            handled = true;
            if let Some(message) = reply.message {
                self.output.block(message);
            }
            if reply.advanced && puzzle.is_complete() {
                self.output.block("Puzzle complete!");
                completed.push(puzzle.id().to_string());
            }
            break;
        }

        if sequence_enabled {
            for puzzle_id in &completed {
                self.progression.handle_puzzle_completion(&world_id, puzzle_id);
            }
        }
        handled
    }

    /// Route the answer line of a pending prompt. Returns whether the
    /// game ended.
    fn answer_prompt(&mut self, prompt: PendingPrompt, line: &str) -> bool {
        match prompt {
            PendingPrompt::SaveName => {
                let slot = commands::saves::normalize_slot(line);
                commands::saves::perform_save(self, &slot);
                false
            }
            PendingPrompt::LoadChoice { slots } => {
                commands::saves::finish_load_choice(self, &slots, line);
                false
            }
            PendingPrompt::EpilogueChoice => {
                let ended = epilogue::resolve_choice(&mut self.output, line);
                if !ended {
                    self.pending = Some(PendingPrompt::EpilogueChoice);
                }
                ended
            }
        }
    }

    /// Once per session: when the player holds all three shards, open the
    /// finale and capture the next input line for its menu.
    fn maybe_begin_epilogue(&mut self) {
        if self.epilogue_played || self.pending.is_some() {
            return;
        }
        if !epilogue::holds_all_shards(&self.player) {
            return;
        }
        self.epilogue_played = true;
        epilogue::begin(&mut self.output);
        self.pending = Some(PendingPrompt::EpilogueChoice);
    }

    fn finish_turn(&mut self, ended: bool) -> Turn {
        Turn {
            events: self.output.drain(),
            ended,
        }
    }
}

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

//! Runtime world state.
//!
//! A [`WorldState`] is a mutable, session-owned copy of one world from the
//! immutable [`crate::content::WorldCatalog`]. Rooms hold their own item and
//! NPC instances, so picking something up in one session never leaks into
//! another.

pub mod item;
pub mod npc;
pub mod room;

pub use item::Item;
pub use npc::{DialogueNode, Npc};
pub use room::Room;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalize an identifier the way content files are keyed: lowercase,
/// apostrophes removed, spaces replaced with underscores.
pub fn normalize_id(text: &str) -> String {
    text.to_lowercase().replace('\'', "").replace(' ', "_")
}

/// One loaded world with its full room graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Stable world identifier, e.g. `elemental_conflux`.
    pub id: String,

    /// Display name, e.g. `Elemental Conflux`.
    pub name: String,

    /// Short flavor text shown by `list worlds`.
    pub description: String,

    /// Room id the player enters first, if the world configures one.
    pub starting_room: Option<String>,

    /// Built-in puzzle ids bound to this world by `worlds.json`.
    pub puzzle_ids: Vec<String>,

    /// Whether puzzle completions advance this world's unlocked level.
    pub sequence_enabled: bool,

    /// Rooms keyed by level-qualified id, e.g. `level_one/wind_temple`.
    pub rooms: BTreeMap<String, Room>,
}

impl WorldState {
    /// Look up a room by its level-qualified id.
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    /// Mutable room lookup.
    pub fn room_mut(&mut self, room_id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(room_id)
    }

    /// Resolve the entry room: the configured starting room when it exists,
    /// otherwise the first room in id order.
    pub fn starting_room_id(&self) -> Option<&str> {
        if let Some(configured) = self.starting_room.as_deref() {
            if self.rooms.contains_key(configured) {
                return Some(configured);
            }
            tracing::warn!(
                world = %self.id,
                room = %configured,
                "configured starting room not found, falling back to first room"
            );
        }
        self.rooms.keys().next().map(String::as_str)
    }
}

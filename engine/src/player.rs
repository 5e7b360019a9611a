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

//! Player state: location, inventory, and visit history.

use crate::world::Item;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// The player's saveable state. Location is stored as explicit ids so a
/// session can be reconstructed without chasing object references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub inventory: Vec<Item>,

    pub visited_rooms: BTreeSet<String>,

    pub current_room_id: Option<String>,

    pub current_world_id: Option<String>,

    /// Canonical names of commands the player has successfully used.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub discovered_commands: BTreeSet<String>,

    /// Free-form session attributes, for content and puzzles to scribble on.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl Player {
    /// Create a player with nothing and nowhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a room, recording the visit.
    pub fn move_to(&mut self, room_id: &str) {
        self.current_room_id = Some(room_id.to_string());
        self.visited_rooms.insert(room_id.to_string());
    }

    /// Record that the player has used a command.
    pub fn discover_command(&mut self, name: &str) {
        self.discovered_commands.insert(name.to_string());
    }

    /// Whether the player has ever stood in this room.
    pub fn has_visited(&self, room_id: &str) -> bool {
        self.visited_rooms.contains(room_id)
    }

    /// Find a carried item by player-typed name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.matches(name))
    }

    /// Whether the player carries an item with this name.
    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    /// Remove and return a carried item by name.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.matches(name))?;
        Some(self.inventory.remove(index))
    }
}

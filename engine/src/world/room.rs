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

//! Rooms: the nodes of a world's navigation graph.

use super::{Item, Npc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One location the player can stand in.
///
/// Exits map a direction word to a target room id. An exit present with a
/// `None` target is a declared but unwired passage: it is listed by `look`
/// yet refuses travel, which is distinct from a direction with no exit at
/// all. Stairs are kept apart from exits because they cross level
/// boundaries and are subject to progression gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Level-qualified id, e.g. `level_two/forge_hall`.
    pub id: String,

    pub name: String,

    pub description: String,

    #[serde(default)]
    pub exits: BTreeMap<String, Option<String>>,

    #[serde(default)]
    pub stairs_up: Option<String>,

    #[serde(default)]
    pub stairs_down: Option<String>,

    #[serde(default)]
    pub items: Vec<Item>,

    #[serde(default)]
    pub npcs: Vec<Npc>,
}

impl Room {
    /// Create an empty room.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            stairs_up: None,
            stairs_down: None,
            items: Vec::new(),
            npcs: Vec::new(),
        }
    }

    /// Find an item by player-typed name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(name))
    }

    /// Remove and return an item by name, if present.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.matches(name))?;
        Some(self.items.remove(index))
    }

    /// Find an NPC by player-typed name.
    pub fn find_npc(&self, name: &str) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.matches(name))
    }

    /// The level segment of the room id, when one is present.
    pub fn level(&self) -> Option<&str> {
        self.id.split_once('/').map(|(level, _)| level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_item_removes_first_match() {
        let mut room = Room::new("level_one/cave", "Cave", "Dark and damp.");
        room.items.push(Item::new("Torch", "Still smoldering."));
        room.items.push(Item::new("Rope", "Frayed at one end."));

        let taken = room.take_item("torch").unwrap();
        assert_eq!(taken.name, "Torch");
        assert!(room.find_item("torch").is_none());
        assert!(room.find_item("rope").is_some());
    }

    #[test]
    fn test_take_item_missing() {
        let mut room = Room::new("level_one/cave", "Cave", "Dark and damp.");
        assert!(room.take_item("lantern").is_none());
    }

    #[test]
    fn test_room_level() {
        let room = Room::new("level_three/summit", "Summit", "Thin air.");
        assert_eq!(room.level(), Some("level_three"));

        let flat = Room::new("hub", "Hub", "No level prefix.");
        assert_eq!(flat.level(), None);
    }
}

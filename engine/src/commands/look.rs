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

//! The `look` command: room banner, exits, items, and characters.
//!
//! `look` is also replayed implicitly after every successful move,
//! teleport, and load, so the player always sees where they landed.

use crate::commands::CommandResult;
use crate::game::Game;
use crate::render;

/// Describe the current room.
///
/// The banner carries the room name, its description, and any addon text
/// contributed by puzzles bound to this room. Exits and stairs are listed
/// together, each annotated with its destination and a LOCKED marker when
/// the progression gate refuses it; declared-but-unwired exits appear as
/// a bare direction.
pub(crate) fn look(game: &mut Game, _args: Vec<String>) -> CommandResult {
    let Some((world_id, room_id)) = game.location() else {
        return CommandResult::Failure;
    };
    let Some(world) = game.runtimes.get(&world_id) else {
        return CommandResult::Failure;
    };
    let Some(room) = world.room(&room_id) else {
        return CommandResult::Failure;
    };

    let mut banner = format!("Room: {}\n\n{}", room.name, room.description);
    if let Some(set) = game.puzzles.get(&world_id) {
        for puzzle in set.iter() {
            if puzzle.is_active(&room_id) {
                if let Some(addon) = puzzle.room_description_addon(&room_id) {
                    banner.push_str("\n\n");
                    banner.push_str(&addon);
                }
            }
        }
    }

    let mut exits: Vec<String> = Vec::new();
    for (direction, target) in &room.exits {
        match target {
            Some(target_id) => {
                let name = world
                    .room(target_id)
                    .map(|target_room| target_room.name.clone())
                    .unwrap_or_else(|| render::format_text(room_id_stem(target_id)));
                let locked = !game.progression.is_room_accessible(&world_id, target_id);
                exits.push(exit_entry(&render::capitalize(direction), &name, locked));
            }
            None => exits.push(render::capitalize(direction)),
        }
    }
    for (label, stairs) in [("Up", &room.stairs_up), ("Down", &room.stairs_down)] {
        if let Some(target_id) = stairs {
            let name = render::format_text(room_id_stem(target_id));
            let locked = !game.progression.is_room_accessible(&world_id, target_id);
            exits.push(exit_entry(label, &name, locked));
        }
    }
    exits.sort();

    let items: Vec<String> = room.items.iter().map(|item| item.name.clone()).collect();
    let npcs: Vec<String> = room.npcs.iter().map(|npc| npc.name.clone()).collect();

    game.output.header(banner);
    game.output.list("Exits", exits);
    game.output.list("Items", items);
    game.output.list("NPCs", npcs);
    CommandResult::Success
}

fn exit_entry(label: &str, destination: &str, locked: bool) -> String {
    let mut entry = format!("{label} (leads to {destination}");
    if locked {
        entry.push_str(" - LOCKED");
    }
    entry.push(')');
    entry
}

/// Last segment of a level-qualified room id, for display fallbacks.
fn room_id_stem(room_id: &str) -> &str {
    room_id.rsplit('/').next().unwrap_or(room_id)
}

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

//! Movement commands: `go`, stairs, and cross-world teleportation.
//!
//! Every move passes through the progression gate before the destination
//! is entered. A locked destination refuses travel with the same message
//! whether it was reached by exit, stairs, or a typo'd shortcut; dev mode
//! (see [`crate::progression`]) bypasses the gate entirely.

use crate::commands::{look, CommandResult};
use crate::game::Game;

/// Move through an exit. `go up` and `go down` are stair aliases.
pub(crate) fn go(game: &mut Game, args: Vec<String>) -> CommandResult {
    let direction = args.last().cloned().unwrap_or_default();
    if direction == "up" || direction == "down" {
        return climb_stairs(game, &direction);
    }
    let Some((world_id, room_id)) = game.location() else {
        return CommandResult::Failure;
    };
    let exit = game
        .runtimes
        .get(&world_id)
        .and_then(|world| world.room(&room_id))
        .and_then(|room| room.exits.get(&direction).cloned());
    match exit {
        None => {
            game.output
                .block(format!("There is no exit {direction} from here."));
            CommandResult::Failure
        }
        Some(None) => {
            game.output
                .block(format!("Cannot go {direction} from here."));
            CommandResult::Failure
        }
        Some(Some(target_id)) => move_player(game, &world_id, &target_id),
    }
}

/// Take the stairs up or down from the current room.
pub(crate) fn climb_stairs(game: &mut Game, direction: &str) -> CommandResult {
    let Some((world_id, room_id)) = game.location() else {
        return CommandResult::Failure;
    };
    let stairs = game
        .runtimes
        .get(&world_id)
        .and_then(|world| world.room(&room_id))
        .and_then(|room| {
            if direction == "up" {
                room.stairs_up.clone()
            } else {
                room.stairs_down.clone()
            }
        });
    match stairs {
        Some(target_id) => move_player(game, &world_id, &target_id),
        None => {
            let message = if direction == "up" {
                "There are no stairs going up here."
            } else {
                "There are no stairs going down here."
            };
            game.output.block(message);
            CommandResult::Failure
        }
    }
}

/// Gate, validate, and enter a destination room, then re-describe it.
fn move_player(game: &mut Game, world_id: &str, target_id: &str) -> CommandResult {
    if !game.progression.is_room_accessible(world_id, target_id) {
        game.output
            .block("This area is locked. Complete the current level's challenges to proceed.");
        return CommandResult::Failure;
    }
    let exists = game
        .runtimes
        .get(world_id)
        .and_then(|world| world.room(target_id))
        .is_some();
    if !exists {
        game.output
            .block(format!("Error: Room '{target_id}' not found."));
        return CommandResult::Failure;
    }
    game.player.move_to(target_id);
    look::look(game, Vec::new());
    CommandResult::Success
}

/// Switch worlds. With no argument, list where the player could go.
pub(crate) fn teleport(game: &mut Game, args: Vec<String>) -> CommandResult {
    if args.is_empty() {
        return list_worlds(game, args);
    }
    let typed = args.join(" ");
    let target = game
        .catalog
        .worlds()
        .find(|world| world.name.eq_ignore_ascii_case(&typed))
        .map(|world| (world.id.clone(), world.name.clone()));
    let Some((world_id, world_name)) = target else {
        game.output.block(format!("World '{typed}' not found."));
        return CommandResult::Failure;
    };
    if !game.ensure_runtime(&world_id) {
        game.output.block(format!("World '{typed}' not found."));
        return CommandResult::Failure;
    }
    let start = game
        .runtimes
        .get(&world_id)
        .and_then(|world| world.starting_room_id())
        .map(str::to_string);
    let Some(start) = start else {
        game.output.block(format!(
            "Error: No starting room defined for world {world_name}"
        ));
        return CommandResult::Failure;
    };
    tracing::info!(world = %world_id, room = %start, "teleport");
    game.player.current_world_id = Some(world_id);
    game.player.move_to(&start);
    game.output.block(format!("Teleported to {world_name}."));
    look::look(game, Vec::new());
    CommandResult::Success
}

/// List every loaded world by display name.
pub(crate) fn list_worlds(game: &mut Game, _args: Vec<String>) -> CommandResult {
    let entries = game
        .catalog
        .worlds()
        .map(|world| format!("    {}", world.name))
        .collect();
    game.output.list("Available Worlds to Teleport To", entries);
    game.output.block("Please specify a world to teleport to.");
    CommandResult::Success
}

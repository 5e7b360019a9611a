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

//! Inventory commands: `inventory`, `take`, `drop`, and `use`.
//!
//! Items live in exactly one place, so `take` and `drop` move them between
//! the current room and the player's pack rather than copying. Item names
//! are matched case-insensitively against what the player typed.

use crate::commands::{movement, CommandResult};
use crate::game::Game;

/// Show what the player carries.
pub(crate) fn show_inventory(game: &mut Game, _args: Vec<String>) -> CommandResult {
    if game.player.inventory.is_empty() {
        game.output.block("Your inventory is empty.");
        return CommandResult::Success;
    }
    let entries = game
        .player
        .inventory
        .iter()
        .map(|item| format!("{}: {}", item.name, item.description))
        .collect();
    game.output.list("Your inventory", entries);
    CommandResult::Success
}

/// Pick up an item from the current room.
pub(crate) fn take(game: &mut Game, args: Vec<String>) -> CommandResult {
    let typed = args.join(" ");
    let Some((world_id, room_id)) = game.location() else {
        return CommandResult::Failure;
    };
    let Some(room) = game
        .runtimes
        .get_mut(&world_id)
        .and_then(|world| world.room_mut(&room_id))
    else {
        return CommandResult::Failure;
    };
    match room.take_item(&typed) {
        Some(item) => {
            game.output.line(format!("You picked up the {}.", item.name));
            game.player.inventory.push(item);
            CommandResult::Success
        }
        None => {
            game.output
                .line(format!("There's no '{typed}' here to take."));
            CommandResult::Failure
        }
    }
}

/// Put a carried item down in the current room.
pub(crate) fn drop_item(game: &mut Game, args: Vec<String>) -> CommandResult {
    let typed = args.join(" ");
    let Some((world_id, room_id)) = game.location() else {
        return CommandResult::Failure;
    };
    let Some(room) = game
        .runtimes
        .get_mut(&world_id)
        .and_then(|world| world.room_mut(&room_id))
    else {
        return CommandResult::Failure;
    };
    match game.player.take_item(&typed) {
        Some(item) => {
            game.output.line(format!("You drop the {}.", item.name));
            room.items.push(item);
            CommandResult::Success
        }
        None => {
            game.output
                .line(format!("You don't have a '{typed}' to drop."));
            CommandResult::Failure
        }
    }
}

/// `use` does double duty: `use stairs up/down` is vertical movement,
/// anything else is using a carried item.
pub(crate) fn use_item(game: &mut Game, args: Vec<String>) -> CommandResult {
    if args.first().map(String::as_str) == Some("stairs") {
        return match args.get(1).map(String::as_str) {
            Some("up") => movement::climb_stairs(game, "up"),
            Some("down") => movement::climb_stairs(game, "down"),
            _ => {
                game.output.block("Use stairs in which direction? (up/down)");
                CommandResult::Invalid
            }
        };
    }
    let typed = args.join(" ");
    if let Some(item) = game.player.find_item(&typed) {
        game.output.line(format!("You use the {}.", item.name));
        CommandResult::Success
    } else {
        game.output
            .line(format!("You don't have a '{typed}' to use."));
        CommandResult::Failure
    }
}

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

use shardrealms_common::OutputEvent;
use shardrealms_engine::player::Player;
use shardrealms_engine::world::Item;
use shardrealms_engine::{Game, SaveManager, Turn, WorldCatalog};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed_content(root: &Path) {
    write(
        &root.join("worlds.json"),
        r#"{
            "elemental_conflux": {
                "name": "Elemental Conflux",
                "description": "Where the elements meet.",
                "starting_room": "level_one/wind_gate",
                "puzzles": ["air_currents_puzzle"]
            }
        }"#,
    );
    let level_one = root.join("elemental_conflux/level_one");
    write(
        &level_one.join("rooms/wind_gate.json"),
        r#"{
            "name": "Wind Gate",
            "description": "A carved arch hums with moving air.",
            "exits": {
                "north": "aangs_airbending_academy",
                "west": "marios_wing_cap_heights",
                "south": "storm_crows_ascension",
                "east": "level_two/sky_vault"
            },
            "items": ["torch"]
        }"#,
    );
    write(
        &level_one.join("rooms/aangs_airbending_academy.json"),
        r#"{
            "name": "Airbending Academy",
            "description": "Chimes turn slowly in the updraft.",
            "exits": { "south": "wind_gate" }
        }"#,
    );
    write(
        &level_one.join("rooms/marios_wing_cap_heights.json"),
        r#"{
            "name": "Wing Cap Heights",
            "description": "Platforms drift among the clouds.",
            "exits": { "east": "wind_gate" }
        }"#,
    );
    write(
        &level_one.join("rooms/storm_crows_ascension.json"),
        r#"{
            "name": "Storm Crow's Ascension",
            "description": "Thunderheads wheel overhead.",
            "exits": { "north": "wind_gate" }
        }"#,
    );
    write(
        &root.join("elemental_conflux/level_two/rooms/sky_vault.json"),
        r#"{
            "name": "Sky Vault",
            "description": "A hall above the weather.",
            "exits": { "west": "level_one/wind_gate" }
        }"#,
    );
    write(
        &level_one.join("items/torch.json"),
        r#"{ "name": "torch", "description": "Still smoldering." }"#,
    );
}

struct Fixture {
    catalog: Arc<WorldCatalog>,
    _content: TempDir,
    saves: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let content = TempDir::new().unwrap();
        seed_content(content.path());
        let catalog = Arc::new(WorldCatalog::load(content.path()).unwrap());
        Fixture {
            catalog,
            _content: content,
            saves: TempDir::new().unwrap(),
        }
    }

    fn started_game(&self) -> Game {
        let mut game = Game::new(
            Arc::clone(&self.catalog),
            SaveManager::new(self.saves.path()),
        );
        game.start(Some("elemental_conflux"));
        game
    }
}

fn turn_text(turn: &Turn) -> String {
    turn.events
        .iter()
        .map(OutputEvent::text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn solve_wind_trial(game: &mut Game) {
    for (movement, incantation, back) in [
        ("go north", "meditate wind", "go south"),
        ("go west", "soar sky", "go east"),
        ("go south", "channel storm", "go north"),
    ] {
        game.process_command(movement);
        game.process_command(incantation);
        game.process_command(back);
    }
}

#[test]
fn test_player_survives_a_serialization_round_trip() {
    let mut player = Player::new();
    player.inventory.push(Item::new("torch", "Still smoldering."));
    player
        .inventory
        .push(Item::new("elemental shard", "It pulses with heat and frost."));
    player.move_to("level_one/wind_gate");
    player.move_to("level_two/sky_vault");
    player.current_world_id = Some("elemental_conflux".to_string());
    player.discover_command("look");

    let json = serde_json::to_string(&player).unwrap();
    let restored: Player = serde_json::from_str(&json).unwrap();

    let names: Vec<&str> = restored.inventory.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["torch", "elemental shard"]);
    assert_eq!(restored.current_room_id, player.current_room_id);
    assert_eq!(restored.current_world_id, player.current_world_id);
    assert_eq!(restored.visited_rooms, player.visited_rooms);
    assert_eq!(restored.discovered_commands, player.discovered_commands);
}

#[test]
fn test_a_new_session_resumes_from_a_saved_one() {
    let fixture = Fixture::new();

    let mut first = fixture.started_game();
    first.process_command("pick up torch");
    first.process_command("go north");
    let turn = first.process_command("save expedition");
    assert!(turn_text(&turn).contains("Game saved successfully to slot: expedition"));
    drop(first);

    let mut second = fixture.started_game();
    let turn = second.process_command("load expedition");
    let text = turn_text(&turn);
    assert!(text.contains("Game loaded successfully from slot: expedition"));
    assert!(text.contains("Room: Airbending Academy"));

    // The torch travelled with the save; the gate no longer offers it.
    let turn = second.process_command("inventory");
    assert!(turn_text(&turn).contains("torch: Still smoldering."));
    second.process_command("go south");
    let turn = second.process_command("pick up torch");
    assert!(turn_text(&turn).contains("There's no 'torch' here to take."));
}

#[test]
fn test_progression_travels_with_the_save() {
    let fixture = Fixture::new();

    let mut first = fixture.started_game();
    solve_wind_trial(&mut first);
    first.process_command("save ascent");
    drop(first);

    let mut second = fixture.started_game();

    // A fresh session is still gated.
    let turn = second.process_command("go east");
    assert!(turn_text(&turn).contains("This area is locked"));

    second.process_command("load ascent");
    let turn = second.process_command("go east");
    assert!(turn_text(&turn).contains("Room: Sky Vault"));
}

#[test]
fn test_solved_trials_stay_solved_after_loading() {
    let fixture = Fixture::new();

    let mut first = fixture.started_game();
    first.process_command("go north");
    first.process_command("meditate wind");
    first.process_command("save partway");
    drop(first);

    let mut second = fixture.started_game();
    second.process_command("load partway");

    // The solved aspect no longer answers; the remaining two still do.
    let turn = second.process_command("meditate wind");
    assert_eq!(turn_text(&turn), "Nothing happens.");
    second.process_command("go south");
    second.process_command("go west");
    let turn = second.process_command("soar sky");
    assert!(turn_text(&turn).contains("The celestial navigation grows stronger."));
}

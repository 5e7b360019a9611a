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

//! World-content loading.
//!
//! Content lives on disk as a `worlds.json` index plus one directory per
//! world. A world directory contains `level_*` subdirectories (and
//! optionally world-global ones) each holding `rooms/`, `items/`, and
//! `npcs/` JSON files. Loading is tolerant: an unreadable component file or
//! a dangling exit is logged and pruned rather than aborting the whole
//! catalog. A world that loses every room to pruning is a fatal condition,
//! as is a catalog with no worlds at all.
//!
//! The resulting [`WorldCatalog`] is immutable and shared; sessions clone
//! per-world [`WorldState`]s out of it as the player travels.

use crate::world::{DialogueNode, Item, Npc, Room, WorldState, normalize_id};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the content tree.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content root or `worlds.json` could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `worlds.json` is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every room of a configured world was pruned or failed to parse.
    #[error("world '{world}' has no loadable rooms")]
    EmptyWorld { world: String },

    /// No world survived loading.
    #[error("no game worlds could be loaded")]
    NoWorlds,
}

/// Entry for one world in `worlds.json`.
#[derive(Debug, Deserialize)]
struct WorldConfig {
    name: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    starting_room: Option<String>,

    #[serde(default)]
    puzzles: Vec<String>,

    #[serde(default = "enabled")]
    sequence_enabled: bool,
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RoomFile {
    name: String,

    description: String,

    #[serde(default)]
    exits: BTreeMap<String, Option<String>>,

    #[serde(default)]
    stairs_up: Option<String>,

    #[serde(default)]
    stairs_down: Option<String>,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    npcs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ItemFile {
    name: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    properties: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct NpcFile {
    #[serde(default)]
    id: Option<String>,

    name: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    dialogue: BTreeMap<String, DialogueNode>,

    #[serde(default)]
    inventory: Vec<ItemFile>,

    #[serde(default)]
    state: HashMap<String, serde_json::Value>,
}

/// The immutable set of all loaded worlds, keyed by world id.
#[derive(Debug)]
pub struct WorldCatalog {
    worlds: BTreeMap<String, WorldState>,
}

impl WorldCatalog {
    /// Load every world listed in `<root>/worlds.json`.
    #[tracing::instrument]
    pub fn load(root: &Path) -> Result<Self, ContentError> {
        let index_path = root.join("worlds.json");
        let raw = std::fs::read_to_string(&index_path).map_err(|source| ContentError::Io {
            path: index_path.clone(),
            source,
        })?;
        let configs: BTreeMap<String, WorldConfig> =
            serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
                path: index_path,
                source,
            })?;

        let mut worlds = BTreeMap::new();
        for (world_id, config) in configs {
            let world_dir = root.join(normalize_id(&world_id));
            if !world_dir.is_dir() {
                tracing::warn!(world = %world_id, dir = %world_dir.display(), "world directory missing, skipping");
                continue;
            }
            let world = load_world(&world_id, &config, &world_dir)?;
            tracing::info!(world = %world.name, rooms = world.rooms.len(), "Successfully loaded world");
            worlds.insert(world_id, world);
        }

        if worlds.is_empty() {
            return Err(ContentError::NoWorlds);
        }
        Ok(Self { worlds })
    }

    /// Look up a world by id.
    pub fn world(&self, world_id: &str) -> Option<&WorldState> {
        self.worlds.get(world_id)
    }

    /// Look up a world by display name, case-insensitively. Used by
    /// `teleport`, where the player types the name they saw listed.
    pub fn world_by_name(&self, name: &str) -> Option<&WorldState> {
        self.worlds
            .values()
            .find(|world| world.name.eq_ignore_ascii_case(name))
    }

    /// Iterate all worlds in id order.
    pub fn worlds(&self) -> impl Iterator<Item = &WorldState> {
        self.worlds.values()
    }

    /// Number of loaded worlds.
    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    /// True when the catalog holds no worlds.
    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }
}

/// Level-qualify a bare component name: `key("lantern", Some("level_two"))`
/// is `level_two/lantern`.
fn construct_key(name: &str, level: Option<&str>) -> String {
    match level {
        Some(level) => format!("{level}/{}", normalize_id(name)),
        None => normalize_id(name),
    }
}

/// Qualify an exit or stairs target relative to the room that declares it.
fn qualify_target(target: &str, room_level: Option<&str>) -> String {
    let normalized = normalize_id(target);
    if normalized.contains('/') {
        normalized
    } else {
        format!("{}/{normalized}", room_level.unwrap_or("level_one"))
    }
}

#[tracing::instrument(skip(config))]
fn load_world(
    world_id: &str,
    config: &WorldConfig,
    world_dir: &Path,
) -> Result<WorldState, ContentError> {
    let mut items: BTreeMap<String, Item> = BTreeMap::new();
    let mut npcs: BTreeMap<String, Npc> = BTreeMap::new();
    let mut room_files: Vec<(String, Option<String>, RoomFile)> = Vec::new();

    // The world root acts as a global (unleveled) component directory.
    load_components(world_dir, None, &mut items, &mut npcs, &mut room_files);
    for level_dir in level_dirs(world_dir) {
        let level = level_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        load_components(
            &level_dir,
            level.as_deref(),
            &mut items,
            &mut npcs,
            &mut room_files,
        );
    }

    // First pass: materialize rooms and hand out item/NPC instances.
    let mut rooms: BTreeMap<String, Room> = BTreeMap::new();
    let mut aliases: BTreeMap<String, String> = BTreeMap::new();
    for (room_id, level, file) in &room_files {
        let mut room = Room::new(room_id.clone(), file.name.clone(), file.description.clone());
        room.stairs_up = file
            .stairs_up
            .as_deref()
            .map(|target| qualify_target(target, level.as_deref()));
        room.stairs_down = file
            .stairs_down
            .as_deref()
            .map(|target| qualify_target(target, level.as_deref()));

        for item_name in &file.items {
            let key = construct_key(item_name, level.as_deref());
            match items.get(&key) {
                Some(item) => room.items.push(item.clone()),
                None => {
                    tracing::warn!(item = %item_name, room = %room_id, "item not found for room")
                }
            }
        }
        for npc_name in &file.npcs {
            let leveled = construct_key(npc_name, level.as_deref());
            let bare = normalize_id(npc_name);
            match npcs.get(&leveled).or_else(|| npcs.get(&bare)) {
                Some(npc) => room.npcs.push(npc.clone()),
                None => tracing::warn!(npc = %npc_name, room = %room_id, "npc not found for room"),
            }
        }

        // Exits in content files may reference a room by file stem or by
        // display name; both resolve to the same room.
        aliases.insert(room_id.clone(), room_id.clone());
        aliases.insert(
            construct_key(&file.name, level.as_deref()),
            room_id.clone(),
        );
        rooms.insert(room_id.clone(), room);
    }

    // Second pass: wire exits now that every room id is known. Dangling
    // references stay listed but unwalkable.
    for (room_id, level, file) in &room_files {
        let mut wired: BTreeMap<String, Option<String>> = BTreeMap::new();
        for (direction, target) in &file.exits {
            if direction == "portal" {
                continue;
            }
            let Some(target) = target.as_deref().filter(|target| !target.is_empty()) else {
                continue;
            };
            let qualified = qualify_target(target, level.as_deref());
            match aliases.get(&qualified) {
                Some(actual) => {
                    wired.insert(direction.clone(), Some(actual.clone()));
                }
                None => {
                    tracing::warn!(
                        room = %room_id,
                        direction = %direction,
                        target = %qualified,
                        "exit target not found, leaving exit unwired"
                    );
                    wired.insert(direction.clone(), None);
                }
            }
        }
        if let Some(room) = rooms.get_mut(room_id) {
            room.exits = wired;
        }
    }

    if rooms.is_empty() {
        return Err(ContentError::EmptyWorld {
            world: world_id.to_string(),
        });
    }

    let starting_room = config
        .starting_room
        .as_deref()
        .map(|target| qualify_target(target, Some("level_one")));

    Ok(WorldState {
        id: world_id.to_string(),
        name: config.name.clone(),
        description: config.description.clone(),
        starting_room,
        puzzle_ids: config.puzzles.clone(),
        sequence_enabled: config.sequence_enabled,
        rooms,
    })
}

/// Collect `level_*` subdirectories of a world, in name order.
fn level_dirs(world_dir: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = match std::fs::read_dir(world_dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_dir()
                    && path
                        .file_name()
                        .map(|name| name.to_string_lossy().starts_with("level_"))
                        .unwrap_or(false)
            })
            .collect(),
        Err(error) => {
            tracing::warn!(dir = %world_dir.display(), %error, "failed to read world directory");
            Vec::new()
        }
    };
    dirs.sort();
    dirs
}

/// Load the `items/`, `npcs/`, and `rooms/` files of one directory.
fn load_components(
    dir: &Path,
    level: Option<&str>,
    items: &mut BTreeMap<String, Item>,
    npcs: &mut BTreeMap<String, Npc>,
    room_files: &mut Vec<(String, Option<String>, RoomFile)>,
) {
    for path in json_files(&dir.join("items")) {
        match read_json::<ItemFile>(&path) {
            Ok(file) => {
                let key = construct_key(&file.name, level);
                items.insert(key, materialize_item(file));
            }
            Err(error) => tracing::warn!(path = %path.display(), %error, "skipping item file"),
        }
    }

    for path in json_files(&dir.join("npcs")) {
        match read_json::<NpcFile>(&path) {
            Ok(file) => {
                let npc_id = file.id.clone().unwrap_or_else(|| file.name.clone());
                let key = construct_key(&npc_id, level);
                let mut npc = Npc::new(normalize_id(&npc_id), file.name);
                npc.description = file.description;
                npc.dialogue = file.dialogue;
                npc.inventory = file.inventory.into_iter().map(materialize_item).collect();
                npc.state = file.state;
                npcs.insert(key, npc);
            }
            Err(error) => tracing::warn!(path = %path.display(), %error, "skipping npc file"),
        }
    }

    for path in json_files(&dir.join("rooms")) {
        match read_json::<RoomFile>(&path) {
            Ok(file) => {
                let stem = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let room_id = construct_key(&stem, level);
                room_files.push((room_id, level.map(str::to_string), file));
            }
            Err(error) => tracing::warn!(path = %path.display(), %error, "skipping room file"),
        }
    }
}

/// All `*.json` files directly inside a directory, in name order. A missing
/// directory yields nothing.
fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

fn materialize_item(file: ItemFile) -> Item {
    let mut item = Item::new(file.name, file.description);
    item.properties = file.properties;
    item
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = std::fs::read_to_string(path).map_err(|error| error.to_string())?;
    serde_json::from_str(&raw).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn seed_minimal_world(root: &Path) {
        write(
            &root.join("worlds.json"),
            r#"{
                "testlands": {
                    "name": "Testlands",
                    "description": "A proving ground.",
                    "starting_room": "level_one/gate",
                    "puzzles": ["air_currents_puzzle"]
                }
            }"#,
        );
        write(
            &root.join("testlands/level_one/rooms/gate.json"),
            r#"{
                "name": "Gate",
                "description": "A weathered gate.",
                "exits": { "north": "hall", "south": "missing_room", "portal": "elsewhere" },
                "stairs_up": "level_two/landing",
                "items": ["lantern"],
                "npcs": ["keeper"]
            }"#,
        );
        write(
            &root.join("testlands/level_one/rooms/hall.json"),
            r#"{
                "name": "Great Hall",
                "description": "Echoes linger here.",
                "exits": { "south": "Gate" }
            }"#,
        );
        write(
            &root.join("testlands/level_two/rooms/landing.json"),
            r#"{ "name": "Landing", "description": "A narrow landing.", "stairs_down": "level_one/gate" }"#,
        );
        write(
            &root.join("testlands/level_one/items/lantern.json"),
            r#"{
                "name": "lantern",
                "description": "A sturdy brass lantern.",
                "properties": { "light_radius": 3 }
            }"#,
        );
        write(
            &root.join("testlands/level_one/npcs/keeper.json"),
            r#"{ "id": "keeper", "name": "Keeper", "dialogue": { "greeting": "Stay close." } }"#,
        );
    }

    #[test]
    fn test_load_minimal_world() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_world(dir.path());

        let catalog = WorldCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let world = catalog.world("testlands").unwrap();
        assert_eq!(world.name, "Testlands");
        assert_eq!(world.starting_room_id(), Some("level_one/gate"));
        assert_eq!(world.puzzle_ids, vec!["air_currents_puzzle"]);
        assert!(world.sequence_enabled);
        assert_eq!(world.rooms.len(), 3);

        let gate = world.room("level_one/gate").unwrap();
        assert_eq!(gate.items.len(), 1);
        assert_eq!(
            gate.items[0].properties.get("light_radius"),
            Some(&serde_json::json!(3))
        );
        assert_eq!(gate.npcs.len(), 1);
        assert_eq!(gate.stairs_up.as_deref(), Some("level_two/landing"));
    }

    #[test]
    fn test_exit_wiring_and_pruning() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_world(dir.path());

        let catalog = WorldCatalog::load(dir.path()).unwrap();
        let gate = catalog.world("testlands").unwrap().room("level_one/gate").unwrap();

        // Resolvable target wires through, dangling target stays listed but
        // unwired, portal pseudo-exits vanish entirely.
        assert_eq!(
            gate.exits.get("north"),
            Some(&Some("level_one/hall".to_string()))
        );
        assert_eq!(gate.exits.get("south"), Some(&None));
        assert!(!gate.exits.contains_key("portal"));
    }

    #[test]
    fn test_exit_resolves_by_room_name() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_world(dir.path());

        let catalog = WorldCatalog::load(dir.path()).unwrap();
        let hall = catalog.world("testlands").unwrap().room("level_one/hall").unwrap();

        // "Gate" is the display name; it resolves to the gate room's id.
        assert_eq!(
            hall.exits.get("south"),
            Some(&Some("level_one/gate".to_string()))
        );
    }

    #[test]
    fn test_world_by_name_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_world(dir.path());

        let catalog = WorldCatalog::load(dir.path()).unwrap();
        assert!(catalog.world_by_name("testlands").is_some());
        assert!(catalog.world_by_name("TESTLANDS").is_some());
        assert!(catalog.world_by_name("nowhere").is_none());
    }

    #[test]
    fn test_missing_world_dir_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_world(dir.path());
        write(
            &dir.path().join("worlds.json"),
            r#"{
                "testlands": { "name": "Testlands", "starting_room": "level_one/gate" },
                "ghostlands": { "name": "Ghostlands" }
            }"#,
        );

        let catalog = WorldCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.world("ghostlands").is_none());
    }

    #[test]
    fn test_unparseable_room_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        seed_minimal_world(dir.path());
        write(
            &dir.path().join("testlands/level_one/rooms/broken.json"),
            "{ not json",
        );

        let catalog = WorldCatalog::load(dir.path()).unwrap();
        let world = catalog.world("testlands").unwrap();
        assert_eq!(world.rooms.len(), 3);
        assert!(world.room("level_one/broken").is_none());
    }

    #[test]
    fn test_world_with_no_rooms_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("worlds.json"),
            r#"{ "voidlands": { "name": "Voidlands" } }"#,
        );
        fs::create_dir_all(dir.path().join("voidlands")).unwrap();

        let result = WorldCatalog::load(dir.path());
        assert!(matches!(result, Err(ContentError::EmptyWorld { .. })));
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("worlds.json"), "{}");

        let result = WorldCatalog::load(dir.path());
        assert!(matches!(result, Err(ContentError::NoWorlds)));
    }

    #[test]
    fn test_missing_index_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WorldCatalog::load(dir.path());
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}

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

//! In-memory session registry.
//!
//! One session owns one `Game`. Sessions live only in this process; a
//! restart drops them all, and players resume through the save system.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use shardrealms_engine::Game;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// One live session: the game core plus activity bookkeeping.
pub struct SessionEntry {
    /// The session's game core, locked for the duration of one command.
    pub game: Arc<Mutex<Game>>,

    /// Session creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp.
    pub last_activity: DateTime<Utc>,
}

impl SessionEntry {
    fn new(game: Game) -> Self {
        let now = Utc::now();
        Self {
            game: Arc::new(Mutex::new(game)),
            created_at: now,
            last_activity: now,
        }
    }

    /// Update the last activity timestamp.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Check if the session has been idle longer than the timeout.
    pub fn is_expired(&self, timeout_seconds: i64) -> bool {
        let duration = Utc::now().signed_duration_since(self.last_activity);
        duration.num_seconds() > timeout_seconds
    }
}

/// Concurrent map of live sessions keyed by session id.
///
/// Sessions are independent; lookups touch one shard at a time, so a
/// slow session never stalls the rest.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, SessionEntry>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a started game and return its new session id.
    pub fn create(&self, game: Game) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions.insert(session_id, SessionEntry::new(game));
        tracing::info!(session = %session_id, "session created");
        session_id
    }

    /// Fetch a session's game handle, refreshing its activity timestamp.
    pub fn get(&self, session_id: Uuid) -> Option<Arc<Mutex<Game>>> {
        self.sessions.get_mut(&session_id).map(|mut entry| {
            entry.touch();
            Arc::clone(&entry.game)
        })
    }

    /// Drop a session. Returns false when the id is unknown.
    pub fn remove(&self, session_id: Uuid) -> bool {
        let removed = self.sessions.remove(&session_id).is_some();
        if removed {
            tracing::info!(session = %session_id, "session removed");
        }
        removed
    }

    /// Number of live sessions.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    /// Sweep sessions idle past the timeout. Returns how many were dropped.
    pub fn cleanup_expired(&self, timeout_seconds: i64) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| !entry.is_expired(timeout_seconds));
        let removed = before - self.sessions.len();
        if removed > 0 {
            tracing::info!(removed, "swept expired sessions");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardrealms_engine::{SaveManager, WorldCatalog};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn seed_content(root: &Path) {
        fs::write(
            root.join("worlds.json"),
            r#"{
                "demo": {
                    "name": "Demo",
                    "description": "A small proving ground.",
                    "starting_room": "level_one/hall"
                }
            }"#,
        )
        .unwrap();
        let rooms = root.join("demo/level_one/rooms");
        fs::create_dir_all(&rooms).unwrap();
        fs::write(
            rooms.join("hall.json"),
            r#"{
                "name": "Hall",
                "description": "A quiet hall.",
                "exits": {}
            }"#,
        )
        .unwrap();
    }

    fn fixture() -> (TempDir, Game) {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        seed_content(&content);
        let catalog = Arc::new(WorldCatalog::load(&content).unwrap());
        let game = Game::new(catalog, SaveManager::new(dir.path().join("saves")));
        (dir, game)
    }

    #[test]
    fn test_create_and_count() {
        let registry = SessionRegistry::new();
        assert_eq!(registry.count(), 0);

        let (_dir, game) = fixture();
        let session_id = registry.create(game);

        assert_eq!(registry.count(), 1);
        assert!(registry.get(session_id).is_some());
    }

    #[test]
    fn test_get_unknown_session() {
        let registry = SessionRegistry::new();
        assert!(registry.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_get_refreshes_activity() {
        let registry = SessionRegistry::new();
        let (_dir, game) = fixture();
        let session_id = registry.create(game);

        registry
            .sessions
            .get_mut(&session_id)
            .unwrap()
            .last_activity = Utc::now() - chrono::Duration::seconds(400);
        assert!(
            registry
                .sessions
                .get(&session_id)
                .unwrap()
                .is_expired(300)
        );

        let _ = registry.get(session_id);
        assert!(
            !registry
                .sessions
                .get(&session_id)
                .unwrap()
                .is_expired(300)
        );
    }

    #[test]
    fn test_remove_session() {
        let registry = SessionRegistry::new();
        let (_dir, game) = fixture();
        let session_id = registry.create(game);

        assert!(registry.remove(session_id));
        assert_eq!(registry.count(), 0);
        assert!(registry.get(session_id).is_none());

        assert!(!registry.remove(session_id));
    }

    #[test]
    fn test_cleanup_expired_sweeps_only_stale_sessions() {
        let registry = SessionRegistry::new();
        let (_dir_a, fresh) = fixture();
        let (_dir_b, stale) = fixture();
        let fresh_id = registry.create(fresh);
        let stale_id = registry.create(stale);

        registry.sessions.get_mut(&stale_id).unwrap().last_activity =
            Utc::now() - chrono::Duration::seconds(400);

        let removed = registry.cleanup_expired(300);
        assert_eq!(removed, 1);
        assert!(registry.get(fresh_id).is_some());
        assert!(registry.get(stale_id).is_none());
    }

    #[test]
    fn test_cleanup_keeps_everything_when_fresh() {
        let registry = SessionRegistry::new();
        let (_dir, game) = fixture();
        registry.create(game);

        assert_eq!(registry.cleanup_expired(300), 0);
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_entry_expiration() {
        let (_dir, game) = fixture();
        let mut entry = SessionEntry::new(game);

        assert!(!entry.is_expired(300));

        entry.last_activity = Utc::now() - chrono::Duration::seconds(400);
        assert!(entry.is_expired(300));

        entry.touch();
        assert!(!entry.is_expired(300));
    }

    #[test]
    fn test_locked_game_processes_commands() {
        let registry = SessionRegistry::new();
        let (_dir, mut game) = fixture();
        let intro = game.start(None);
        assert!(!intro.events.is_empty());

        let session_id = registry.create(game);
        let handle = registry.get(session_id).unwrap();

        tokio_test::block_on(async {
            let turn = handle.lock().await.process_command("look");
            assert!(!turn.ended);
            assert!(
                turn.events
                    .iter()
                    .any(|event| event.text().contains("Room: Hall"))
            );
        });
    }
}

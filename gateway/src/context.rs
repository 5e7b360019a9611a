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

use crate::registry::SessionRegistry;
use shardrealms_engine::{Game, SaveManager, WorldCatalog};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared route state: the immutable world catalog plus the session
/// registry and the settings each new game is built from.
#[derive(Clone)]
pub struct GatewayContext {
    /// Loaded game worlds, shared by every session.
    pub catalog: Arc<WorldCatalog>,

    /// Live sessions keyed by session id.
    pub registry: Arc<SessionRegistry>,

    /// Save directory handed to each new game.
    save_directory: PathBuf,

    /// Quicksave files kept per slot.
    keep_quicksaves: usize,

    /// World a new session starts in; catalog order decides when unset.
    default_world: Option<String>,
}

impl GatewayContext {
    /// Create a new gateway context.
    pub fn new(
        catalog: Arc<WorldCatalog>,
        save_directory: PathBuf,
        keep_quicksaves: usize,
        default_world: Option<String>,
    ) -> Self {
        Self {
            catalog,
            registry: Arc::new(SessionRegistry::new()),
            save_directory,
            keep_quicksaves,
            default_world,
        }
    }

    /// Get the session registry.
    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Build a fresh game over the shared catalog.
    pub fn new_game(&self) -> Game {
        let saves = SaveManager::with_retention(self.save_directory.clone(), self.keep_quicksaves);
        Game::new(Arc::clone(&self.catalog), saves)
    }

    /// World id new sessions start in, when configured.
    pub fn default_world(&self) -> Option<&str> {
        self.default_world.as_deref()
    }
}

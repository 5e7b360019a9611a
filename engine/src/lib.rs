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

//! Shardrealms Engine Library
//!
//! This library provides the game core for Shardrealms: the command router,
//! world and player state, the aspect puzzle engine, level progression, and
//! the save system. The engine is synchronous and session-scoped; embedders
//! (the terminal client and the gateway) feed it one command at a time and
//! render the display events it emits.

pub mod commands;
pub mod config;
pub mod content;
pub mod epilogue;
pub mod game;
pub mod output;
pub mod persistence;
pub mod player;
pub mod progression;
pub mod puzzles;
pub mod render;
pub mod world;

// Re-export commonly used types
pub use config::{Arguments, Configuration};
pub use content::{ContentError, WorldCatalog};
pub use game::{Game, Turn};
pub use persistence::SaveManager;
pub use shardrealms_common::OutputEvent;

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

//! Session commands: `help`, `quit`, and the developer unlock.

use crate::commands::{self, CommandResult};
use crate::game::Game;
use crate::render;

/// Print the command reference, grouped into sections.
pub(crate) fn help(game: &mut Game, _args: Vec<String>) -> CommandResult {
    let rule = render::rule('-');
    let mut sections = Vec::new();
    for (title, rows) in commands::help_sections() {
        let mut text = format!("{rule}\n{title}\n{rule}");
        for row in rows {
            text.push_str(&format!("\n• {:<25} - {}", row.usage, row.blurb));
        }
        sections.push(text);
    }
    game.output.line(sections.join("\n\n"));
    CommandResult::Success
}

/// End the session. The caller stops reading input; no farewell is printed.
pub(crate) fn quit(_game: &mut Game, _args: Vec<String>) -> CommandResult {
    CommandResult::Quit
}

/// The hidden unlock keyword: drops every progression gate for the rest
/// of the session.
pub(crate) fn dev_unlock(game: &mut Game, _args: Vec<String>) -> CommandResult {
    game.progression.activate_dev_mode();
    game.output.block("Dev mode activated - all rooms unlocked!");
    CommandResult::Success
}

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

//! Save and load commands.
//!
//! `save` and `load` with an argument act immediately on that slot. With
//! no argument they open a one-turn prompt: the next input line is taken
//! whole as the slot name (save) or as a numeric pick from the listed
//! slots (load). The prompt state lives on the [`Game`] as a
//! [`PendingPrompt`], so a session survives a disconnect mid-prompt.

use crate::commands::{look, CommandResult};
use crate::game::{Game, PendingPrompt};
use crate::persistence::{SaveError, DEFAULT_SLOT};

/// `save [slot]`: write the session to disk, prompting for a slot name
/// when none was given.
pub(crate) fn save(game: &mut Game, args: Vec<String>) -> CommandResult {
    if args.is_empty() {
        game.output
            .line("Enter a name for your save slot (press Enter for 'quicksave'):");
        game.pending = Some(PendingPrompt::SaveName);
        return CommandResult::Success;
    }
    let slot = normalize_slot(&args.join(" "));
    perform_save(game, &slot)
}

/// `load [slot]`: restore a session, offering a numbered slot menu when
/// no slot was given.
pub(crate) fn load(game: &mut Game, args: Vec<String>) -> CommandResult {
    if !args.is_empty() {
        let slot = normalize_slot(&args.join(" "));
        return perform_load(game, &slot);
    }
    let summaries = match game.saves.list() {
        Ok(summaries) => summaries,
        Err(error) => {
            game.output.block(format!("Error loading game: {error}"));
            return CommandResult::Failure;
        }
    };
    if summaries.is_empty() {
        game.output.line("No saved games found.");
        return CommandResult::Failure;
    }
    let mut slots: Vec<String> = Vec::new();
    let mut entries: Vec<String> = Vec::new();
    for summary in &summaries {
        if slots.contains(&summary.slot) {
            continue;
        }
        entries.push(format!(
            "{}. {} ({})",
            slots.len() + 1,
            summary.slot,
            summary.timestamp
        ));
        slots.push(summary.slot.clone());
    }
    game.output.list("Available Saves", entries);
    game.output
        .line("Enter the number of the save to load (press Enter to cancel):");
    game.pending = Some(PendingPrompt::LoadChoice { slots });
    CommandResult::Success
}

/// `list saves`: every slot with the timestamp of its newest file.
pub(crate) fn list_saves(game: &mut Game, _args: Vec<String>) -> CommandResult {
    let summaries = match game.saves.list() {
        Ok(summaries) => summaries,
        Err(error) => {
            game.output.block(format!("Error loading game: {error}"));
            return CommandResult::Failure;
        }
    };
    if summaries.is_empty() {
        game.output.line("No saved games found.");
        return CommandResult::Success;
    }
    let mut seen: Vec<&str> = Vec::new();
    let mut entries: Vec<String> = Vec::new();
    for summary in &summaries {
        if seen.contains(&summary.slot.as_str()) {
            continue;
        }
        entries.push(format!("{} ({})", summary.slot, summary.timestamp));
        seen.push(&summary.slot);
    }
    game.output.list("Available Saves", entries);
    CommandResult::Success
}

/// Turn a typed slot name into a filename-safe slot: trimmed, lowercased,
/// spaces to underscores. Empty input falls back to the quicksave slot.
pub(crate) fn normalize_slot(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_SLOT.to_string();
    }
    trimmed.to_lowercase().replace(' ', "_")
}

/// Capture and write a save, reporting the outcome to the player.
pub(crate) fn perform_save(game: &mut Game, slot: &str) -> CommandResult {
    let data = game.capture_save(slot);
    match game.saves.write(&data) {
        Ok(path) => {
            tracing::info!(slot, path = %path.display(), "game saved");
            game.output
                .block(format!("Game saved successfully to slot: {slot}"));
            CommandResult::Success
        }
        Err(error) => {
            tracing::warn!(slot, %error, "save failed");
            game.output.block(format!("Error saving game: {error}"));
            CommandResult::Failure
        }
    }
}

/// Read the newest file for a slot and swap the session to it, leaving
/// the session untouched on any failure.
pub(crate) fn perform_load(game: &mut Game, slot: &str) -> CommandResult {
    let data = match game.saves.read_latest(slot) {
        Ok(data) => data,
        Err(SaveError::NotFound { slot }) => {
            game.output
                .line(format!("No saved game found in slot: {slot}"));
            return CommandResult::Failure;
        }
        Err(SaveError::Incompatible) => {
            game.output.line(
                "Warning: This save file appears to be corrupted or from a different version",
            );
            return CommandResult::Failure;
        }
        Err(error) => {
            game.output.block(format!("Error loading game: {error}"));
            return CommandResult::Failure;
        }
    };
    match game.apply_save(data) {
        Ok(()) => {
            game.output
                .block(format!("Game loaded successfully from slot: {slot}"));
            look::look(game, Vec::new());
            CommandResult::Success
        }
        Err(error) => {
            tracing::warn!(slot, %error, "load failed");
            game.output.block(format!("Error loading game: {error}"));
            CommandResult::Failure
        }
    }
}

/// Resolve the numeric answer to the load menu.
pub(crate) fn finish_load_choice(game: &mut Game, slots: &[String], line: &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        game.output.line("Load cancelled.");
        return;
    }
    let chosen = trimmed
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| slots.get(index))
        .cloned();
    match chosen {
        Some(slot) => {
            perform_load(game, &slot);
        }
        None => {
            game.output.block("Invalid choice.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slot() {
        assert_eq!(normalize_slot("  My Best Run  "), "my_best_run");
        assert_eq!(normalize_slot("tower"), "tower");
        assert_eq!(normalize_slot(""), DEFAULT_SLOT);
        assert_eq!(normalize_slot("   "), DEFAULT_SLOT);
    }
}

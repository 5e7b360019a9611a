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

//! The finale.
//!
//! Once the player carries all three shards at the same time, the session
//! interrupts normal play, presents a three-way choice, and ends the game
//! with the matching epilogue. The check runs after every command, so the
//! finale triggers on the turn the last shard is picked up wherever that
//! happens.

use crate::output::OutputQueue;
use crate::player::Player;

/// One shard per world; carrying all of them at once ends the game.
pub(crate) const REQUIRED_SHARDS: [&str; 3] =
    ["elemental shard", "resonance shard", "imagination shard"];

const CHOICE_MENU: &str = "What will you do with the shards?\n\n\
    1. Unite them and reforge the heart of the realms\n\
    2. Scatter them, one to each world, and seal the rifts\n\
    3. Keep them for yourself\n\n\
    Enter 1, 2, or 3:";

pub(crate) fn holds_all_shards(player: &Player) -> bool {
    REQUIRED_SHARDS.iter().all(|shard| player.has_item(shard))
}

/// Open the finale: narration plus the choice menu. The caller is
/// expected to route the next input line to [`resolve_choice`].
pub(crate) fn begin(output: &mut OutputQueue) {
    output.header("The Three Shards");
    output.block(
        "As you take stock of your belongings, the three shards begin to hum \
         in unison. Elemental fire, pure resonance, and wild imagination twine \
         together, and a seam of light opens in the air before you.\n\n\
         The realms hold their breath.",
    );
    output.block(CHOICE_MENU);
}

/// Handle the player's answer to the finale menu. Returns true when the
/// game is over; on any other input the menu is shown again and the
/// caller should keep routing input here.
pub(crate) fn resolve_choice(output: &mut OutputQueue, line: &str) -> bool {
    let (title, narrative) = match line.trim() {
        "1" => (
            "The Realms Reforged",
            "You press the shards together. Light floods outward, and the \
             broken boundary between the worlds knits itself whole. Where \
             three scattered realms once drifted, one living world turns \
             beneath a single sun, and every door you opened stands open \
             still.",
        ),
        "2" => (
            "The Long Watch",
            "One by one you carry the shards home, setting each into the soil \
             of the world that shaped it. The rifts sigh shut behind you. The \
             realms stay sundered, and safe, and somewhere between them you \
             keep walking, the only traveler who remembers all three.",
        ),
        "3" => (
            "The Shardbearer",
            "You close your hand around the shards and the humming stops, as \
             if the realms themselves were waiting to see what you would do. \
             Power settles over your shoulders like a cloak. The worlds will \
             turn as you decide now, and nothing in them will ever tell you \
             no again.",
        ),
        _ => {
            output.block("Please choose 1, 2, or 3.");
            output.block(CHOICE_MENU);
            return false;
        }
    };

    output.header(format!("ENDING: {title}"));
    output.block(narrative);
    output.line("Thank you for playing Shardrealms.");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Item;
    use shardrealms_common::OutputEvent;

    fn player_with(names: &[&str]) -> Player {
        let mut player = Player::new();
        for name in names {
            player.inventory.push(Item::new(*name, ""));
        }
        player
    }

    #[test]
    fn test_holds_all_shards() {
        assert!(!holds_all_shards(&Player::new()));
        assert!(!holds_all_shards(&player_with(&[
            "elemental shard",
            "resonance shard"
        ])));
        assert!(holds_all_shards(&player_with(&[
            "elemental shard",
            "resonance shard",
            "imagination shard",
        ])));
    }

    #[test]
    fn test_shard_names_match_case_insensitively() {
        assert!(holds_all_shards(&player_with(&[
            "Elemental Shard",
            "Resonance Shard",
            "Imagination Shard",
        ])));
    }

    #[test]
    fn test_begin_presents_the_choice_menu() {
        let mut output = OutputQueue::new();
        begin(&mut output);
        let events = output.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], OutputEvent::Header { text } if text == "The Three Shards"));
        assert!(
            matches!(&events[2], OutputEvent::Block { text } if text.contains("Enter 1, 2, or 3:"))
        );
    }

    #[test]
    fn test_each_choice_ends_the_game() {
        for (choice, title) in [
            ("1", "ENDING: The Realms Reforged"),
            ("2", "ENDING: The Long Watch"),
            ("3", "ENDING: The Shardbearer"),
        ] {
            let mut output = OutputQueue::new();
            assert!(resolve_choice(&mut output, choice));
            let events = output.drain();
            assert!(matches!(&events[0], OutputEvent::Header { text } if text == title));
            assert!(
                matches!(&events[2], OutputEvent::Line { text } if text == "Thank you for playing Shardrealms.")
            );
        }
    }

    #[test]
    fn test_choice_tolerates_surrounding_whitespace() {
        let mut output = OutputQueue::new();
        assert!(resolve_choice(&mut output, "  2  "));
    }

    #[test]
    fn test_bad_choice_reprompts() {
        let mut output = OutputQueue::new();
        assert!(!resolve_choice(&mut output, "fling them into the sea"));
        let events = output.drain();
        assert_eq!(events.len(), 2);
        assert!(
            matches!(&events[0], OutputEvent::Block { text } if text == "Please choose 1, 2, or 3.")
        );
        assert!(
            matches!(&events[1], OutputEvent::Block { text } if text.contains("What will you do with the shards?"))
        );
    }
}

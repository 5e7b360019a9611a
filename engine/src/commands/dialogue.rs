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

//! Conversation commands: `talk to` and `ask ... about ...`.
//!
//! `talk` introduces a character: description, greeting, and the topics
//! they will answer to, in a single decorated banner. `ask` resolves one
//! topic. Puzzles get first refusal on every `ask` (with the topic exactly
//! as typed) so a trial can hijack its own characters; only then is the
//! topic normalized and looked up in the NPC's dialogue tree.

use crate::commands::CommandResult;
use crate::game::Game;
use crate::world::DialogueNode;

/// Greet a character and list their topics.
pub(crate) fn talk(game: &mut Game, args: Vec<String>) -> CommandResult {
    let person = args.join(" ");
    let Some((world_id, room_id)) = game.location() else {
        return CommandResult::Failure;
    };
    let npc = game
        .runtimes
        .get(&world_id)
        .and_then(|world| world.room(&room_id))
        .and_then(|room| room.find_npc(&person));
    let Some(npc) = npc else {
        game.output.block("Usage: ask [person] about [topic]");
        return CommandResult::Invalid;
    };

    let mut banner = format!(
        "{}\n\n{} says:\n\n• \"{}\"",
        npc.description,
        npc.name,
        npc.greeting()
    );
    let topics = npc.topic_names();
    if !topics.is_empty() {
        banner.push_str(&format!("\n\nYou can ask {} about:\n", npc.name));
        for topic in &topics {
            banner.push_str(&format!("\n• {topic}"));
        }
    }
    game.output.header(banner);
    CommandResult::Success
}

/// Ask a character about one topic.
pub(crate) fn ask(game: &mut Game, args: Vec<String>) -> CommandResult {
    let Some(split) = args.iter().position(|token| token == "about") else {
        game.output.block("Usage: ask [person] about [topic]");
        return CommandResult::Invalid;
    };
    let person = args[..split].join(" ");
    let topic = args[split + 1..].join(" ");

    let Some((world_id, room_id)) = game.location() else {
        return CommandResult::Failure;
    };
    let Some(room) = game
        .runtimes
        .get(&world_id)
        .and_then(|world| world.room(&room_id))
    else {
        return CommandResult::Failure;
    };
    if room.npcs.is_empty() {
        game.output
            .block(format!("There is no one named {person} here."));
        return CommandResult::Failure;
    }
    let Some(npc) = room.find_npc(&person) else {
        game.output.block("Usage: ask [person] about [topic]");
        return CommandResult::Invalid;
    };

    // Puzzles see the topic as typed, before any normalization.
    let hijacked = game.puzzles.get(&world_id).and_then(|set| {
        set.iter().find_map(|puzzle| {
            puzzle.dialogue_override(&npc.name, &topic, &game.player.inventory)
        })
    });
    if let Some(reply) = hijacked {
        game.output
            .header(format!("{} says:\n\n• \"{}\"", npc.name, reply));
        return CommandResult::Success;
    }

    let key = normalize_topic(&topic);
    let Some(node) = npc.resolve_topic(&key) else {
        game.output.block(format!(
            "{} has nothing to say about that topic.",
            npc.name
        ));
        return CommandResult::Failure;
    };

    let replies = collect_replies(node, game.player.inventory.is_empty());
    if replies.is_empty() {
        game.output.block(format!(
            "{} has nothing to say about that topic.",
            npc.name
        ));
        return CommandResult::Failure;
    }
    let body = replies
        .iter()
        .map(|reply| format!("• \"{reply}\""))
        .collect::<Vec<_>>()
        .join("\n\n");
    game.output.header(format!("{} says:\n\n{}", npc.name, body));
    CommandResult::Success
}

/// Normalize a typed topic into a dialogue key: lowercase, leading `the `
/// and `about ` dropped, spaces to underscores.
fn normalize_topic(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    let stripped = lowered.strip_prefix("the ").unwrap_or(&lowered);
    let stripped = stripped.strip_prefix("about ").unwrap_or(stripped);
    stripped.replace(' ', "_")
}

/// Pick the replies a node yields. Branches answer with their `no_items`
/// entry when the player carries nothing, else their `initial` entry, else
/// every leaf reply beneath them.
fn collect_replies(node: &DialogueNode, inventory_empty: bool) -> Vec<String> {
    match node {
        DialogueNode::Text(text) => vec![text.clone()],
        DialogueNode::Branch(children) => {
            let special = if inventory_empty {
                children.get("no_items").and_then(DialogueNode::as_text)
            } else {
                None
            }
            .or_else(|| children.get("initial").and_then(DialogueNode::as_text));
            match special {
                Some(text) => vec![text.to_string()],
                None => node.leaf_texts(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> DialogueNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_topic() {
        assert_eq!(normalize_topic("the Wind Temple"), "wind_temple");
        assert_eq!(normalize_topic("about the elements"), "the_elements");
        assert_eq!(normalize_topic("shards"), "shards");
    }

    #[test]
    fn test_collect_replies_plain_text() {
        let node = node(json!("The wind remembers."));
        assert_eq!(collect_replies(&node, true), vec!["The wind remembers."]);
    }

    #[test]
    fn test_collect_replies_prefers_no_items_when_empty_handed() {
        let node = node(json!({
            "no_items": "Come back when you carry something.",
            "initial": "Ah, you brought supplies."
        }));
        assert_eq!(
            collect_replies(&node, true),
            vec!["Come back when you carry something."]
        );
        assert_eq!(
            collect_replies(&node, false),
            vec!["Ah, you brought supplies."]
        );
    }

    #[test]
    fn test_collect_replies_flattens_nested_branches() {
        let node = node(json!({
            "first": "One.",
            "nested": { "second": "Two.", "third": "Three." }
        }));
        let replies = collect_replies(&node, false);
        assert_eq!(replies, vec!["One.", "Two.", "Three."]);
    }
}

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

//! Non-player characters and their dialogue trees.
//!
//! Dialogue is authored as arbitrarily nested JSON: a topic key maps either
//! to a reply string or to a deeper map of sub-topics. The resolver in
//! [`crate::commands::dialogue`] walks this structure; this module only
//! models it.

use crate::world::Item;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One node of an NPC dialogue tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DialogueNode {
    /// A spoken reply.
    Text(String),

    /// A map of sub-topic keys to further nodes.
    Branch(BTreeMap<String, DialogueNode>),
}

impl DialogueNode {
    /// The reply string, if this node is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DialogueNode::Text(text) => Some(text.as_str()),
            DialogueNode::Branch(_) => None,
        }
    }

    /// Collect every leaf reply beneath this node, depth first.
    pub fn leaf_texts(&self) -> Vec<String> {
        let mut texts = Vec::new();
        self.collect_leaves(&mut texts);
        texts
    }

    fn collect_leaves(&self, texts: &mut Vec<String>) {
        match self {
            DialogueNode::Text(text) => texts.push(text.clone()),
            DialogueNode::Branch(children) => {
                for child in children.values() {
                    child.collect_leaves(texts);
                }
            }
        }
    }
}

/// A character the player can talk to and ask about topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Stable identifier used by room content files.
    pub id: String,

    /// Display name matched against player input.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Top-level dialogue keys; `greeting` and an optional `topics` sub-map
    /// are treated specially.
    #[serde(default)]
    pub dialogue: BTreeMap<String, DialogueNode>,

    /// Items this character carries, stocked by content files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inventory: Vec<Item>,

    /// Free-form per-character state content files may attach.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub state: HashMap<String, serde_json::Value>,
}

impl Npc {
    /// Create an NPC with no dialogue.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            dialogue: BTreeMap::new(),
            inventory: Vec::new(),
            state: HashMap::new(),
        }
    }

    /// Case-insensitive name match for player-typed references.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The line spoken on `talk`. A plain `greeting` string is used as is;
    /// a nested greeting prefers its `first_time` entry, then `repeat`.
    pub fn greeting(&self) -> &str {
        match self.dialogue.get("greeting") {
            Some(DialogueNode::Text(text)) => text.as_str(),
            Some(DialogueNode::Branch(children)) => children
                .get("first_time")
                .or_else(|| children.get("repeat"))
                .and_then(DialogueNode::as_text)
                .unwrap_or("Hello!"),
            None => "Hello!",
        }
    }

    /// Topic names advertised on `talk`: the keys of the `topics` sub-map
    /// when one exists, otherwise every top-level key except `greeting`.
    /// Keys are prettified (underscores to spaces, `about ` prefix dropped),
    /// deduplicated, and sorted.
    pub fn topic_names(&self) -> Vec<String> {
        let keys: Vec<&String> = match self.dialogue.get("topics") {
            Some(DialogueNode::Branch(topics)) => topics.keys().collect(),
            _ => self
                .dialogue
                .keys()
                .filter(|key| key.as_str() != "greeting")
                .collect(),
        };

        let mut names: Vec<String> = keys
            .into_iter()
            .map(|key| {
                let pretty = key.replace('_', " ");
                pretty
                    .strip_prefix("about ")
                    .map(str::to_string)
                    .unwrap_or(pretty)
            })
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Resolve a normalized topic key against the dialogue tree. Lookup
    /// order: exact key in the `topics` sub-map, `about_` prefixed key in
    /// the sub-map, exact top-level key, `about_` prefixed top-level key.
    pub fn resolve_topic(&self, key: &str) -> Option<&DialogueNode> {
        let prefixed = format!("about_{key}");
        if let Some(DialogueNode::Branch(topics)) = self.dialogue.get("topics") {
            if let Some(node) = topics.get(key).or_else(|| topics.get(&prefixed)) {
                return Some(node);
            }
        }
        self.dialogue
            .get(key)
            .or_else(|| self.dialogue.get(&prefixed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn npc_from_dialogue(dialogue: serde_json::Value) -> Npc {
        let mut npc = Npc::new("sage", "Sage");
        npc.dialogue = serde_json::from_value(dialogue).unwrap();
        npc
    }

    #[test]
    fn test_greeting_plain_string() {
        let npc = npc_from_dialogue(json!({ "greeting": "Well met." }));
        assert_eq!(npc.greeting(), "Well met.");
    }

    #[test]
    fn test_greeting_nested_prefers_first_time() {
        let npc = npc_from_dialogue(json!({
            "greeting": { "first_time": "Oh, a visitor!", "repeat": "You again." }
        }));
        assert_eq!(npc.greeting(), "Oh, a visitor!");

        let npc = npc_from_dialogue(json!({
            "greeting": { "repeat": "You again." }
        }));
        assert_eq!(npc.greeting(), "You again.");
    }

    #[test]
    fn test_greeting_missing_defaults() {
        let npc = npc_from_dialogue(json!({}));
        assert_eq!(npc.greeting(), "Hello!");
    }

    #[test]
    fn test_topic_names_prefers_topics_submap() {
        let npc = npc_from_dialogue(json!({
            "greeting": "Hi.",
            "topics": { "about_the_storm": "It rages.", "wind": "It howls." },
            "ignored_top_level": "never listed"
        }));
        assert_eq!(npc.topic_names(), vec!["the storm", "wind"]);
    }

    #[test]
    fn test_topic_names_falls_back_to_top_level() {
        let npc = npc_from_dialogue(json!({
            "greeting": "Hi.",
            "old_ruins": "Crumbled long ago.",
            "about_weather": "Stormy."
        }));
        assert_eq!(npc.topic_names(), vec!["old ruins", "weather"]);
    }

    #[test]
    fn test_resolve_topic_order() {
        let npc = npc_from_dialogue(json!({
            "storm": "top-level storm",
            "topics": { "storm": "sub-map storm", "about_wind": "sub-map wind" },
            "about_rain": "top-level rain"
        }));

        assert_eq!(
            npc.resolve_topic("storm").and_then(DialogueNode::as_text),
            Some("sub-map storm")
        );
        assert_eq!(
            npc.resolve_topic("wind").and_then(DialogueNode::as_text),
            Some("sub-map wind")
        );
        assert_eq!(
            npc.resolve_topic("rain").and_then(DialogueNode::as_text),
            Some("top-level rain")
        );
        assert!(npc.resolve_topic("volcano").is_none());
    }

    #[test]
    fn test_leaf_texts_flattens_nested_branches() {
        let npc = npc_from_dialogue(json!({
            "shards": {
                "elemental": "Seek the conflux.",
                "deeper": { "resonance": "Listen closely.", "imagination": "Dream wider." }
            }
        }));
        let node = npc.resolve_topic("shards").unwrap();
        assert_eq!(
            node.leaf_texts(),
            vec!["Dream wider.", "Listen closely.", "Seek the conflux."]
        );
    }
}

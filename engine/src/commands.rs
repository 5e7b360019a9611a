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

//! Command routing.
//!
//! Player input is lowercased, tokenized on whitespace, and matched against
//! a static command table. Command patterns may span multiple tokens
//! (`pick up`, `list worlds`, `save game`); the router prefers the longest
//! matching pattern, with declaration order breaking ties, so `pick up
//! torch` dispatches to `pick up` rather than `pick`. Tokens past the
//! matched pattern become the handler's arguments.
//!
//! Handlers live in the submodules below. They mutate the [`Game`] and push
//! display events onto its output queue; none of them print directly.

pub mod dialogue;
pub mod inventory;
pub mod look;
pub mod meta;
pub mod movement;
pub mod saves;

use crate::game::Game;

/// Outcome of one dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// The command did what the player asked.
    Success,
    /// The command was understood but the world refused it.
    Failure,
    /// The arguments were malformed; usage text was shown.
    Invalid,
    /// The player asked to end the session.
    Quit,
}

/// A command handler: borrows the session, consumes the parsed arguments.
pub type Handler = fn(&mut Game, Vec<String>) -> CommandResult;

/// Which `help` section a command line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpGroup {
    Basic,
    Interaction,
    Movement,
}

impl HelpGroup {
    /// Section title as printed by `help`.
    pub fn title(self) -> &'static str {
        match self {
            HelpGroup::Basic => "Basic Commands",
            HelpGroup::Interaction => "Interaction Commands",
            HelpGroup::Movement => "Movement",
        }
    }
}

/// One usage line in the `help` listing.
#[derive(Debug)]
pub struct HelpRow {
    pub group: HelpGroup,
    pub usage: &'static str,
    pub blurb: &'static str,
}

/// One entry in the command table.
pub struct CommandSpec {
    /// Canonical name, recorded in the player's discovered-command set.
    pub name: &'static str,

    /// Alternate spellings, including multi-word forms.
    pub aliases: &'static [&'static str],

    /// Hidden commands dispatch normally but are never listed by `help`.
    pub hidden: bool,

    pub handler: Handler,

    /// Usage lines this command contributes to `help`. Commands with an
    /// empty slice are dispatchable but undocumented.
    pub help: &'static [HelpRow],
}

static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "look",
        aliases: &[],
        hidden: false,
        handler: look::look,
        help: &[HelpRow {
            group: HelpGroup::Basic,
            usage: "look",
            blurb: "Examine the current room",
        }],
    },
    CommandSpec {
        name: "inventory",
        aliases: &["i", "inv"],
        hidden: false,
        handler: inventory::show_inventory,
        help: &[HelpRow {
            group: HelpGroup::Basic,
            usage: "inventory",
            blurb: "Check your inventory",
        }],
    },
    CommandSpec {
        name: "help",
        aliases: &[],
        hidden: false,
        handler: meta::help,
        help: &[HelpRow {
            group: HelpGroup::Basic,
            usage: "help",
            blurb: "Show this help message",
        }],
    },
    CommandSpec {
        name: "quit",
        aliases: &["exit"],
        hidden: false,
        handler: meta::quit,
        help: &[HelpRow {
            group: HelpGroup::Basic,
            usage: "quit",
            blurb: "Exit the game",
        }],
    },
    CommandSpec {
        name: "teleport",
        aliases: &["teleport to"],
        hidden: false,
        handler: movement::teleport,
        help: &[HelpRow {
            group: HelpGroup::Basic,
            usage: "teleport [world_name]",
            blurb: "Teleport to a different world",
        }],
    },
    CommandSpec {
        name: "list worlds",
        aliases: &[],
        hidden: false,
        handler: movement::list_worlds,
        help: &[HelpRow {
            group: HelpGroup::Basic,
            usage: "list worlds",
            blurb: "List all available worlds",
        }],
    },
    CommandSpec {
        name: "take",
        aliases: &["get", "pick", "pick up"],
        hidden: false,
        handler: inventory::take,
        help: &[
            HelpRow {
                group: HelpGroup::Interaction,
                usage: "take [item]",
                blurb: "Pick up an item",
            },
            HelpRow {
                group: HelpGroup::Interaction,
                usage: "pick up [item]",
                blurb: "Pick up an item",
            },
        ],
    },
    CommandSpec {
        name: "drop",
        aliases: &[],
        hidden: false,
        handler: inventory::drop_item,
        help: &[HelpRow {
            group: HelpGroup::Interaction,
            usage: "drop [item]",
            blurb: "Drop an item",
        }],
    },
    CommandSpec {
        name: "talk",
        aliases: &["talk to"],
        hidden: false,
        handler: dialogue::talk,
        help: &[HelpRow {
            group: HelpGroup::Interaction,
            usage: "talk to [npc]",
            blurb: "Talk to an NPC",
        }],
    },
    CommandSpec {
        name: "ask",
        aliases: &[],
        hidden: false,
        handler: dialogue::ask,
        help: &[HelpRow {
            group: HelpGroup::Interaction,
            usage: "ask [npc] about [topic]",
            blurb: "Ask an NPC about a specific topic",
        }],
    },
    CommandSpec {
        name: "go",
        aliases: &[],
        hidden: false,
        handler: movement::go,
        help: &[HelpRow {
            group: HelpGroup::Movement,
            usage: "go [direction]",
            blurb: "Move to another room",
        }],
    },
    CommandSpec {
        name: "use",
        aliases: &[],
        hidden: false,
        handler: inventory::use_item,
        help: &[HelpRow {
            group: HelpGroup::Movement,
            usage: "use stairs [up/down]",
            blurb: "Use stairs to move between levels",
        }],
    },
    CommandSpec {
        name: "save",
        aliases: &["save game"],
        hidden: false,
        handler: saves::save,
        help: &[],
    },
    CommandSpec {
        name: "load",
        aliases: &["load game"],
        hidden: false,
        handler: saves::load,
        help: &[],
    },
    CommandSpec {
        name: "list saves",
        aliases: &[],
        hidden: false,
        handler: saves::list_saves,
        help: &[],
    },
    CommandSpec {
        name: crate::progression::DEV_MODE_KEYWORD,
        aliases: &[],
        hidden: true,
        handler: meta::dev_unlock,
        help: &[],
    },
];

/// Split player input into lowercase whitespace-separated tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The `help` listing: section titles with their usage rows, in display
/// order. Hidden commands never appear.
pub fn help_sections() -> Vec<(&'static str, Vec<&'static HelpRow>)> {
    [HelpGroup::Basic, HelpGroup::Interaction, HelpGroup::Movement]
        .into_iter()
        .map(|group| {
            let rows = COMMANDS
                .iter()
                .filter(|spec| !spec.hidden)
                .flat_map(|spec| spec.help.iter())
                .filter(|row| row.group == group)
                .collect();
            (group.title(), rows)
        })
        .collect()
}

/// A successful match: the canonical command, the pattern that matched,
/// and the leftover tokens. Owns its arguments so the router borrow ends
/// before the handler runs.
#[derive(Debug)]
pub struct Resolution {
    /// Canonical command name, e.g. `take` for input `pick up torch`.
    pub name: &'static str,

    /// The exact pattern text that matched, e.g. `pick up`.
    pub matched: &'static str,

    pub handler: Handler,

    /// Tokens after the matched pattern.
    pub args: Vec<String>,
}

struct Pattern {
    tokens: Vec<&'static str>,
    text: &'static str,
    spec: &'static CommandSpec,
}

/// Matches tokenized input against the command table.
pub struct CommandRouter {
    patterns: Vec<Pattern>,
}

impl CommandRouter {
    /// Build the match list: one pattern per name and alias, longest
    /// patterns first, declaration order within a length.
    pub fn new() -> Self {
        let mut patterns = Vec::new();
        for spec in COMMANDS {
            for text in std::iter::once(spec.name).chain(spec.aliases.iter().copied()) {
                patterns.push(Pattern {
                    tokens: text.split_whitespace().collect(),
                    text,
                    spec,
                });
            }
        }
        patterns.sort_by_key(|pattern| std::cmp::Reverse(pattern.tokens.len()));
        Self { patterns }
    }

    /// Find the first pattern whose tokens are a prefix of the input.
    pub fn resolve(&self, tokens: &[String]) -> Option<Resolution> {
        for pattern in &self.patterns {
            if tokens.len() < pattern.tokens.len() {
                continue;
            }
            let matched = pattern
                .tokens
                .iter()
                .zip(tokens)
                .all(|(expected, token)| token == expected);
            if matched {
                return Some(Resolution {
                    name: pattern.spec.name,
                    matched: pattern.text,
                    handler: pattern.spec.handler,
                    args: tokens[pattern.tokens.len()..].to_vec(),
                });
            }
        }
        None
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

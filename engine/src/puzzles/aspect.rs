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

//! Verb and noun matching over puzzle blueprints.
//!
//! An [`AspectPuzzle`] reads a command as an action and a target: the first
//! token is the verb, the last token is the noun, and anything between is
//! flavour. Landing both halves of an aspect's vocabulary in the aspect's
//! room solves that aspect; landing only one earns a themed hint.

use super::themes;
use super::{Puzzle, PuzzleContext, PuzzleReply, PuzzleState};
use crate::progression::ProgressionTracker;
use std::collections::BTreeSet;

/// Static description of one trial: metadata plus its aspect table.
pub struct PuzzleBlueprint {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Progress narration; `{aspect}` expands to the solved aspect's name
    /// with underscores spaced out.
    pub success_template: &'static str,
    /// Printed in place of the success line when the final aspect falls.
    pub completion_message: &'static str,
    pub aspects: &'static [AspectDef],
}

/// One solvable facet of a trial, bound to a single room.
pub struct AspectDef {
    pub name: &'static str,
    /// Room binding, matched as a substring of the lowercased room id.
    pub room: &'static str,
    pub verbs: &'static [&'static str],
    pub nouns: &'static [&'static str],
}

impl AspectDef {
    fn accepts_verb(&self, verb: &str) -> bool {
        self.verbs.iter().any(|candidate| *candidate == verb)
    }

    fn accepts_noun(&self, noun: &str) -> bool {
        self.nouns.iter().any(|candidate| *candidate == noun)
    }
}

/// A trial instance tracking which aspects have been solved.
pub struct AspectPuzzle {
    blueprint: &'static PuzzleBlueprint,
    completed: bool,
    completed_groups: BTreeSet<String>,
}

impl AspectPuzzle {
    pub fn new(blueprint: &'static PuzzleBlueprint) -> Self {
        Self {
            blueprint,
            completed: false,
            completed_groups: BTreeSet::new(),
        }
    }

    pub fn blueprint(&self) -> &'static PuzzleBlueprint {
        self.blueprint
    }
}

impl Puzzle for AspectPuzzle {
    fn id(&self) -> &str {
        self.blueprint.id
    }

    fn name(&self) -> &str {
        self.blueprint.name
    }

    fn is_active(&self, room_id: &str) -> bool {
        let room_id = room_id.to_lowercase();
        self.blueprint
            .aspects
            .iter()
            .any(|aspect| room_id.contains(aspect.room))
    }

    fn is_complete(&self) -> bool {
        self.completed
    }

    fn handle_command(&mut self, context: &PuzzleContext<'_>) -> PuzzleReply {
        if !self.is_active(context.room_id) {
            return PuzzleReply::ignored();
        }
        let command = context.command.to_lowercase();
        let words: Vec<&str> = command.split_whitespace().collect();
        if words.len() < 2 {
            return PuzzleReply::ignored();
        }
        let verb = words[0];
        let noun = words[words.len() - 1];
        let room_id = context.room_id.to_lowercase();
        let theme = themes::theme_for(
            context.world_id,
            ProgressionTracker::level_number(context.room_id),
        );

        for aspect in self.blueprint.aspects {
            if self.completed_groups.contains(aspect.name) {
                continue;
            }
            if !room_id.contains(aspect.room) {
                continue;
            }
            let verb_match = aspect.accepts_verb(verb);
            let noun_match = aspect.accepts_noun(noun);
            if verb_match && noun_match {
                self.completed_groups.insert(aspect.name.to_string());
                if self.completed_groups.len() == self.blueprint.aspects.len() {
                    self.completed = true;
                    return PuzzleReply::progressed(self.blueprint.completion_message);
                }
                let solved = aspect.name.replace('_', " ");
                return PuzzleReply::progressed(
                    self.blueprint.success_template.replace("{aspect}", &solved),
                );
            }
            if verb_match {
                return PuzzleReply::consumed(theme.verb_hint());
            }
            if noun_match {
                return PuzzleReply::consumed(theme.noun_hint());
            }
        }
        PuzzleReply::consumed("Nothing happens.")
    }

    fn completion_state(&self) -> PuzzleState {
        PuzzleState {
            completed: self.completed,
            completed_groups: self.completed_groups.clone(),
        }
    }

    fn restore(&mut self, state: &PuzzleState) {
        self.completed = state.completed;
        self.completed_groups = state.completed_groups.clone();
    }
}

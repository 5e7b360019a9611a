//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
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

//! Display Events
//!
//! The engine never writes to an output stream. Every processed command
//! yields an ordered list of [`OutputEvent`]s; the front end (terminal
//! loop or gateway) decides how to render them. Events are opaque text
//! with just enough shape for a renderer to style them.

use serde::{Deserialize, Serialize};

/// One unit of display output produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputEvent {
    /// Banner text rendered inside a decorated rule block, centered.
    /// May span multiple lines.
    Header { text: String },

    /// Narrative text rendered between horizontal rules.
    Block { text: String },

    /// A single plain line with breathing room around it.
    Line { text: String },

    /// A titled bullet list. Empty lists still render, with a
    /// placeholder entry, so the player sees the category exists.
    List { title: String, entries: Vec<String> },
}

impl OutputEvent {
    /// Banner event.
    pub fn header(text: impl Into<String>) -> Self {
        OutputEvent::Header { text: text.into() }
    }

    /// Ruled narrative block.
    pub fn block(text: impl Into<String>) -> Self {
        OutputEvent::Block { text: text.into() }
    }

    /// Plain line.
    pub fn line(text: impl Into<String>) -> Self {
        OutputEvent::Line { text: text.into() }
    }

    /// Titled bullet list.
    pub fn list(title: impl Into<String>, entries: Vec<String>) -> Self {
        OutputEvent::List {
            title: title.into(),
            entries,
        }
    }

    /// The raw text carried by this event, list entries joined by newlines.
    pub fn text(&self) -> String {
        match self {
            OutputEvent::Header { text }
            | OutputEvent::Block { text }
            | OutputEvent::Line { text } => text.clone(),
            OutputEvent::List { title, entries } => {
                let mut out = title.clone();
                for entry in entries {
                    out.push('\n');
                    out.push_str(entry);
                }
                out
            }
        }
    }
}

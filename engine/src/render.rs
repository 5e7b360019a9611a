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

//! Terminal rendering of [`OutputEvent`]s.
//!
//! The engine emits structured events; this module turns each one into
//! the exact line stream the terminal front end prints. Spacing is part
//! of the format: every event carries its own leading and trailing blank
//! lines, and the world list alone omits the trailing one because its
//! caller always follows it with another event.
//!
//! A handful of list titles carry pre-formatted entries (inventory lines,
//! NPC names, save slots); everything else is prettied up with
//! [`format_text`].

use shardrealms_common::OutputEvent;

/// Width of rules and centered banners.
pub const LINE_LENGTH: usize = 60;

/// A horizontal rule of one repeated character.
pub fn rule(fill: char) -> String {
    fill.to_string().repeat(LINE_LENGTH)
}

/// Center a line in [`LINE_LENGTH`] columns. Only the left padding is
/// emitted; trailing spaces would be invisible anyway. Lines already at
/// or over width pass through.
pub fn center(text: &str) -> String {
    let width = text.chars().count();
    if width >= LINE_LENGTH {
        return text.to_string();
    }
    let pad = (LINE_LENGTH - width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Turn an identifier-ish string into display text: underscores become
/// spaces, and every letter that opens a word is uppercased while the
/// rest are lowercased. Letters after any non-letter count as opening a
/// word, so `tezzeret's lab` becomes `Tezzeret'S Lab`.
pub fn format_text(text: &str) -> String {
    python_title(&text.replace('_', " "))
}

fn python_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render one event as its lines joined by newlines. The caller prints
/// the result with one more trailing newline.
pub fn render(event: &OutputEvent) -> String {
    let mut lines: Vec<String> = Vec::new();
    match event {
        OutputEvent::Header { text } => {
            lines.push(String::new());
            lines.push(rule('='));
            for line in text.split('\n') {
                lines.push(center(line));
            }
            lines.push(rule('='));
            lines.push(String::new());
        }
        OutputEvent::Block { text } => {
            lines.push(String::new());
            lines.push(rule('-'));
            lines.push(text.clone());
            lines.push(rule('-'));
            lines.push(String::new());
        }
        OutputEvent::Line { text } => {
            lines.push(String::new());
            lines.push(text.clone());
            lines.push(String::new());
        }
        OutputEvent::List { title, entries } => {
            lines.push(String::new());
            match title.as_str() {
                "Your inventory" => {
                    lines.push(rule('-'));
                    lines.push(format!("{title}:"));
                    lines.push(rule('-'));
                }
                "Available Worlds to Teleport To" => {
                    lines.push(rule('-'));
                    lines.push(title.clone());
                    lines.push(rule('-'));
                }
                _ => lines.push(format!("{title}:")),
            }
            if entries.is_empty() {
                let base = if title.eq_ignore_ascii_case("items")
                    || title.eq_ignore_ascii_case("exits")
                {
                    title.to_lowercase()
                } else {
                    title.clone()
                };
                lines.push(format!("  \u{2022} There are no {base} here."));
                lines.push(String::new());
            } else {
                for entry in entries {
                    lines.push(list_entry(title, entry));
                }
                if title != "Available Worlds to Teleport To" {
                    lines.push(String::new());
                }
            }
        }
    }
    lines.join("\n")
}

/// Indent and bullet one list entry. Entries that describe connections or
/// arrive pre-bulleted pass through untouched, as do the entries of the
/// titles whose producers format them (inventory, NPC names, save slots).
fn list_entry(title: &str, entry: &str) -> String {
    if entry.starts_with('\u{2022}') {
        return format!("  {entry}");
    }
    let lowered = entry.to_lowercase();
    if lowered.contains("leads to") || lowered.contains("portal to") {
        return format!("  \u{2022} {entry}");
    }
    if matches!(title, "Your inventory" | "NPCs" | "Available Saves") {
        return format!("  \u{2022} {entry}");
    }
    format!("  \u{2022} {}", format_text(entry))
}

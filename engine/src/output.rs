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

//! Ordered display-event collection for a single command turn.
//!
//! Command handlers never print. They push [`OutputEvent`]s onto an
//! [`OutputQueue`] in the order the player should read them, and the
//! embedding client (terminal renderer, gateway frame writer) decides how
//! to present each event.

use shardrealms_common::OutputEvent;

/// Accumulates display events emitted while processing one command.
#[derive(Debug, Default)]
pub struct OutputQueue {
    events: Vec<OutputEvent>,
}

impl OutputQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push a pre-built event.
    pub fn push(&mut self, event: OutputEvent) {
        self.events.push(event);
    }

    /// Push a decorated header event.
    pub fn header(&mut self, text: impl Into<String>) {
        self.events.push(OutputEvent::header(text));
    }

    /// Push a framed message block.
    pub fn block(&mut self, text: impl Into<String>) {
        self.events.push(OutputEvent::block(text));
    }

    /// Push a plain single message line.
    pub fn line(&mut self, text: impl Into<String>) {
        self.events.push(OutputEvent::line(text));
    }

    /// Push a titled bullet list.
    pub fn list(&mut self, title: impl Into<String>, entries: Vec<String>) {
        self.events.push(OutputEvent::list(title, entries));
    }

    /// Take all accumulated events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<OutputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing has been emitted this turn.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = OutputQueue::new();
        queue.header("Room: Somewhere");
        queue.list("Exits", vec!["North".to_string()]);
        queue.line("You picked up the lantern.");

        let events = queue.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], OutputEvent::Header { .. }));
        assert!(matches!(events[1], OutputEvent::List { .. }));
        assert!(matches!(events[2], OutputEvent::Line { .. }));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_resets_queue() {
        let mut queue = OutputQueue::new();
        queue.block("first turn");
        assert_eq!(queue.len(), 1);

        let first = queue.drain();
        assert_eq!(first.len(), 1);

        queue.line("second turn");
        let second = queue.drain();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].text(), "second turn");
    }
}

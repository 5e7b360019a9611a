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

//! Gateway Wire Protocol
//!
//! JSON frames exchanged between web clients and the gateway. One client
//! frame carries one raw command line; one server frame carries the
//! ordered display events that line produced.

use crate::display::OutputEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Frames sent by the client to the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// One raw command line, exactly as the player typed it.
    Command { input: String },

    /// Polite goodbye; the gateway drops the session.
    Disconnect,
}

/// Frames sent by the gateway to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// Session established; `events` holds the intro output.
    Welcome {
        session_id: Uuid,
        events: Vec<OutputEvent>,
    },

    /// Display events produced by one command.
    Output { events: Vec<OutputEvent> },

    /// The session ended (player quit or the engine finished the story).
    SessionEnded { reason: String },

    /// Protocol-level failure (unknown session, malformed frame).
    Error { message: String },
}

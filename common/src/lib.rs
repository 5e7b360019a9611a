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

//! Shardrealms Common Types and Protocols
//!
//! This crate defines shared types used across Shardrealms:
//! - Display events emitted by the engine for every processed command
//! - Gateway wire frames exchanged with web clients

pub mod display;
pub mod protocol;

pub use display::OutputEvent;
pub use protocol::{ClientFrame, ServerFrame};

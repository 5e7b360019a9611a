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

//! Shardrealms Gateway Library
//!
//! This library provides the web boundary for Shardrealms: the session
//! registry, the HTTP and websocket routes, and the embedded browser
//! client. One session owns one engine `Game`; the gateway feeds it
//! command lines and relays the display events it emits.

pub mod config;
pub mod context;
pub mod error;
pub mod registry;
pub mod routes;
pub mod webapp;
pub mod websocket;

// Re-export commonly used types
pub use context::GatewayContext;
pub use error::GatewayError;
pub use registry::{SessionEntry, SessionRegistry};

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

//! HTTP session routes.
//!
//! The REST surface mirrors the websocket one: a session is created,
//! fed one command line at a time, and torn down. Responses reuse the
//! wire frames so both transports speak the same shapes.

use crate::context::GatewayContext;
use crate::error::GatewayError;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use shardrealms_common::ServerFrame;
use uuid::Uuid;

/// One command line addressed to a live session.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub session_id: Uuid,
    pub input: String,
}

/// Create all session routes.
pub fn routes() -> Router<GatewayContext> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/session", post(create_session))
        .route("/session/{id}", delete(end_session))
        .route("/command", post(run_command))
}

async fn healthz() -> &'static str {
    "OK"
}

async fn create_session(State(context): State<GatewayContext>) -> Json<ServerFrame> {
    let mut game = context.new_game();
    let intro = game.start(context.default_world());
    let session_id = context.registry().create(game);
    Json(ServerFrame::Welcome {
        session_id,
        events: intro.events,
    })
}

async fn run_command(
    State(context): State<GatewayContext>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<ServerFrame>, GatewayError> {
    tracing::debug!(session = %request.session_id, input = %request.input, "command received");
    let game = context
        .registry()
        .get(request.session_id)
        .ok_or(GatewayError::UnknownSession(request.session_id))?;

    let turn = game.lock().await.process_command(&request.input);
    if turn.ended {
        context.registry().remove(request.session_id);
    }
    Ok(Json(ServerFrame::Output {
        events: turn.events,
    }))
}

async fn end_session(
    State(context): State<GatewayContext>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ServerFrame>, GatewayError> {
    if context.registry().remove(session_id) {
        Ok(Json(ServerFrame::SessionEnded {
            reason: "disconnected".to_string(),
        }))
    } else {
        Err(GatewayError::UnknownSession(session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardrealms_common::OutputEvent;
    use shardrealms_engine::WorldCatalog;
    use std::fs;
    use std::path::Path as FsPath;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn seed_content(root: &FsPath) {
        fs::write(
            root.join("worlds.json"),
            r#"{
                "demo": {
                    "name": "Demo",
                    "description": "A small proving ground.",
                    "starting_room": "level_one/hall"
                }
            }"#,
        )
        .unwrap();
        let rooms = root.join("demo/level_one/rooms");
        fs::create_dir_all(&rooms).unwrap();
        fs::write(
            rooms.join("hall.json"),
            r#"{
                "name": "Hall",
                "description": "A quiet hall.",
                "exits": {}
            }"#,
        )
        .unwrap();
    }

    fn test_context() -> (TempDir, GatewayContext) {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        seed_content(&content);
        let catalog = Arc::new(WorldCatalog::load(&content).unwrap());
        let context = GatewayContext::new(
            catalog,
            dir.path().join("saves"),
            5,
            Some("demo".to_string()),
        );
        (dir, context)
    }

    async fn open_session(context: &GatewayContext) -> (Uuid, Vec<OutputEvent>) {
        let Json(frame) = create_session(State(context.clone())).await;
        match frame {
            ServerFrame::Welcome { session_id, events } => (session_id, events),
            other => panic!("expected welcome frame, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_healthz() {
        assert_eq!(healthz().await, "OK");
    }

    #[tokio::test]
    async fn test_create_session_returns_intro() {
        let (_dir, context) = test_context();
        let (session_id, events) = open_session(&context).await;

        assert!(context.registry().get(session_id).is_some());
        assert!(
            events
                .iter()
                .any(|event| event.text().contains("Welcome to Shardrealms"))
        );
        assert!(
            events
                .iter()
                .any(|event| event.text().contains("Room: Hall"))
        );
    }

    #[tokio::test]
    async fn test_run_command_produces_events() {
        let (_dir, context) = test_context();
        let (session_id, _) = open_session(&context).await;

        let request = CommandRequest {
            session_id,
            input: "look".to_string(),
        };
        let Json(frame) = run_command(State(context.clone()), Json(request))
            .await
            .unwrap();

        match frame {
            ServerFrame::Output { events } => {
                assert!(
                    events
                        .iter()
                        .any(|event| event.text().contains("Room: Hall"))
                );
            }
            other => panic!("expected output frame, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_command_unknown_session() {
        let (_dir, context) = test_context();
        let missing = Uuid::new_v4();

        let request = CommandRequest {
            session_id: missing,
            input: "look".to_string(),
        };
        let err = run_command(State(context), Json(request))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::UnknownSession(id) if id == missing));
    }

    #[tokio::test]
    async fn test_quit_unregisters_the_session() {
        let (_dir, context) = test_context();
        let (session_id, _) = open_session(&context).await;

        let request = CommandRequest {
            session_id,
            input: "quit".to_string(),
        };
        run_command(State(context.clone()), Json(request))
            .await
            .unwrap();

        assert!(context.registry().get(session_id).is_none());
    }

    #[tokio::test]
    async fn test_end_session() {
        let (_dir, context) = test_context();
        let (session_id, _) = open_session(&context).await;

        let Json(frame) = end_session(State(context.clone()), Path(session_id))
            .await
            .unwrap();
        assert_eq!(
            frame,
            ServerFrame::SessionEnded {
                reason: "disconnected".to_string(),
            }
        );

        let err = end_session(State(context), Path(session_id))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::UnknownSession(id) if id == session_id));
    }
}

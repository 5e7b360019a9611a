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

//! WebSocket transport.
//!
//! One socket is one session: the game is created on upgrade, fed one
//! `ClientFrame` at a time, and unregistered when the socket closes.

use crate::context::GatewayContext;
use crate::error::GatewayError;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use shardrealms_common::{ClientFrame, OutputEvent, ServerFrame};
use uuid::Uuid;

/// WebSocket upgrade handler.
pub async fn handler(ws: WebSocketUpgrade, State(context): State<GatewayContext>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, context))
}

#[tracing::instrument(skip(socket, context))]
async fn handle_socket(mut socket: WebSocket, context: GatewayContext) {
    let mut game = context.new_game();
    let intro = game.start(context.default_world());
    let session_id = context.registry().create(game);

    tracing::info!(session = %session_id, "websocket session established");

    if let Err(err) = drive(&mut socket, &context, session_id, intro.events).await {
        tracing::debug!(session = %session_id, error = %err, "websocket closed with error");
    }

    context.registry().remove(session_id);
    tracing::info!(session = %session_id, "websocket session closed");
}

async fn drive(
    socket: &mut WebSocket,
    context: &GatewayContext,
    session_id: Uuid,
    intro: Vec<OutputEvent>,
) -> Result<(), GatewayError> {
    send_frame(
        socket,
        &ServerFrame::Welcome {
            session_id,
            events: intro,
        },
    )
    .await?;

    while let Some(message) = socket.recv().await {
        match message? {
            Message::Text(text) => {
                let frame = match serde_json::from_str::<ClientFrame>(text.as_str()) {
                    Ok(frame) => frame,
                    Err(err) => {
                        tracing::debug!(session = %session_id, error = %err, "undecodable client frame");
                        let reply = ServerFrame::Error {
                            message: format!("invalid frame: {err}"),
                        };
                        send_frame(socket, &reply).await?;
                        continue;
                    }
                };

                match frame {
                    ClientFrame::Command { input } => {
                        tracing::debug!(session = %session_id, input = %input, "command received");
                        let Some(game) = context.registry().get(session_id) else {
                            // The sweeper can drop an idle session while
                            // its socket stays open.
                            let reply = ServerFrame::SessionEnded {
                                reason: "session expired".to_string(),
                            };
                            send_frame(socket, &reply).await?;
                            break;
                        };

                        let turn = game.lock().await.process_command(&input);
                        let ended = turn.ended;
                        send_frame(
                            socket,
                            &ServerFrame::Output {
                                events: turn.events,
                            },
                        )
                        .await?;

                        if ended {
                            let reply = ServerFrame::SessionEnded {
                                reason: "goodbye".to_string(),
                            };
                            send_frame(socket, &reply).await?;
                            break;
                        }
                    }
                    ClientFrame::Disconnect => {
                        let reply = ServerFrame::SessionEnded {
                            reason: "disconnected".to_string(),
                        };
                        send_frame(socket, &reply).await?;
                        break;
                    }
                }
            }
            Message::Close(_) => break,
            // Ping and pong bookkeeping is handled by the transport.
            _ => {}
        }
    }

    Ok(())
}

async fn send_frame(socket: &mut WebSocket, frame: &ServerFrame) -> Result<(), GatewayError> {
    let json = serde_json::to_string(frame)?;
    socket.send(Message::Text(json.into())).await?;
    Ok(())
}

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

//! Gateway boundary errors.
//!
//! Game-level failures never surface here; the engine answers bad input
//! with display events. These errors cover the web boundary itself.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shardrealms_common::ServerFrame;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request names a session id the registry does not hold.
    #[error("unknown session: {0}")]
    UnknownSession(Uuid),

    /// A wire frame failed to encode or decode as JSON.
    #[error("invalid frame: {0}")]
    Frame(#[from] serde_json::Error),

    /// The websocket transport failed mid-conversation.
    #[error("websocket transport: {0}")]
    Socket(#[from] axum::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match self {
            GatewayError::UnknownSession(_) => StatusCode::NOT_FOUND,
            GatewayError::Frame(_) => StatusCode::BAD_REQUEST,
            GatewayError::Socket(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let frame = ServerFrame::Error {
            message: self.to_string(),
        };
        (status, Json(frame)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_session_is_not_found() {
        let session_id = Uuid::new_v4();
        let response = GatewayError::UnknownSession(session_id).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_frame_error_is_bad_request() {
        let err = serde_json::from_str::<ServerFrame>("not json").unwrap_err();
        let response = GatewayError::Frame(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_message_names_the_session() {
        let session_id = Uuid::new_v4();
        let message = GatewayError::UnknownSession(session_id).to_string();
        assert!(message.contains(&session_id.to_string()));
    }
}

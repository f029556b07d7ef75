//! # API Module
//!
//! JSON endpoints over [`crate::spotify::SpotifyClient`] for the web layer
//! that renders pages and stores reviews. Nothing here keeps state besides
//! the shared client.
//!
//! ## Endpoints
//!
//! - [`health`] - status, version and whether a token is cached
//! - [`search`] - `GET /search/{query}?type=track`
//! - [`track`] - `GET /music/{id}`, 404 with `{}` when the id is unknown
//! - [`album`] - `GET /albums/{id}`
//! - [`artist`] - `GET /artists/{id}`
//!
//! ## Errors
//!
//! Client errors become `{"error": "..."}` bodies: configuration problems are
//! a 500, a rejected token exchange or a network failure a 502, and a timeout
//! a 504.

mod health;
mod lookup;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::ClientError;

pub use health::health;
pub use lookup::{DEFAULT_SEARCH_TYPE, album, artist, search, track};

#[derive(Debug)]
pub struct ApiError(ClientError);

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ClientError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClientError::Authentication { .. }
            | ClientError::Transport(_)
            | ClientError::Decode(_) => StatusCode::BAD_GATEWAY,
            ClientError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self.0, %status, "request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

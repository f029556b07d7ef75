use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::spotify::SpotifyClient;

/// Reports the service version and whether a catalog token is cached yet.
///
/// Never triggers a token exchange.
pub async fn health(Extension(client): Extension<Arc<SpotifyClient>>) -> Json<Value> {
    let token_cached = client.token_state().await.access_token.is_some();

    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "token_cached": token_cached
    }))
}

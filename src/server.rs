use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, spotify::SpotifyClient};

pub fn router(client: Arc<SpotifyClient>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/search/{query}", get(api::search))
        .route("/music/{music_id}", get(api::track))
        .route("/albums/{album_id}", get(api::album))
        .route("/artists/{artist_id}", get(api::artist))
        .layer(Extension(client))
}

pub async fn start_api_server(client: Arc<SpotifyClient>, addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(client)).await?;
    Ok(())
}

use std::sync::Arc;

use crate::{error, info, server::start_api_server, spotify::SpotifyClient};

pub async fn serve(client: Arc<SpotifyClient>, addr: &str) {
    info!("Serving on http://{}", addr);
    if let Err(e) = start_api_server(client, addr).await {
        error!("Server stopped. Err: {}", e);
    }
}

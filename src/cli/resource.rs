use crate::{error, spotify::SpotifyClient, types::Lookup, warning};

use super::spinner;

/// Fetches a single resource and prints it as pretty JSON.
pub async fn resource(
    client: &SpotifyClient,
    resource_type: &str,
    resource_id: &str,
    api_version: Option<&str>,
) {
    let pb = spinner(format!("Fetching {resource_type}/{resource_id}..."));
    let result = client
        .fetch_resource(resource_id, resource_type, api_version)
        .await;
    pb.finish_and_clear();

    match result {
        Ok(Lookup::Found(body)) => match serde_json::to_string_pretty(&body) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Cannot render {}. Err: {}", resource_type, e),
        },
        Ok(Lookup::Unavailable { status, .. }) => warning!(
            "Nothing found for {}/{} (status {}).",
            resource_type,
            resource_id,
            status
        ),
        Err(e) => error!("Lookup failed. Err: {}", e),
    }
}

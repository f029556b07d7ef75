use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Map, Value};

use crate::{error::ClientError, types::SearchRow};

/// Builds the value of the Basic authorization header for the token exchange.
///
/// Returns the base64 encoding of `"<client_id>:<client_secret>"`. Missing or
/// empty values are a configuration error.
pub fn encode_client_credentials(
    client_id: Option<&str>,
    client_secret: Option<&str>,
) -> Result<String, ClientError> {
    match (present(client_id), present(client_secret)) {
        (Some(id), Some(secret)) => Ok(STANDARD.encode(format!("{id}:{secret}"))),
        _ => Err(ClientError::Configuration(
            "you have to set the client id and the client secret".to_string(),
        )),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn normalize_search_type(search_type: &str) -> String {
    search_type.to_lowercase()
}

/// Flattens a search response into table rows.
///
/// The provider nests results under the plural of the search type, e.g.
/// `{"tracks": {"items": [...]}}` for a `track` search. Items without an id
/// are skipped; an unknown shape yields no rows.
pub fn search_rows(result: &Map<String, Value>, search_type: &str) -> Vec<SearchRow> {
    let key = format!("{}s", normalize_search_type(search_type));
    let Some(items) = result
        .get(&key)
        .and_then(|section| section.get("items"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let id = item.get("id")?.as_str()?.to_string();
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let artists = item
                .get("artists")
                .and_then(Value::as_array)
                .map(|artists| {
                    artists
                        .iter()
                        .filter_map(|a| a.get("name").and_then(Value::as_str))
                        .take(3)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();

            Some(SearchRow { name, artists, id })
        })
        .collect()
}

use serde_json::{Map, Value, json};
use tracknotes::error::ClientError;
use tracknotes::types::SearchRow;
use tracknotes::utils::*;

// Helper function to turn a json! literal into the mapping the client returns
fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_encode_client_credentials() {
    let encoded = encode_client_credentials(Some("abc"), Some("xyz")).unwrap();
    assert_eq!(encoded, "YWJjOnh5eg==");

    let encoded = encode_client_credentials(Some("id1"), Some("secret1")).unwrap();
    assert_eq!(encoded, "aWQxOnNlY3JldDE=");
}

#[test]
fn test_encode_client_credentials_keeps_colons_in_secret() {
    let encoded = encode_client_credentials(Some("client"), Some("s3cr:et")).unwrap();
    assert_eq!(encoded, "Y2xpZW50OnMzY3I6ZXQ=");
}

#[test]
fn test_encode_client_credentials_requires_both_values() {
    for (id, secret) in [
        (None, Some("xyz")),
        (Some("abc"), None),
        (None, None),
        (Some(""), Some("xyz")),
        (Some("abc"), Some("")),
    ] {
        let result = encode_client_credentials(id, secret);
        assert!(
            matches!(result, Err(ClientError::Configuration(_))),
            "id={id:?} secret={secret:?} gave {result:?}"
        );
    }
}

#[test]
fn test_normalize_search_type() {
    assert_eq!(normalize_search_type("Track"), "track");
    assert_eq!(normalize_search_type("ALBUM"), "album");
    assert_eq!(normalize_search_type("Artist"), "artist");
    // only the case changes
    assert_eq!(normalize_search_type(" Track "), " track ");
}

#[test]
fn test_search_rows_from_track_search() {
    let result = as_map(json!({
        "tracks": {
            "items": [
                {
                    "id": "5jsw9uXEGuKyJzs0boZ1bT",
                    "name": "Stitches",
                    "artists": [{ "name": "Shawn Mendes" }]
                },
                {
                    "id": "2BDu4vU4wYJpBX0BJ25ZfU",
                    "name": "Stitches (Remix)",
                    "artists": [{ "name": "Shawn Mendes" }, { "name": "Someone Else" }]
                }
            ]
        }
    }));

    let rows = search_rows(&result, "Track");

    assert_eq!(
        rows,
        vec![
            SearchRow {
                name: "Stitches".to_string(),
                artists: "Shawn Mendes".to_string(),
                id: "5jsw9uXEGuKyJzs0boZ1bT".to_string(),
            },
            SearchRow {
                name: "Stitches (Remix)".to_string(),
                artists: "Shawn Mendes, Someone Else".to_string(),
                id: "2BDu4vU4wYJpBX0BJ25ZfU".to_string(),
            },
        ]
    );
}

#[test]
fn test_search_rows_artist_search_has_no_artist_column() {
    let result = as_map(json!({
        "artists": { "items": [{ "id": "a1", "name": "Shawn Mendes", "genres": ["pop"] }] }
    }));

    let rows = search_rows(&result, "artist");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Shawn Mendes");
    assert!(rows[0].artists.is_empty());
}

#[test]
fn test_search_rows_skips_items_without_id() {
    let result = as_map(json!({
        "albums": { "items": [{ "name": "No id" }, { "id": "b2", "name": "Has id" }] }
    }));

    let rows = search_rows(&result, "album");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "b2");
}

#[test]
fn test_search_rows_unknown_shape_is_empty() {
    assert!(search_rows(&Map::new(), "track").is_empty());

    let wrong_section = as_map(json!({ "albums": { "items": [{ "id": "x" }] } }));
    assert!(search_rows(&wrong_section, "track").is_empty());

    let not_an_array = as_map(json!({ "tracks": { "items": "nope" } }));
    assert!(search_rows(&not_an_array, "track").is_empty());
}

#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde_json::{Value, json};
use tracknotes::{
    management::Clock,
    spotify::{ClientOptions, SpotifyClient},
    types::Credentials,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, header, method, path},
};

pub const TOKEN_PATH: &str = "/api/token";

/// Clock that only moves when told to.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new() -> Arc<Self> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Arc::new(ManualClock(Mutex::new(start)))
    }

    pub fn advance(&self, secs: i64) {
        let mut now = self.0.lock().unwrap();
        *now += TimeDelta::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

pub fn options(server: &MockServer) -> ClientOptions {
    ClientOptions {
        token_url: format!("{}{}", server.uri(), TOKEN_PATH),
        api_url: server.uri(),
        timeout: Duration::from_secs(5),
    }
}

pub fn client(server: &MockServer) -> SpotifyClient {
    SpotifyClient::new(Credentials::new("id1", "secret1"), options(server)).unwrap()
}

pub fn client_with_clock(server: &MockServer, clock: Arc<ManualClock>) -> SpotifyClient {
    SpotifyClient::with_clock(Credentials::new("id1", "secret1"), options(server), clock).unwrap()
}

pub fn token_body(token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": token,
        "token_type": "Bearer",
        "expires_in": expires_in
    })
}

/// Token endpoint mock that checks the exchange is a well-formed
/// client-credentials request for `id1:secret1`.
pub fn token_mock(token: &str, expires_in: u64) -> Mock {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("authorization", "Basic aWQxOnNlY3JldDE="))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(token, expires_in)))
}

pub async fn token_requests(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == TOKEN_PATH)
        .count()
}

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Client id and secret used for the client-credentials exchange.
///
/// Both values are optional so a client can be built from whatever the
/// environment provides; absence is reported when the first exchange runs.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Body of a successful token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The cached bearer token and the instant it stops being usable.
#[derive(Debug, Clone)]
pub struct TokenState {
    pub access_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl TokenState {
    /// No token, already expired.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            access_token: None,
            expires_at: now,
        }
    }

    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.access_token.is_some() && now < self.expires_at
    }
}

/// Outcome of a resource or search request made with a valid token.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Map<String, Value>),
    Unavailable { status: StatusCode, body: String },
}

impl Lookup {
    /// Collapses an unavailable result into an empty mapping.
    pub fn into_mapping(self) -> Map<String, Value> {
        match self {
            Lookup::Found(map) => map,
            Lookup::Unavailable { .. } => Map::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct SearchRow {
    pub name: String,
    pub artists: String,
    pub id: String,
}

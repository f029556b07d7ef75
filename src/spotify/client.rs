use std::{sync::Arc, time::Duration};

use reqwest::{Client, RequestBuilder, Url};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    config,
    error::ClientError,
    management::{Clock, SystemClock, TokenManager},
    types::{Credentials, Lookup, TokenState},
    utils,
};

pub const DEFAULT_API_VERSION: &str = "v1";

/// Endpoints and limits for a [`SpotifyClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Token endpoint for the client-credentials exchange.
    pub token_url: String,
    /// Web API base without a version segment.
    pub api_url: String,
    /// Applied to every request, token exchange included.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            token_url: config::DEFAULT_TOKEN_URL.to_string(),
            api_url: config::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Spotify Web API client authenticated with the client-credentials flow.
///
/// Every request first asks the [`TokenManager`] for a valid token, which
/// triggers an exchange only when the cached one is missing or expired.
/// Non-2xx answers from resource and search endpoints are soft failures:
/// the mapping variants return an empty map, the `fetch_*` variants return
/// [`Lookup::Unavailable`]. Network failures and timeouts are always errors.
///
/// The client is `Send + Sync`; share it behind an `Arc`.
pub struct SpotifyClient {
    http: Client,
    api_url: Url,
    tokens: TokenManager,
}

impl SpotifyClient {
    pub fn new(credentials: Credentials, options: ClientOptions) -> Result<Self, ClientError> {
        Self::with_clock(credentials, options, Arc::new(SystemClock))
    }

    /// Builds a client from the process environment. See [`crate::config`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(config::credentials(), config::client_options())
    }

    pub fn with_clock(
        credentials: Credentials,
        options: ClientOptions,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(ClientError::Transport)?;

        let api_url = Url::parse(&options.api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                ClientError::Configuration(format!("invalid api url: {}", options.api_url))
            })?;

        let tokens = TokenManager::new(credentials, options.token_url, http.clone(), clock);

        Ok(SpotifyClient {
            http,
            api_url,
            tokens,
        })
    }

    /// Appends each segment to the API base, escaping `/`, `?`, `#` and `%`
    /// so an id can never leave its own path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Configuration(format!("invalid api url: {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_valid_token(&self) -> Result<String, ClientError> {
        self.tokens.get_valid_token().await
    }

    pub async fn perform_auth(&self) -> Result<(), ClientError> {
        self.tokens.perform_auth().await
    }

    pub async fn token_state(&self) -> TokenState {
        self.tokens.current_state().await
    }

    /// Fetches `<api>/<api_version>/<resource_type>/<resource_id>`.
    ///
    /// Returns an empty map when the provider answers with a non-2xx status.
    pub async fn get_resource(
        &self,
        resource_id: &str,
        resource_type: &str,
        api_version: Option<&str>,
    ) -> Result<Map<String, Value>, ClientError> {
        self.fetch_resource(resource_id, resource_type, api_version)
            .await
            .map(Lookup::into_mapping)
    }

    pub async fn fetch_resource(
        &self,
        resource_id: &str,
        resource_type: &str,
        api_version: Option<&str>,
    ) -> Result<Lookup, ClientError> {
        let token = self.tokens.get_valid_token().await?;
        let api_url = self.endpoint(&[
            api_version.unwrap_or(DEFAULT_API_VERSION),
            resource_type,
            resource_id,
        ])?;

        self.send(self.http.get(api_url).bearer_auth(token)).await
    }

    pub async fn get_album(&self, lookup_id: &str) -> Result<Map<String, Value>, ClientError> {
        self.get_resource(lookup_id, "albums", None).await
    }

    pub async fn get_artist(&self, lookup_id: &str) -> Result<Map<String, Value>, ClientError> {
        self.get_resource(lookup_id, "artists", None).await
    }

    pub async fn get_track(&self, lookup_id: &str) -> Result<Map<String, Value>, ClientError> {
        self.get_resource(lookup_id, "tracks", None).await
    }

    /// Searches the catalog. `search_type` is lower-cased before sending.
    ///
    /// Returns an empty map when the provider answers with a non-2xx status.
    pub async fn search(
        &self,
        query: &str,
        search_type: &str,
    ) -> Result<Map<String, Value>, ClientError> {
        self.fetch_search(query, search_type)
            .await
            .map(Lookup::into_mapping)
    }

    pub async fn fetch_search(&self, query: &str, search_type: &str) -> Result<Lookup, ClientError> {
        let token = self.tokens.get_valid_token().await?;
        let api_url = self.endpoint(&[DEFAULT_API_VERSION, "search"])?;
        let search_type = utils::normalize_search_type(search_type);

        let req = self
            .http
            .get(api_url)
            .query(&[("q", query), ("type", search_type.as_str())])
            .bearer_auth(token);

        self.send(req).await
    }

    async fn send(&self, req: RequestBuilder) -> Result<Lookup, ClientError> {
        let res = req.send().await?;
        let status = res.status();
        let url = res.url().clone();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(%status, %url, %body, "spotify request returned no result");
            return Ok(Lookup::Unavailable { status, body });
        }

        debug!(%status, %url, "spotify request succeeded");
        let json = res.json::<Map<String, Value>>().await?;
        Ok(Lookup::Found(json))
    }
}

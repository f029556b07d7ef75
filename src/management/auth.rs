use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{Client, header::AUTHORIZATION};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    error::ClientError,
    management::Clock,
    types::{Credentials, TokenResponse, TokenState},
    utils,
};

/// Owns the cached client-credentials token and refreshes it on demand.
///
/// The state lock is held across the validity check and the exchange, so
/// callers that find the token expired at the same time share one exchange.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    http: Client,
    clock: Arc<dyn Clock>,
    state: Mutex<TokenState>,
}

impl TokenManager {
    pub fn new(
        credentials: Credentials,
        token_url: String,
        http: Client,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = Mutex::new(TokenState::empty(clock.now()));
        TokenManager {
            credentials,
            token_url,
            http,
            clock,
            state,
        }
    }

    /// Returns the cached token, exchanging credentials first if it is
    /// missing or expired.
    ///
    /// At most one exchange runs per call. A failed exchange is returned as
    /// is and leaves the cached state untouched.
    pub async fn get_valid_token(&self) -> Result<String, ClientError> {
        let mut state = self.state.lock().await;
        if state.is_valid(self.clock.now()) {
            if let Some(token) = &state.access_token {
                return Ok(token.clone());
            }
        }

        let fresh = self.request_token().await?;
        let token = fresh.access_token.clone().unwrap_or_default();
        *state = fresh;
        Ok(token)
    }

    /// Runs the exchange unconditionally and replaces the cached token.
    pub async fn perform_auth(&self) -> Result<(), ClientError> {
        let mut state = self.state.lock().await;
        *state = self.request_token().await?;
        Ok(())
    }

    pub async fn current_state(&self) -> TokenState {
        self.state.lock().await.clone()
    }

    async fn request_token(&self) -> Result<TokenState, ClientError> {
        let encoded = utils::encode_client_credentials(
            self.credentials.client_id.as_deref(),
            self.credentials.client_secret.as_deref(),
        )?;

        debug!(url = %self.token_url, "requesting client credentials token");
        let res = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {encoded}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(%status, %body, "token endpoint rejected client credentials");
            return Err(ClientError::Authentication { status, body });
        }

        let token: TokenResponse = res.json().await?;
        let now = self.clock.now();
        debug!(expires_in = token.expires_in, "obtained access token");

        Ok(TokenState {
            access_token: Some(token.access_token),
            expires_at: expiry_after(now, token.expires_in),
        })
    }
}

fn expiry_after(now: DateTime<Utc>, expires_in: u64) -> DateTime<Utc> {
    let secs = i64::try_from(expires_in).unwrap_or(i64::MAX);
    TimeDelta::try_seconds(secs)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_now_plus_expires_in() {
        let now = Utc::now();
        assert_eq!(expiry_after(now, 3600), now + TimeDelta::seconds(3600));
    }

    #[test]
    fn huge_expiry_saturates() {
        let now = Utc::now();
        assert_eq!(expiry_after(now, u64::MAX), DateTime::<Utc>::MAX_UTC);
    }
}

//! # Spotify Integration Module
//!
//! Client for the parts of the Spotify Web API that need no user consent:
//! catalog lookups by id and catalog search. Authentication uses the OAuth
//! client-credentials flow, so a single id/secret pair configured for the
//! process is all that is needed.
//!
//! ## Architecture
//!
//! ```text
//! Callers (CLI, HTTP surface, embedding web app)
//!          ↓
//! SpotifyClient (resource lookup, search, soft failures)
//!          ↓
//! TokenManager (cached token, single-flight refresh)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API / Accounts service
//! ```
//!
//! ## Token Lifecycle
//!
//! The token starts out missing. The first request triggers
//! `POST /api/token` with `grant_type=client_credentials` and a Basic
//! authorization header built from the credentials. The returned token is
//! cached until `now + expires_in`; the next request after that instant
//! exchanges again. A refresh is never attempted ahead of time and a failed
//! exchange is never retried.
//!
//! ## API Coverage
//!
//! - `GET /{version}/{resource_type}/{id}` - albums, artists, tracks and any
//!   other resource type the provider exposes
//! - `GET /v1/search?q=..&type=..` - catalog search
//! - `POST /api/token` - client-credentials exchange
//!
//! ## Error Types
//!
//! - [`crate::error::ClientError`] - configuration, authentication,
//!   transport, timeout and decoding failures
//! - [`crate::types::Lookup::Unavailable`] - provider answered with a
//!   non-2xx status; collapsed into an empty map by the mapping methods
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = SpotifyClient::from_env()?;
//! let album = client.get_album("41zMFsCjcGenYKVJYUXU2n").await?;
//! let hits = client.search("Stitches", "Track").await?;
//! ```

mod client;

pub use client::ClientOptions;
pub use client::DEFAULT_API_VERSION;
pub use client::SpotifyClient;

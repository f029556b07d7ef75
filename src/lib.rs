//! tracknotes library
//!
//! Catalog search and lookups against the Spotify Web API for a small
//! music-review site. The core is [`spotify::SpotifyClient`], which
//! authenticates with the client-credentials flow, caches the bearer token and
//! refreshes it when it expires.
//!
//! # Modules
//!
//! - `api` - JSON endpoints over the client
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Client error type
//! - `management` - Token lifecycle and time source
//! - `server` - HTTP server wiring for the endpoints
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tracknotes::{config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> tracknotes::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::from_env()?;
//!     let album = client.get_album("41zMFsCjcGenYKVJYUXU2n").await?;
//!     println!("{:?}", album.get("name"));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed-error result used by the binary and the server plumbing.
///
/// Library operations on the client return [`error::ClientError`] instead;
/// it converts into this alias with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Serving on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only for failures the binary cannot continue from; library code returns
/// errors instead.
///
/// ```
/// error!("Search failed. Err: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr and carries on.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

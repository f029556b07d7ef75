//! # CLI Module
//!
//! User-facing commands of the `tracknotes` binary. Each command takes the
//! shared [`crate::spotify::SpotifyClient`], shows a spinner while the request
//! is in flight and reports through the colored status macros.
//!
//! - [`search`] - catalog search rendered as a table
//! - [`resource`] - album, artist, track or any other resource as JSON
//! - [`serve`] - JSON HTTP surface for the web layer

mod resource;
mod search;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use resource::resource;
pub use search::search;
pub use serve::serve;

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

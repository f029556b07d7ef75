mod auth;
mod clock;

pub use auth::TokenManager;
pub use clock::Clock;
pub use clock::SystemClock;

pub mod config;
pub mod detail;
pub mod error;
pub mod http;
pub mod media;
pub mod models;
pub mod notify;
pub mod render;
pub mod services; // backend contracts + in-memory backend
pub mod session;

// Re-export commonly used items for tests / embedders
pub use config::ClientConfig;
pub use detail::{Outcome, RecipeDetail};
pub use error::{DetailError, DetailResult};
pub use http::HttpBackend;
pub use session::Session;

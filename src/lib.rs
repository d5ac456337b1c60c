//! # snip
//!
//! A small URL shortener: `POST /shorten` stores a URL under a random UUID for
//! 24 hours, `GET /s/{id}` redirects to it. Expiry is left to Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The short link entity and the store trait
//! - **Application Layer** ([`application`]) - Shorten/resolve rules
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, payloads, middleware
//! - **Web Layer** ([`web`]) - Landing page
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URI="redis://localhost:6379/0"
//! export APP_PORT=8080
//!
//! cargo run
//!
//! curl -d url=https://example.com -H 'Host: short.ly' localhost:8080/shorten
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{LINK_TTL, ShortLink};
    pub use crate::domain::repositories::{LinkStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
    pub use crate::utils::short_url::Scheme;
}

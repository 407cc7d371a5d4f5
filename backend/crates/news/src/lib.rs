//! News Proxy Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Category normalization, headline queries, provider trait
//! - `application/` - Fetch use case and configuration
//! - `infra/` - NewsAPI HTTP client
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Behavior
//! - Site section names (`cricket`, `movies`, ...) map onto provider categories
//! - A `city` turns the request into a keyword search; an empty result is
//!   retried once as the `general` feed
//! - Provider failures are relayed with the provider's status code

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::NewsConfig;
pub use error::{NewsError, NewsResult};
pub use infra::newsapi::NewsApiClient;
pub use presentation::router::{news_router, news_router_generic};

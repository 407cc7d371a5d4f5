//! Application Layer
//!
//! Use cases and configuration.

pub mod config;
pub mod fetch_news;

// Re-exports
pub use config::NewsConfig;
pub use fetch_news::{FetchNewsInput, FetchNewsUseCase};

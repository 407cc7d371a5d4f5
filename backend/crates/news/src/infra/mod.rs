//! Infrastructure Layer
//!
//! Provider implementations.

pub mod newsapi;

pub use newsapi::NewsApiClient;

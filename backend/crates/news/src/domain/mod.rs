//! Domain Layer
//!
//! Category normalization, headline queries, articles and the provider trait.

pub mod article;
pub mod category;
pub mod provider;
pub mod query;

// Re-exports
pub use article::{Article, ArticleSource};
pub use category::NewsCategory;
pub use provider::NewsProvider;
pub use query::{HeadlineQuery, HeadlineRequest};

//! Provider Trait
//!
//! Interface to the upstream headline service. The HTTP implementation lives
//! in the infrastructure layer.

use crate::domain::article::Article;
use crate::domain::query::HeadlineRequest;
use crate::error::NewsResult;

#[trait_variant::make(NewsProvider: Send)]
pub trait LocalNewsProvider {
    /// Fetch one page of headlines
    ///
    /// A provider that answers without an `articles` list yields an empty
    /// vector, not an error.
    async fn fetch_headlines(&self, request: &HeadlineRequest) -> NewsResult<Vec<Article>>;
}

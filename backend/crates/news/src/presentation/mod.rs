//! Presentation Layer
//!
//! HTTP handler, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::NewsAppState;
pub use router::{news_router, news_router_generic};

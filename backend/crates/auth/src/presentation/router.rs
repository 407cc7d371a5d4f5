//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGuardState, require_bearer_token};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> AuthResult<Router> {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// `/signup` and `/login` are open; `/{id}` requires a bearer token.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> AuthResult<Router>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config)?;
    let guard = AuthGuardState {
        tokens: state.tokens.clone(),
    };

    let protected = Router::new()
        .route(
            "/{id}",
            get(handlers::get_profile::<R>).put(handlers::update_profile::<R>),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_bearer_token));

    Ok(Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state))
}

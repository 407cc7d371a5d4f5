//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::{
    GetProfileUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, UpdateProfileInput,
    UpdateProfileUseCase,
};
use crate::domain::entity::identity::AuthenticatedUser;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, LoginRequest, SignUpRequest, UpdateProfileRequest, UserProfileResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenSigner>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    /// Fails only if the configured token secret is unusable
    pub fn new(repo: R, config: AuthConfig) -> AuthResult<Self> {
        let tokens = TokenSigner::new(&config.token_secret)?;

        Ok(Self {
            repo: Arc::new(repo),
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        })
    }
}

// ============================================================================
// Sign Up / Login
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
        city: req.city,
        state: req.state,
    };

    let grant = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(grant, "Registration successful")),
    ))
}

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let grant = use_case.execute(input).await?;

    Ok(Json(AuthResponse::new(grant, "Login successful")))
}

// ============================================================================
// Profile (behind the bearer guard)
// ============================================================================

/// GET /api/auth/{id}
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AuthResult<Json<UserProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    tracing::debug!(caller = %caller.id, target = %id, "Profile read");

    let use_case = GetProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&id).await?;

    Ok(Json(profile.into()))
}

/// PUT /api/auth/{id}
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UserProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    tracing::debug!(caller = %caller.id, target = %id, "Profile update");

    let use_case = UpdateProfileUseCase::new(state.repo.clone());

    let input = UpdateProfileInput {
        name: req.name,
        email: req.email,
    };

    let profile = use_case.execute(&id, input).await?;

    Ok(Json(profile.into()))
}

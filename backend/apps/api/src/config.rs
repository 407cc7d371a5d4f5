//! Server Configuration
//!
//! Everything is read from the environment once at startup (`.env` is loaded
//! first by `main`).

use std::env;

use anyhow::{Context, bail};
use auth::AuthConfig;
use news::NewsConfig;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";

/// Where accounts live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Postgres(String),
    /// `DATABASE_URL=memory`; lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub storage: Storage,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub news: NewsConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `allow_random_secret` lets a missing `JWT_SECRET` fall back to a
    /// per-process random secret (debug builds only)
    fn from_lookup(
        get: impl Fn(&str) -> Option<String>,
        allow_random_secret: bool,
    ) -> anyhow::Result<Self> {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let storage = match get("DATABASE_URL") {
            Some(url) if url.trim().eq_ignore_ascii_case("memory") => Storage::Memory,
            Some(url) => Storage::Postgres(url),
            None => bail!("DATABASE_URL must be set in environment (use `memory` for no database)"),
        };

        let mut auth = match get("JWT_SECRET") {
            Some(secret) => AuthConfig::new(secret.into_bytes()),
            None if allow_random_secret => {
                tracing::warn!("JWT_SECRET not set, using a random secret for this process");
                AuthConfig::with_random_secret()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };
        auth.password_pepper = get("PASSWORD_PEPPER").map(|p| p.into_bytes().into());
        auth.hide_login_failure_reason = match get("HIDE_LOGIN_FAILURE_REASON") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("HIDE_LOGIN_FAILURE_REASON must be a boolean, got {raw:?}"))?,
            None => false,
        };

        let mut news = NewsConfig::default();
        news.api_key = get("NEWS_API_KEY");
        if news.api_key.is_none() {
            tracing::warn!("NEWS_API_KEY not set, /api/news will answer with a configuration error");
        }
        if let Some(base_url) = get("NEWS_API_BASE_URL") {
            news.base_url = base_url;
        }

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            port,
            storage,
            frontend_origins,
            auth,
            news,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)], allow_random_secret: bool) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned(), allow_random_secret)
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "memory"), ("JWT_SECRET", "s3cret")], false).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.storage, Storage::Memory);
        assert_eq!(config.frontend_origins, vec!["http://localhost:3000".to_string()]);
        assert_eq!(config.auth.token_secret.as_slice(), b"s3cret");
        assert!(!config.auth.hide_login_failure_reason);
        assert!(config.auth.password_pepper.is_none());
        assert!(config.news.api_key.is_none());
        assert_eq!(config.news.base_url, news::application::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_full_environment() {
        let config = load(
            &[
                ("PORT", "8080"),
                ("DATABASE_URL", "postgres://localhost/app"),
                ("JWT_SECRET", "s3cret"),
                ("PASSWORD_PEPPER", "pepper"),
                ("NEWS_API_KEY", "key"),
                ("NEWS_API_BASE_URL", "http://127.0.0.1:9999/v2/top-headlines"),
                ("FRONTEND_ORIGINS", "http://a.example, http://b.example"),
                ("HIDE_LOGIN_FAILURE_REASON", "true"),
            ],
            false,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.storage,
            Storage::Postgres("postgres://localhost/app".to_string())
        );
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert!(config.auth.hide_login_failure_reason);
        assert_eq!(config.news.api_key(), Some("key"));
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_missing_database_url() {
        assert!(load(&[("JWT_SECRET", "s3cret")], false).is_err());
    }

    #[test]
    fn test_secret_required_without_fallback() {
        assert!(load(&[("DATABASE_URL", "memory")], false).is_err());

        let config = load(&[("DATABASE_URL", "memory")], true).unwrap();
        assert_eq!(config.auth.token_secret.len(), 32);
    }

    #[test]
    fn test_invalid_values() {
        let base = [("DATABASE_URL", "memory"), ("JWT_SECRET", "s")];
        assert!(load(&[base[0], base[1], ("PORT", "eighty")], false).is_err());
        assert!(load(&[base[0], base[1], ("HIDE_LOGIN_FAILURE_REASON", "maybe")], false).is_err());
    }
}

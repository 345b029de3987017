//! Base URLs for the two backends.
//!
//! Resolution order: runtime `init_api_config_js()` call, then the
//! compile-time `API_BASE_URL` / `AUTH_BASE_URL` env vars, then the local
//! development defaults.

use std::sync::RwLock;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL};
use crate::error::ApiError;

/// API route configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Result<Self, ApiError> {
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::Config(format!("URL base inválida: '{}'", url)));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Data API from `API_BASE_URL`, else the local default.
    pub fn api_from_env() -> Self {
        Self::env_or_default(option_env!("API_BASE_URL"), DEFAULT_API_BASE_URL)
    }

    /// Auth API from `AUTH_BASE_URL`, else the local default.
    pub fn auth_from_env() -> Self {
        Self::env_or_default(option_env!("AUTH_BASE_URL"), DEFAULT_AUTH_BASE_URL)
    }

    fn env_or_default(env: Option<&str>, fallback: &str) -> Self {
        env.and_then(|url| Self::from_url(url).ok()).unwrap_or_else(|| Self {
            base_url: fallback.to_string(),
        })
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path such as `/Aluno/1`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
    static ref AUTH_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

fn read_or(lock: &RwLock<Option<ApiConfig>>, fallback: fn() -> ApiConfig) -> ApiConfig {
    lock.read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_else(fallback)
}

pub fn api_config() -> ApiConfig {
    read_or(&API_CONFIG, ApiConfig::api_from_env)
}

pub fn auth_config() -> ApiConfig {
    read_or(&AUTH_CONFIG, ApiConfig::auth_from_env)
}

/// Install both configs. Called once at start-up.
pub fn init_api_config(api: ApiConfig, auth: ApiConfig) -> Result<(), ApiError> {
    let mut api_slot = API_CONFIG
        .write()
        .map_err(|_| ApiError::Config("API_CONFIG lock poisoned".to_string()))?;
    *api_slot = Some(api);
    drop(api_slot);

    let mut auth_slot = AUTH_CONFIG
        .write()
        .map_err(|_| ApiError::Config("AUTH_CONFIG lock poisoned".to_string()))?;
    *auth_slot = Some(auth);
    Ok(())
}

/// Runtime override from the hosting page:
///
/// ```js
/// init_api_config_js("https://api.wegogym.app", "https://auth.wegogym.app");
/// ```
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str, auth_base_url: &str) -> Result<(), JsValue> {
    let api = ApiConfig::from_url(api_base_url)?;
    let auth = ApiConfig::from_url(auth_base_url)?;
    init_api_config(api, auth)?;
    crate::debug_log!("API config: {} / {}", api_base_url, auth_base_url);
    Ok(())
}

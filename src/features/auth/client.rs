//! Client for the external authentication API. The [`AuthApi`] trait is the
//! seam between the submit flows and the network; the browser build talks HTTP
//! through [`HttpAuthApi`] while tests script responses.

use crate::{
    app_lib::AppError,
    features::auth::types::{Credentials, LoginResponse},
};

/// Paths relative to the configured API base.
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Operations offered by the authentication API.
///
/// Each call issues exactly one request and never retries.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchanges credentials for an access token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError>;

    /// Creates an account; no token is issued.
    async fn register(&self, credentials: &Credentials) -> Result<(), AppError>;
}

/// HTTP implementation rooted at the configured API base URL.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Builds a client from [`AppConfig`](crate::app_lib::config::AppConfig).
    pub fn from_config() -> Self {
        Self::new(crate::app_lib::config::AppConfig::load().api_base_url)
    }

    fn url(&self, path: &str) -> String {
        crate::app_lib::api::build_url_with_base(&self.base_url, path)
    }
}

#[cfg(target_arch = "wasm32")]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        crate::app_lib::api::post_json_response(&self.url(LOGIN_PATH), credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        crate::app_lib::api::post_json(&self.url(REGISTER_PATH), credentials).await
    }
}

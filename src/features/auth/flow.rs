//! Submit handlers behind the login and register forms. Each submit issues a
//! single API request and resolves to either the route to navigate to or the
//! message to show under the form. No client-side field validation happens
//! here; the API owns credential rules.

use crate::{
    app_lib::{AppError, paths},
    features::auth::{client::AuthApi, store::SessionContext, types::Credentials},
};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Register failed";
pub const NETWORK_FAILED: &str = "Unable to reach the server. Please try again.";

/// Posts credentials to the login endpoint and stores the issued token.
///
/// # Errors
///
/// Returns the message to display: the server's own message when it sent one,
/// a network message when no response arrived, otherwise [`LOGIN_FAILED`].
/// Nothing is stored on failure.
pub async fn submit_login<A: AuthApi>(
    api: &A,
    session: &SessionContext,
    credentials: &Credentials,
) -> Result<&'static str, String> {
    let response = api
        .login(credentials)
        .await
        .map_err(|err| failure_message(&err, LOGIN_FAILED))?;

    let Some(token) = response.access_token.filter(|token| !token.is_empty()) else {
        tracing::warn!("login succeeded without an access token");
        return Err(LOGIN_FAILED.to_string());
    };

    session.save_token(&token);
    tracing::info!("login succeeded");
    Ok(paths::DASHBOARD)
}

/// Posts credentials to the register endpoint. The session is left untouched.
///
/// # Errors
///
/// Returns the message to display, following the same rules as
/// [`submit_login`] with [`REGISTER_FAILED`] as the fallback.
pub async fn submit_register<A: AuthApi>(
    api: &A,
    credentials: &Credentials,
) -> Result<&'static str, String> {
    api.register(credentials)
        .await
        .map_err(|err| failure_message(&err, REGISTER_FAILED))?;

    tracing::info!("registration succeeded");
    Ok(paths::LOGIN)
}

/// Maps a request error to the string shown on the page.
pub fn failure_message(err: &AppError, fallback: &str) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }

    match err {
        AppError::Network(_) => NETWORK_FAILED.to_string(),
        _ => {
            tracing::debug!(error = %err, "showing fallback message");
            fallback.to_string()
        }
    }
}

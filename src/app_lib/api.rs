//! HTTP helpers for the JSON authentication API with consistent error shaping.
//! Feature clients use these helpers to avoid duplicating request setup. The
//! helpers never log request bodies, which carry passwords.

use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, Response};
#[cfg(target_arch = "wasm32")]
use serde::{Serialize, de::DeserializeOwned};

/// Failure body returned by the API. Validation failures may carry a list.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<ErrorMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Text(String),
    List(Vec<String>),
}

/// Posts JSON and parses a JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json(url, body).await?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Posts JSON and ignores any success body.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), AppError> {
    let response = send_json(url, body).await?;

    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

#[cfg(target_arch = "wasm32")]
async fn send_json<B: Serialize>(url: &str, body: &B) -> Result<Response, AppError> {
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    request.send().await.map_err(|err| {
        tracing::warn!(%url, "request did not complete");
        AppError::Network(format!("Unable to reach the server: {err}"))
    })
}

#[cfg(target_arch = "wasm32")]
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status, "request rejected");
    AppError::Http {
        status,
        message: server_message(&body),
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Extracts the `message` field from an error body exactly as sent. Returns
/// `None` when the body is not JSON or the message is missing or empty.
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        ErrorMessage::Text(text) => text,
        ErrorMessage::List(items) => items.join(", "),
    };

    (!message.is_empty()).then_some(message)
}

//! JSON helpers over gloo-net with a typed transport error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Transport failure, split by where the request died.
///
/// `Http` is a server-rejected request (a status line came back);
/// `Client` is a client-side failure (network, serialization) with no
/// server response at all. Callers match exhaustively: the two kinds
/// drive different recovery paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{status}: {message}")]
    Http { status: u16, message: String },
    #[error("{message}")]
    Client { message: String },
}

impl ApiError {
    fn client(err: impl std::fmt::Display) -> Self {
        Self::Client {
            message: err.to_string(),
        }
    }
}

/// GET `path` and decode a JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ApiError::client)?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    response.json::<T>().await.map_err(ApiError::client)
}

/// POST `body` as JSON to `path` and decode a JSON body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(ApiError::client)?
        .send()
        .await
        .map_err(ApiError::client)?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    response.json::<T>().await.map_err(ApiError::client)
}

/// DELETE `path`, ignoring any response body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = gloo_net::http::Request::delete(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ApiError::client)?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    Ok(())
}

/// Server error payloads carry `{ "message": ... }`; fall back to the
/// HTTP status text when the body is absent or not JSON.
async fn rejection(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body["message"].as_str().map(str::to_string))
        .unwrap_or(status_text);
    ApiError::Http { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_formats_status_and_message() {
        let err = ApiError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "403: Forbidden");
    }

    #[test]
    fn client_error_is_just_the_message() {
        let err = ApiError::Client {
            message: "Network down".to_string(),
        };
        assert_eq!(err.to_string(), "Network down");
    }
}

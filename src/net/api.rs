//! REST plumbing and the authentication gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! session's bearer credential attached to every request. Server-side (SSR):
//! stubs returning an error since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`; the error carries the
//! backend's `message` field when one is present so forms can show it
//! inline. Nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{Session, SigninRequest, SignupRequest};
use crate::util::session_store;

/// A failed REST call with a user-displayable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status, when the failure came from a response.
    pub status: Option<u16>,
    /// Message for inline display.
    pub message: String,
}

impl ApiError {
    #[cfg(not(feature = "hydrate"))]
    pub(crate) fn unavailable() -> Self {
        Self {
            status: None,
            message: "not available on server".to_owned(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Extract the display message for a failed response.
///
/// Prefers the error payload's `message` field, then the raw body text,
/// then a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_owned();
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_owned();
    }
    format!("request failed: {status}")
}

/// `Authorization` header value for a session.
#[cfg(any(test, feature = "hydrate"))]
fn authorization_value(session: &Session) -> String {
    format!("{} {}", session.token_type, session.token)
}

#[cfg(feature = "hydrate")]
fn with_auth(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match session_store::load() {
        Some(session) => request.header("Authorization", &authorization_value(&session)),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(err: &gloo_net::Error) -> ApiError {
    ApiError {
        status: None,
        message: err.to_string(),
    }
}

#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError {
        status: Some(status),
        message: error_message(status, &body),
    }
}

/// GET `path`, decoding a JSON body.
#[cfg(feature = "hydrate")]
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_auth(gloo_net::http::Request::get(path))
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| transport_error(&e))
}

/// POST `body` to `path`, decoding a JSON response.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = with_auth(gloo_net::http::Request::post(path))
        .json(body)
        .map_err(|e| transport_error(&e))?
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| transport_error(&e))
}

/// POST `body` to `path`, ignoring the response body.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_unit<B: serde::Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = with_auth(gloo_net::http::Request::post(path))
        .json(body)
        .map_err(|e| transport_error(&e))?
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    Ok(())
}

/// PUT `body` to `path`, ignoring the response body.
#[cfg(feature = "hydrate")]
pub(crate) async fn put_unit<B: serde::Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = with_auth(gloo_net::http::Request::put(path))
        .json(body)
        .map_err(|e| transport_error(&e))?
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    Ok(())
}

/// DELETE `path`, ignoring the response body.
#[cfg(feature = "hydrate")]
pub(crate) async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let resp = with_auth(gloo_net::http::Request::delete(path))
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    Ok(())
}

/// Register a new account via `POST /auth/signup`.
///
/// Backend failures (validation errors, duplicate username) propagate
/// unchanged to the caller; there is no local retry.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the backend's message on failure.
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_unit("/auth/signup", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Exchange credentials via `POST /auth/signin`.
///
/// A token-bearing response body is persisted as the durable session before
/// this returns, so storage and the resolved value always agree.
///
/// # Errors
///
/// Returns an [`ApiError`] on bad credentials or transport failure; the
/// durable session is left untouched in that case.
pub async fn signin(request: &SigninRequest) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let session: Session = post_json("/auth/signin", request).await?;
        if !session.token.is_empty() {
            session_store::save(&session);
        }
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Log out by clearing the durable session.
///
/// Purely local; there is no server-side token revocation in this design.
pub fn logout() {
    session_store::clear();
}

use std::collections::HashMap;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};

use crate::config::BasicAuth;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("unsupported HTTP method `{0}`")]
    Method(String),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends the signed payload as an authenticated HTTP request.
///
/// A non-2xx status is an error; the response body is read and carried
/// in the error for diagnostics. `Content-Type: application/json` is
/// set unless the configured headers already provide one.
pub async fn send_request(
    client: &Client,
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    payload: String,
    auth: &BasicAuth,
) -> Result<HttpResponse, TransportError> {
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| TransportError::Method(method.to_string()))?;

    let mut request = client
        .request(method, url)
        .basic_auth(&auth.username, Some(auth.password.expose()))
        .body(payload);
    if !headers.keys().any(|name| name.eq_ignore_ascii_case("content-type")) {
        request = request.header(CONTENT_TYPE, "application/json");
    }
    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let response = request
        .send()
        .await
        .map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;

    if !status.is_success() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status,
            body,
        });
    }

    tracing::info!(%status, response_bytes = body.len(), "request completed");
    Ok(HttpResponse { status, body })
}

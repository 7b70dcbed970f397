//! HTTP client for the Bitnob API.
//!
//! One authenticated JSON POST per call, no retries — a failed attempt is a
//! final failure for the workflow step that made it.

use serde::Serialize;

use crate::error::PayoutError;

/// Upper bound for a single provider call. A hung connection becomes an
/// [`PayoutError::Http`] after this long.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// POST `payload` to `url` with bearer authentication and return the parsed
/// JSON body.
///
/// Responses with status >= 400 become [`PayoutError::Upstream`] carrying the
/// status code and the raw response text.
pub async fn post<T: Serialize>(
    client: &reqwest::Client,
    url: &str,
    secret_key: &str,
    payload: &T,
) -> Result<serde_json::Value, PayoutError> {
    let resp = client
        .post(url)
        .header("Authorization", format!("Bearer {secret_key}"))
        .header("Content-Type", "application/json")
        .timeout(REQUEST_TIMEOUT)
        .json(payload)
        .send()
        .await
        .map_err(|e| PayoutError::Http(format!("request to {url} failed: {e}")))?;

    let status = resp.status();
    if status.as_u16() >= 400 {
        let body = resp.text().await.unwrap_or_default();
        return Err(PayoutError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| PayoutError::BadResponse(format!("invalid JSON from provider: {e}")))
}

//! Shared plumbing for the JSON model sidecars

use lingo_bot_core::{ModelError, Stage};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

pub(crate) fn build_client(timeout_ms: u64) -> Result<Client, ModelError> {
    Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| ModelError::Unavailable(format!("Failed to create HTTP client: {}", e)))
}

/// Base URL without trailing slashes
pub(crate) fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim_end_matches('/').to_string()
}

fn request_error(stage: Stage, timeout_ms: u64, err: reqwest::Error) -> ModelError {
    if err.is_timeout() {
        ModelError::Timeout {
            stage,
            ms: timeout_ms,
        }
    } else if err.is_connect() {
        ModelError::Unavailable(format!("{} service unreachable: {}", stage, err))
    } else if err.is_decode() {
        ModelError::InvalidResponse(format!("{} response: {}", stage, err))
    } else {
        ModelError::Inference(format!("{} request failed: {}", stage, err))
    }
}

/// POST `body` as JSON and parse the JSON answer
pub(crate) async fn post_json<Req, Resp>(
    client: &Client,
    url: &str,
    body: &Req,
    stage: Stage,
    timeout_ms: u64,
) -> Result<Resp, ModelError>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| request_error(stage, timeout_ms, e))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ModelError::Inference(format!(
            "{} service returned {}: {}",
            stage, status, error_text
        )));
    }

    response
        .json::<Resp>()
        .await
        .map_err(|e| request_error(stage, timeout_ms, e))
}

/// GET `{endpoint}/health`
pub(crate) async fn check_health(client: &Client, endpoint: &str) -> Result<(), ModelError> {
    let url = format!("{}/health", endpoint);
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ModelError::Unavailable(format!("{}: {}", url, e)))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(ModelError::Unavailable(format!(
            "{} returned {}",
            url,
            response.status()
        )))
    }
}

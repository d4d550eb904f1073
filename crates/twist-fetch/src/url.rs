//! HTTP retrieval.

use crate::{FetchConfig, FetchError};
use reqwest::StatusCode;
use reqwest::blocking::Client;

/// Build a client carrying the configured timeout and user agent.
pub fn client(config: &FetchConfig) -> Result<Client, FetchError> {
    let mut builder = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str());
    if !config.env_proxy {
        builder = builder.no_proxy();
    }
    Ok(builder.build()?)
}

/// Fetch the body at `url`.
///
/// A 503 is reported as [`FetchError::ServiceUnavailable`] so callers can
/// tell a sleeping service apart from other failures.
pub fn fetch_url(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    tracing::debug!(url, "requesting external token");
    let response = client.get(url).send()?;

    let status = response.status();
    if status == StatusCode::SERVICE_UNAVAILABLE {
        tracing::warn!(url, "word service is unavailable");
        return Err(FetchError::ServiceUnavailable);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    Ok(response.bytes()?.to_vec())
}

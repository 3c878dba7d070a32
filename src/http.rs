//! Plain HTTP GET helpers shared by the index and article stages.
//!
//! No retry, timeout or status policy is layered on top of reqwest: a request
//! either yields a body (whatever the status code) or a [`FetchError`].

use crate::error::FetchError;
use reqwest::Client;
use tracing::{debug, instrument};

/// Build the single client used for a whole run.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// GET `url` and return the response body as text.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let request_failed = |source: reqwest::Error| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(request_failed)?;
    let status = response.status();
    let body = response.text().await.map_err(request_failed)?;
    debug!(%status, bytes = body.len(), "Fetched page");
    Ok(body)
}

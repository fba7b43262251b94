//! Shared reqwest plumbing for the engine's fetch paths.

use std::time::Duration;

use futures_util::StreamExt;

use crate::FetchError;

pub(crate) fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(map_transport)
}

pub(crate) fn map_transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport {
        message: err.to_string(),
    }
}

/// Streams a response body to completion, returning only its length.
pub(crate) async fn drain_byte_count(response: reqwest::Response) -> Result<u64, FetchError> {
    let mut byte_len = 0u64;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        byte_len += chunk.map_err(map_transport)?.len() as u64;
    }
    Ok(byte_len)
}

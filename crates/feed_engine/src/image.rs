use std::time::Duration;

use crate::net::{build_client, drain_byte_count, map_transport};
use crate::{FetchError, LoadedImage};

/// Loads image pixel data: one best-effort GET per image, no retry.
///
/// Loads for distinct images run as independent tasks with no shared state;
/// a failure here only means the image's reveal never fires.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, uri: &str) -> Result<LoadedImage, FetchError> {
        let client = build_client(self.connect_timeout, self.request_timeout)?;
        let response = client.get(uri).send().await.map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                message: status.to_string(),
            });
        }

        let byte_len = drain_byte_count(response).await?;
        Ok(LoadedImage {
            uri: uri.to_string(),
            byte_len,
        })
    }
}

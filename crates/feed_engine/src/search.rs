use std::time::Duration;

use async_trait::async_trait;
use feed_logging::feed_info;
use serde::Deserialize;

use crate::net::{build_client, map_transport};
use crate::{FetchError, ImageRecord};

/// Query configuration for the image-search endpoint.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    /// Free-text search term.
    pub text: String,
    pub sort: String,
    /// Extra response field naming the image-URL variant to project.
    pub extras: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.flickr.com/services/rest".to_string(),
            text: "cat".to_string(),
            sort: "relevance".to_string(),
            extras: "url_n".to_string(),
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    /// One best-effort search request; no retry, no pagination.
    async fn search(&self) -> Result<Vec<ImageRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct FlickrSource {
    settings: SearchSettings,
}

impl FlickrSource {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl ImageSource for FlickrSource {
    async fn search(&self) -> Result<Vec<ImageRecord>, FetchError> {
        let client = build_client(
            self.settings.connect_timeout,
            self.settings.request_timeout,
        )?;

        let response = client
            .get(&self.settings.endpoint)
            .query(&[
                ("method", "flickr.photos.search"),
                ("text", self.settings.text.as_str()),
                ("sort", self.settings.sort.as_str()),
                ("format", "json"),
                ("nojsoncallback", "1"),
                ("extras", self.settings.extras.as_str()),
                ("api_key", self.settings.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport)?;

        let body = response.text().await.map_err(map_transport)?;
        project_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    stat: String,
    photos: Option<PhotoPage>,
}

#[derive(Debug, Deserialize)]
struct PhotoPage {
    photo: Vec<PhotoRecord>,
}

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    id: String,
    #[serde(default)]
    url_n: Option<String>,
}

/// Parses a search response body and projects it to image records.
///
/// Records without the requested URL variant have no viewable asset at the
/// target size and are dropped; the upstream relevance order of the
/// survivors is preserved. Any structural mismatch keeps the raw body for
/// the caller's diagnostics.
pub fn project_response(body: &str) -> Result<Vec<ImageRecord>, FetchError> {
    let parsed: SearchResponse = serde_json::from_str(body).map_err(|_| {
        FetchError::UnexpectedResponse {
            body: body.to_string(),
        }
    })?;
    if parsed.stat != "ok" {
        return Err(FetchError::UnexpectedResponse {
            body: body.to_string(),
        });
    }
    let Some(page) = parsed.photos else {
        return Err(FetchError::UnexpectedResponse {
            body: body.to_string(),
        });
    };

    let records: Vec<ImageRecord> = page
        .photo
        .into_iter()
        .filter_map(|record| {
            record.url_n.map(|uri| ImageRecord {
                id: record.id,
                uri,
            })
        })
        .collect();

    feed_info!("{} images found.", records.len());
    Ok(records)
}

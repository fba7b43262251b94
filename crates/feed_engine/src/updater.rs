use std::sync::mpsc;
use std::time::Duration;

use feed_logging::feed_info;
use serde::Deserialize;

use crate::net::{build_client, drain_byte_count, map_transport};
use crate::{EngineEvent, FetchError, UpdateLifecycle, UpdateMetadata};

/// Configuration for the update channel's manifest endpoint.
#[derive(Debug, Clone)]
pub struct UpdateSettings {
    pub manifest_url: String,
    /// Version label of the package this build shipped with.
    pub installed_label: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl UpdateSettings {
    pub fn new(manifest_url: impl Into<String>, installed_label: impl Into<String>) -> Self {
        Self {
            manifest_url: manifest_url.into(),
            installed_label: installed_label.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Wire shape of the update manifest.
#[derive(Debug, Deserialize)]
struct Manifest {
    label: String,
    #[serde(default)]
    package_url: Option<String>,
}

/// Receives lifecycle events as a check cycle progresses.
pub trait UpdateSink: Send + Sync {
    fn emit(&self, event: UpdateLifecycle);
}

pub struct ChannelUpdateSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelUpdateSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl UpdateSink for ChannelUpdateSink {
    fn emit(&self, event: UpdateLifecycle) {
        let _ = self.tx.send(EngineEvent::UpdateLifecycleChanged(event));
    }
}

/// Publisher side of the update channel: one best-effort check cycle plus
/// the metadata lookup that resolves the display label.
#[derive(Debug, Clone)]
pub struct UpdateChannel {
    settings: UpdateSettings,
}

impl UpdateChannel {
    pub fn new(settings: UpdateSettings) -> Self {
        Self { settings }
    }

    /// Runs one check cycle, emitting lifecycle events in order. No retry;
    /// a failed cycle simply ends where it failed.
    pub async fn check(&self, sink: &dyn UpdateSink) -> Result<(), FetchError> {
        sink.emit(UpdateLifecycle::CheckingForUpdate);
        let manifest = self.fetch_manifest().await?;

        if manifest.label == self.settings.installed_label {
            sink.emit(UpdateLifecycle::UpToDate);
            return Ok(());
        }

        sink.emit(UpdateLifecycle::DownloadingPackage);
        if let Some(package_url) = manifest.package_url.as_deref() {
            let byte_len = self.download_package(package_url).await?;
            feed_info!(
                "Downloaded update package {} ({} bytes).",
                manifest.label,
                byte_len
            );
        }
        sink.emit(UpdateLifecycle::InstallingUpdate);
        sink.emit(UpdateLifecycle::UpdateInstalled);
        Ok(())
    }

    /// Resolves the version label the status line needs.
    pub async fn lookup_metadata(&self) -> Result<UpdateMetadata, FetchError> {
        let manifest = self.fetch_manifest().await?;
        Ok(UpdateMetadata {
            label: manifest.label,
        })
    }

    async fn fetch_manifest(&self) -> Result<Manifest, FetchError> {
        let client = build_client(
            self.settings.connect_timeout,
            self.settings.request_timeout,
        )?;
        let response = client
            .get(&self.settings.manifest_url)
            .send()
            .await
            .map_err(map_transport)?;
        let body = response.text().await.map_err(map_transport)?;
        serde_json::from_str(&body).map_err(|_| FetchError::UnexpectedResponse { body })
    }

    async fn download_package(&self, package_url: &str) -> Result<u64, FetchError> {
        let client = build_client(
            self.settings.connect_timeout,
            self.settings.request_timeout,
        )?;
        let response = client
            .get(package_url)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                message: status.to_string(),
            });
        }
        drain_byte_count(response).await
    }
}

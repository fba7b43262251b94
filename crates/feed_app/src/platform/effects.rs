use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use feed_core::{Effect, Image, Msg, UpdateEvent};
use feed_engine::{EngineConfig, EngineEvent, EngineHandle, FetchError, UpdateLifecycle};
use feed_logging::{feed_info, feed_warn};

/// Runs core effects against the engine and pumps engine events back into
/// the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config: EngineConfig) -> Self {
        let engine = EngineHandle::new(config);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    /// One check per app start, mirroring an on-resume update policy.
    pub fn check_for_update(&self) {
        self.engine.check_for_update();
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchFeed { generation } => {
                    feed_info!("FetchFeed generation={}", generation);
                    self.engine.fetch_feed(generation);
                }
                Effect::LoadImage {
                    generation,
                    id,
                    uri,
                } => {
                    self.engine.load_image(generation, id, uri);
                }
                Effect::LookupUpdateMetadata { event } => {
                    self.engine.lookup_update_metadata(map_event_out(event));
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::FeedFetched { generation, result } => match result {
                        Ok(records) => {
                            let images = records
                                .into_iter()
                                .map(|record| Image {
                                    id: record.id,
                                    uri: record.uri,
                                })
                                .collect();
                            let _ = msg_tx.send(Msg::FeedLoaded { generation, images });
                        }
                        Err(err) => {
                            log_fetch_failure(&err);
                            let _ = msg_tx.send(Msg::FeedFailed { generation });
                        }
                    },
                    EngineEvent::ImageLoaded { generation, id, .. } => {
                        let _ = msg_tx.send(Msg::ImageLoaded { generation, id });
                    }
                    EngineEvent::UpdateLifecycleChanged(lifecycle) => {
                        let _ = msg_tx.send(Msg::UpdateStatusChanged(map_event_in(lifecycle)));
                    }
                    EngineEvent::UpdateMetadataResolved { event, result } => match result {
                        Ok(metadata) => {
                            let _ = msg_tx.send(Msg::UpdateMetadataResolved {
                                event: map_event_in(event),
                                label: metadata.label,
                            });
                        }
                        // The prior status keeps showing; nothing to send.
                        Err(err) => feed_warn!("Update metadata lookup failed: {}", err),
                    },
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// Fetch failures never reach the user; they end here as log lines.
fn log_fetch_failure(err: &FetchError) {
    match err {
        FetchError::Transport { message } => {
            feed_warn!("Feed fetch failed in transit: {}", message);
        }
        FetchError::UnexpectedResponse { body } => {
            feed_warn!("Feed fetch returned an unexpected payload: {}", body);
        }
    }
}

fn map_event_in(lifecycle: UpdateLifecycle) -> UpdateEvent {
    match lifecycle {
        UpdateLifecycle::CheckingForUpdate => UpdateEvent::CheckingForUpdate,
        UpdateLifecycle::DownloadingPackage => UpdateEvent::DownloadingPackage,
        UpdateLifecycle::InstallingUpdate => UpdateEvent::InstallingUpdate,
        UpdateLifecycle::UpToDate => UpdateEvent::UpToDate,
        UpdateLifecycle::UpdateInstalled => UpdateEvent::UpdateInstalled,
    }
}

fn map_event_out(event: UpdateEvent) -> UpdateLifecycle {
    match event {
        UpdateEvent::CheckingForUpdate => UpdateLifecycle::CheckingForUpdate,
        UpdateEvent::DownloadingPackage => UpdateLifecycle::DownloadingPackage,
        UpdateEvent::InstallingUpdate => UpdateLifecycle::InstallingUpdate,
        UpdateEvent::UpToDate => UpdateLifecycle::UpToDate,
        UpdateEvent::UpdateInstalled => UpdateLifecycle::UpdateInstalled,
    }
}

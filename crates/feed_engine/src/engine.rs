use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use feed_logging::{feed_debug, feed_warn};

use crate::image::ImageLoader;
use crate::search::{FlickrSource, ImageSource, SearchSettings};
use crate::updater::{ChannelUpdateSink, UpdateChannel, UpdateSettings};
use crate::{EngineEvent, Generation, UpdateLifecycle};

/// Everything the engine needs to run its IO.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub search: SearchSettings,
    /// Absent when the shell ships without an update channel.
    pub update: Option<UpdateSettings>,
}

enum EngineCommand {
    FetchFeed {
        generation: Generation,
    },
    LoadImage {
        generation: Generation,
        id: String,
        uri: String,
    },
    CheckForUpdate,
    LookupUpdateMetadata {
        event: UpdateLifecycle,
    },
}

/// Bridge between the synchronous shell and the async IO tasks: commands
/// go in over one channel, events come back over another. There is no
/// cancellation; superseded results are discarded by the consumer.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
        let source = Arc::new(FlickrSource::new(config.search));
        let loader = Arc::new(ImageLoader::new());
        let channel = config.update.map(|settings| Arc::new(UpdateChannel::new(settings)));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let loader = loader.clone();
                let channel = channel.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(
                        source.as_ref(),
                        &loader,
                        channel.as_deref(),
                        command,
                        event_tx,
                    )
                    .await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_feed(&self, generation: Generation) {
        let _ = self.cmd_tx.send(EngineCommand::FetchFeed { generation });
    }

    pub fn load_image(
        &self,
        generation: Generation,
        id: impl Into<String>,
        uri: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::LoadImage {
            generation,
            id: id.into(),
            uri: uri.into(),
        });
    }

    pub fn check_for_update(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckForUpdate);
    }

    pub fn lookup_update_metadata(&self, event: UpdateLifecycle) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::LookupUpdateMetadata { event });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    source: &dyn ImageSource,
    loader: &ImageLoader,
    channel: Option<&UpdateChannel>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchFeed { generation } => {
            let result = source.search().await;
            let _ = event_tx.send(EngineEvent::FeedFetched { generation, result });
        }
        EngineCommand::LoadImage {
            generation,
            id,
            uri,
        } => match loader.load(&uri).await {
            Ok(loaded) => {
                feed_debug!("Loaded: {}", loaded.uri);
                let _ = event_tx.send(EngineEvent::ImageLoaded {
                    generation,
                    id,
                    byte_len: loaded.byte_len,
                });
            }
            // A failed load never reveals; the placeholder stays visible.
            Err(err) => feed_warn!("Image load failed for {}: {}", uri, err),
        },
        EngineCommand::CheckForUpdate => {
            let Some(channel) = channel else {
                return;
            };
            let sink = ChannelUpdateSink::new(event_tx);
            if let Err(err) = channel.check(&sink).await {
                feed_warn!("Update check failed: {}", err);
            }
        }
        EngineCommand::LookupUpdateMetadata { event } => {
            let Some(channel) = channel else {
                return;
            };
            let result = channel.lookup_metadata().await;
            let _ = event_tx.send(EngineEvent::UpdateMetadataResolved { event, result });
        }
    }
}

//! Feed engine: IO pipeline and effect execution.
mod engine;
mod image;
mod net;
mod search;
mod types;
mod updater;

pub use engine::{EngineConfig, EngineHandle};
pub use image::ImageLoader;
pub use search::{project_response, FlickrSource, ImageSource, SearchSettings};
pub use types::{
    EngineEvent, FetchError, Generation, ImageRecord, LoadedImage, UpdateLifecycle,
    UpdateMetadata,
};
pub use updater::{ChannelUpdateSink, UpdateChannel, UpdateSettings, UpdateSink};

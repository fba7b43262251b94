/// Feed generation tag; the core discards results from stale generations.
pub type Generation = u64;

/// One search record that survived projection: it carries a viewable asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: String,
    pub uri: String,
}

/// Result of loading one image's pixel data into memory. The byte count
/// stands in for the decoded bitmap, which the platform image subsystem
/// owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub uri: String,
    pub byte_len: u64,
}

/// Update-channel lifecycle, as published by the manifest check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateLifecycle {
    CheckingForUpdate,
    DownloadingPackage,
    InstallingUpdate,
    UpToDate,
    UpdateInstalled,
}

/// Resolved update metadata for status rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMetadata {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network-level failure: DNS, connect, TLS, timeout.
    #[error("transport failure: {message}")]
    Transport { message: String },
    /// Transport succeeded but the payload was not usable. The raw body is
    /// kept for diagnostic logging, never for display.
    #[error("unexpected response payload")]
    UnexpectedResponse { body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The single search fetch finished, one way or the other.
    FeedFetched {
        generation: Generation,
        result: Result<Vec<ImageRecord>, FetchError>,
    },
    /// One image's pixel data arrived. Failed loads emit nothing.
    ImageLoaded {
        generation: Generation,
        id: String,
        byte_len: u64,
    },
    /// The update channel moved through its lifecycle.
    UpdateLifecycleChanged(UpdateLifecycle),
    /// A requested metadata lookup resolved (or failed).
    UpdateMetadataResolved {
        event: UpdateLifecycle,
        result: Result<UpdateMetadata, FetchError>,
    },
}

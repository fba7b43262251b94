#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the single search fetch for this feed generation.
    FetchFeed { generation: u64 },
    /// Load one image's pixel data; loads are independent of each other.
    LoadImage {
        generation: u64,
        id: String,
        uri: String,
    },
    /// Resolve the version label an update event needs before display.
    LookupUpdateMetadata { event: crate::UpdateEvent },
}

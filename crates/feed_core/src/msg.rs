use crate::{Image, UpdateEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// One-shot viewport measurement from the shell.
    ViewportMeasured { width: f32 },
    /// Engine finished the search fetch for a feed generation.
    FeedLoaded { generation: u64, images: Vec<Image> },
    /// Engine reported the fetch failed (already logged at the boundary).
    FeedFailed { generation: u64 },
    /// Pixel data for one image finished loading.
    ImageLoaded { generation: u64, id: String },
    /// Update-channel lifecycle event.
    UpdateStatusChanged(UpdateEvent),
    /// Version label resolved for a label-bearing update event.
    UpdateMetadataResolved { event: UpdateEvent, label: String },
    /// Animation/render tick from the shell.
    Tick { elapsed_ms: u64 },
    /// Fallback for placeholder wiring.
    NoOp,
}

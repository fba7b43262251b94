/// Render model for one snapshot of the application state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedViewModel {
    /// No feed yet (initial, or any fetch failure): show the placeholder.
    pub searching: bool,
    /// Square cell edge derived from the viewport width; 0 until measured.
    pub cell_size: f32,
    pub rows: Vec<RowView>,
    /// Update-channel status sentence, once the first event has rendered.
    pub update_status: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub cells: Vec<ImageCellView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageCellView {
    pub id: String,
    pub uri: String,
    /// Crossfade opacity in `[0, 1]`; the placeholder shows through below.
    pub opacity: f32,
    pub is_loaded: bool,
}

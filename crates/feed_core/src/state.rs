use std::collections::HashMap;

use crate::layout::{self, LayoutError};
use crate::reveal::ImageReveal;
use crate::status::{status_line, UpdateEvent};
use crate::view_model::{FeedViewModel, ImageCellView, RowView};

/// One fetched image, projected from a search response record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: String,
    pub uri: String,
}

/// One grid row. Never empty; holds at most the configured cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub images: Vec<Image>,
}

/// Cells per grid row when the shell does not configure one.
pub const DEFAULT_CELLS_PER_ROW: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    cells_per_row: usize,
    cell_size: Option<f32>,
    generation: u64,
    feed: Vec<Row>,
    reveals: HashMap<String, ImageReveal>,
    update_status: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cells_per_row: DEFAULT_CELLS_PER_ROW,
            cell_size: None,
            generation: 0,
            feed: Vec::new(),
            reveals: HashMap::new(),
            update_status: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state with a custom grid width. Zero cells per row is a
    /// caller contract violation, rejected up front rather than coerced.
    pub fn with_cells_per_row(cells_per_row: usize) -> Result<Self, LayoutError> {
        if cells_per_row == 0 {
            return Err(LayoutError::InvalidCellCount(cells_per_row));
        }
        Ok(Self {
            cells_per_row,
            ..Self::default()
        })
    }

    pub fn view(&self) -> FeedViewModel {
        FeedViewModel {
            searching: self.feed.is_empty(),
            cell_size: self.cell_size.unwrap_or(0.0),
            rows: self
                .feed
                .iter()
                .map(|row| RowView {
                    cells: row
                        .images
                        .iter()
                        .map(|image| {
                            let reveal =
                                self.reveals.get(&image.id).copied().unwrap_or_default();
                            ImageCellView {
                                id: image.id.clone(),
                                uri: image.uri.clone(),
                                opacity: reveal.opacity(),
                                is_loaded: reveal.is_loaded(),
                            }
                        })
                        .collect(),
                })
                .collect(),
            update_status: self.update_status.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; the shell renders when it was set.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    /// One-shot viewport measurement: derives the cell size and opens the
    /// feed generation whose fetch should now run. Later measurements are
    /// ignored (no rotation support).
    pub(crate) fn measure_viewport(&mut self, width: f32) -> Option<u64> {
        if self.cell_size.is_some() {
            return None;
        }
        let size = match layout::cell_size(width, self.cells_per_row) {
            Ok(size) => size,
            // cells_per_row >= 1 by construction
            Err(_) => return None,
        };
        self.cell_size = Some(size);
        self.generation += 1;
        self.dirty = true;
        Some(self.generation)
    }

    /// Publishes a fetched image list as the new feed, replacing rows and
    /// reveal states wholesale. Returns the `(id, uri)` pairs whose pixel
    /// data should now be loaded. Stale generations are discarded here.
    pub(crate) fn publish_feed(
        &mut self,
        generation: u64,
        images: Vec<Image>,
    ) -> Vec<(String, String)> {
        if generation != self.generation {
            return Vec::new();
        }
        let rows = match layout::partition(images, self.cells_per_row) {
            Ok(rows) => rows,
            // cells_per_row >= 1 by construction
            Err(_) => return Vec::new(),
        };
        let loads: Vec<(String, String)> = rows
            .iter()
            .flat_map(|row| row.images.iter())
            .map(|image| (image.id.clone(), image.uri.clone()))
            .collect();
        self.reveals = loads
            .iter()
            .map(|(id, _)| (id.clone(), ImageReveal::new()))
            .collect();
        self.feed = rows;
        self.dirty = true;
        loads
    }

    /// Fetch failure is recovered upstream; the searching placeholder
    /// simply persists, with no retry and no user-facing error.
    pub(crate) fn feed_failed(&mut self, _generation: u64) {}

    /// Load-completion signal for one image. A stale generation or an id
    /// outside the current feed is a no-op against the torn-down view.
    pub(crate) fn image_loaded(&mut self, generation: u64, id: &str) {
        if generation != self.generation {
            return;
        }
        if let Some(reveal) = self.reveals.get_mut(id) {
            if reveal.on_loaded() {
                self.dirty = true;
            }
        }
    }

    /// Advances every in-flight reveal fade by `elapsed_ms`.
    pub(crate) fn tick(&mut self, elapsed_ms: u64) {
        let mut moved = false;
        for reveal in self.reveals.values_mut() {
            moved |= reveal.tick(elapsed_ms);
        }
        if moved {
            self.dirty = true;
        }
    }

    /// Overwrites the update-channel display string; last write wins.
    pub(crate) fn set_update_status(&mut self, event: UpdateEvent, label: &str) {
        self.update_status = Some(status_line(event, label));
        self.dirty = true;
    }
}

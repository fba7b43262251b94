//! Feed core: pure state machine and view-model helpers.
mod effect;
mod layout;
mod msg;
mod reveal;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::Effect;
pub use layout::{cell_size, partition, LayoutError};
pub use msg::Msg;
pub use reveal::{ImageReveal, RevealPhase, FADE_DURATION_MS};
pub use state::{AppState, Image, Row, DEFAULT_CELLS_PER_ROW};
pub use status::{status_line, UpdateEvent};
pub use update::update;
pub use view_model::{FeedViewModel, ImageCellView, RowView};

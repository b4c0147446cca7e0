mod controls;
mod header;
mod summary;

pub use controls::{attribution, exit_fullscreen_button, zoom_controls};
pub use header::MapHeader;
pub use summary::SummaryPanel;

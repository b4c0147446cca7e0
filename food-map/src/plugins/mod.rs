mod clicks;
mod places;
mod popups;

pub use clicks::Clicks;
pub use places::Places;
pub use popups::Popups;

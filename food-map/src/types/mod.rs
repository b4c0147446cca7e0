mod place;
pub use place::PointOfInterest;

mod map_bounds;
pub use map_bounds::MapBounds;

mod viewport;
pub use viewport::{ViewConstraints, Viewport};

mod summary;
pub use summary::Summary;

mod popup;
pub use popup::{format_lat_lng, Popup, PopupKind};

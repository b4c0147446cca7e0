use walkers::Position;

/// Represents the geographical boundaries of a map view, defined by minimum
/// and maximum latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    /// Builds the bounds from a south-west and a north-east corner.
    pub fn from_corners(south_west: Position, north_east: Position) -> Self {
        Self {
            min_lat: south_west.lat().min(north_east.lat()),
            max_lat: south_west.lat().max(north_east.lat()),
            min_lon: south_west.lon().min(north_east.lon()),
            max_lon: south_west.lon().max(north_east.lon()),
        }
    }

    /// Checks whether a given position is within the map bounds.
    pub fn contains(&self, pos: &Position) -> bool {
        pos.lat() >= self.min_lat
            && pos.lat() <= self.max_lat
            && pos.lon() >= self.min_lon
            && pos.lon() <= self.max_lon
    }

    /// Returns the closest position inside the bounds.
    pub fn clamp(&self, pos: Position) -> Position {
        if self.contains(&pos) {
            return pos;
        }
        Position::from_lat_lon(
            pos.lat().clamp(self.min_lat, self.max_lat),
            pos.lon().clamp(self.min_lon, self.max_lon),
        )
    }
}

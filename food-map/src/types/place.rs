use walkers::Position;

/// A food distribution point shown as a marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub name: String,
    pub position: Position,
    pub meals: u32,
    pub area: String,
}

impl PointOfInterest {
    pub fn new(name: &str, lat: f64, lon: f64, meals: u32, area: &str) -> Self {
        Self {
            name: name.to_string(),
            position: Position::from_lat_lon(lat, lon),
            meals,
            area: area.to_string(),
        }
    }

    /// Text of the popup bound to this place's marker.
    ///
    /// The first line is the name, rendered bold by the popup widget.
    pub fn popup_text(&self) -> String {
        format!(
            "{}\nMeal Numbers: {}\nLocation: {:.4}, {:.4}",
            self.name,
            self.meals,
            self.position.lat(),
            self.position.lon()
        )
    }

    /// Line used in the summary list below the map.
    pub fn summary_line(&self) -> String {
        if self.area.is_empty() {
            format!("{} ({} meals)", self.name, self.meals)
        } else {
            format!("{} - {} ({} meals)", self.name, self.area, self.meals)
        }
    }
}

use walkers::Position;

/// What a popup is attached to. Decides how it is opened and replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupKind {
    /// Bound to the marker of the place at this dataset index.
    Marker(usize),
    /// Standalone informational popup opened on mount.
    Info,
    /// Opened by clicking the map; a newer click replaces it.
    Click,
}

/// An info box anchored to a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub kind: PopupKind,
    pub anchor: Position,
    pub content: String,
}

impl Popup {
    pub fn new(kind: PopupKind, anchor: Position, content: String) -> Self {
        Self {
            kind,
            anchor,
            content,
        }
    }

    /// Popup opened when the map is clicked at `anchor`.
    pub fn for_click(anchor: Position) -> Self {
        Self::new(
            PopupKind::Click,
            anchor,
            format!("You clicked the map at {}", format_lat_lng(anchor)),
        )
    }
}

/// Renders a coordinate as `LatLng(lat, lon)`, six decimals at most.
pub fn format_lat_lng(position: Position) -> String {
    format!(
        "LatLng({}, {})",
        format_number(position.lat()),
        format_number(position.lon())
    )
}

fn format_number(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => String::from("0"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lat_lng_trims_trailing_zeros() {
        let text = format_lat_lng(Position::from_lat_lon(40.75, -73.9));
        assert_eq!(text, "LatLng(40.75, -73.9)");
    }

    #[test]
    fn test_format_lat_lng_rounds_to_six_decimals() {
        let text = format_lat_lng(Position::from_lat_lon(40.123456789, -73.0000004));
        assert_eq!(text, "LatLng(40.123457, -73)");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0000001), "0");
    }

    #[test]
    fn test_click_popup_mentions_coordinate() {
        let anchor = Position::from_lat_lon(40.7128, -74.006);
        let popup = Popup::for_click(anchor);

        assert_eq!(popup.kind, PopupKind::Click);
        assert_eq!(popup.anchor, anchor);
        assert_eq!(popup.content, "You clicked the map at LatLng(40.7128, -74.006)");
    }
}

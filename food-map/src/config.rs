use std::time::Duration;

use egui::{include_image, ImageSource, Pos2, Rect, Vec2};
use walkers::Position;

use crate::types::{MapBounds, ViewConstraints, Viewport};

/// Tile service used as the base layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerConfig {
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub attribution_url: &'static str,
    pub max_zoom: u8,
}

/// Appearance of a place marker. Passed explicitly to the marker plugin.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub size: Vec2,
    /// Offset from the image's top-left corner to the pixel that sits on the coordinate.
    pub anchor: Vec2,
    pub image: ImageSource<'static>,
    pub hovered_image: ImageSource<'static>,
}

impl MarkerStyle {
    /// Screen rectangle of a marker whose anchor lands on `screen_position`.
    pub fn rect_at(&self, screen_position: Pos2) -> Rect {
        Rect::from_min_size(screen_position - self.anchor, self.size)
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: Vec2::new(25.0, 41.0),
            anchor: Vec2::new(12.0, 41.0),
            image: include_image!("../assets/marker-icon.svg"),
            hovered_image: include_image!("../assets/marker-icon-selected.svg"),
        }
    }
}

/// Popup opened on mount independently of the markers.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPopupConfig {
    pub position: Position,
    pub content: String,
}

/// Everything the map view needs to know before it is mounted.
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub initial_center: Position,
    pub initial_zoom: f64,
    pub bounds: MapBounds,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub tiles: TileLayerConfig,
    /// Zoom level reached after clicking a marker.
    pub marker_zoom: f64,
    pub fly_duration: Duration,
    /// Delay between a fullscreen transition and the resize notification.
    pub resize_delay: Duration,
    pub info_popup: InfoPopupConfig,
    pub marker_style: MarkerStyle,
    /// Height of the map while not in fullscreen.
    pub map_height: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_center: Position::from_lat_lon(40.6892, -73.9442),
            initial_zoom: 11.0,
            bounds: MapBounds::from_corners(
                Position::from_lat_lon(40.4774, -74.2591),
                Position::from_lat_lon(40.9176, -73.7004),
            ),
            min_zoom: 10.0,
            max_zoom: 18.0,
            tiles: TileLayerConfig {
                url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
                attribution: "© OpenStreetMap contributors",
                attribution_url: "http://www.openstreetmap.org/copyright",
                max_zoom: 19,
            },
            marker_zoom: 15.0,
            fly_duration: Duration::from_millis(800),
            resize_delay: Duration::from_millis(100),
            info_popup: InfoPopupConfig {
                position: Position::from_lat_lon(40.8448, -73.8648),
                content: String::from("Welcome to the Bronx!"),
            },
            marker_style: MarkerStyle::default(),
            map_height: 500.0,
        }
    }
}

impl MapConfig {
    /// Bounds and zoom range, with the upper zoom capped by the tile layer.
    pub fn constraints(&self) -> ViewConstraints {
        ViewConstraints {
            bounds: self.bounds,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom.min(f64::from(self.tiles.max_zoom)),
        }
    }

    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.initial_center, self.initial_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constraints() {
        let constraints = MapConfig::default().constraints();
        assert_eq!(constraints.min_zoom, 10.0);
        assert_eq!(constraints.max_zoom, 18.0);
        assert_eq!(constraints.bounds.min_lat, 40.4774);
        assert_eq!(constraints.bounds.max_lon, -73.7004);
    }

    #[test]
    fn test_tile_max_zoom_caps_constraints() {
        let mut config = MapConfig::default();
        config.tiles.max_zoom = 16;
        assert_eq!(config.constraints().max_zoom, 16.0);
    }

    #[test]
    fn test_initial_viewport_is_allowed() {
        let config = MapConfig::default();
        assert!(config.constraints().allows(&config.initial_viewport()));
    }

    #[test]
    fn test_marker_rect_puts_anchor_on_coordinate() {
        let style = MarkerStyle::default();
        let rect = style.rect_at(Pos2::new(100.0, 200.0));

        assert_eq!(rect.min, Pos2::new(88.0, 159.0));
        assert_eq!(rect.max, Pos2::new(113.0, 200.0));
    }
}

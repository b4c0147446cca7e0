use std::f64::consts::PI;

use egui::Vec2;
use walkers::Position;

use super::MapBounds;

/// Center and zoom level of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Position,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: Position, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Linear interpolation towards `target`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, target: &Viewport, t: f64) -> Viewport {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return *target;
        }
        let lat = self.center.lat() + (target.center.lat() - self.center.lat()) * t;
        let lon = self.center.lon() + (target.center.lon() - self.center.lon()) * t;
        Viewport {
            center: Position::from_lat_lon(lat, lon),
            zoom: self.zoom + (target.zoom - self.zoom) * t,
        }
    }
}

/// Limits applied to every viewport the map is allowed to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConstraints {
    pub bounds: MapBounds,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ViewConstraints {
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Pulls the viewport back inside the bounds and zoom range.
    pub fn clamp(&self, viewport: Viewport) -> Viewport {
        Viewport {
            center: self.bounds.clamp(viewport.center),
            zoom: self.clamp_zoom(viewport.zoom),
        }
    }

    pub fn allows(&self, viewport: &Viewport) -> bool {
        self.bounds.contains(&viewport.center)
            && viewport.zoom >= self.min_zoom
            && viewport.zoom <= self.max_zoom
    }

    /// Like [`ViewConstraints::clamp`], but keeps the whole area of a
    /// `view_size` pixel view inside the bounds. On an axis where the view is
    /// larger than the bounds, the view is centered on the bounds instead.
    pub fn clamp_in_view(&self, viewport: Viewport, view_size: Option<Vec2>) -> Viewport {
        let viewport = self.clamp(viewport);
        let Some(size) = view_size else {
            return viewport;
        };

        let world = world_size(viewport.zoom);
        let half_w = f64::from(size.x) / 2.0;
        let half_h = f64::from(size.y) / 2.0;

        let x = clamp_or_middle(
            lon_to_x(viewport.center.lon(), world),
            lon_to_x(self.bounds.min_lon, world) + half_w,
            lon_to_x(self.bounds.max_lon, world) - half_w,
        );
        // Mercator y grows southwards.
        let y = clamp_or_middle(
            lat_to_y(viewport.center.lat(), world),
            lat_to_y(self.bounds.max_lat, world) + half_h,
            lat_to_y(self.bounds.min_lat, world) - half_h,
        );

        Viewport {
            center: Position::from_lat_lon(y_to_lat(y, world), x_to_lon(x, world)),
            zoom: viewport.zoom,
        }
    }

    pub fn allows_in_view(&self, viewport: &Viewport, view_size: Option<Vec2>) -> bool {
        let clamped = self.clamp_in_view(*viewport, view_size);
        (clamped.center.lat() - viewport.center.lat()).abs() < SLACK
            && (clamped.center.lon() - viewport.center.lon()).abs() < SLACK
            && (clamped.zoom - viewport.zoom).abs() < SLACK
    }
}

const TILE_SIZE: f64 = 256.0;
const SLACK: f64 = 1e-9;

fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

fn lon_to_x(lon: f64, world: f64) -> f64 {
    (lon + 180.0) / 360.0 * world
}

fn x_to_lon(x: f64, world: f64) -> f64 {
    x / world * 360.0 - 180.0
}

fn lat_to_y(lat: f64, world: f64) -> f64 {
    let lat = lat.to_radians();
    (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world
}

fn y_to_lat(y: f64, world: f64) -> f64 {
    let n = PI - 2.0 * PI * y / world;
    n.sinh().atan().to_degrees()
}

fn clamp_or_middle(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        (min + max) / 2.0
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints() -> ViewConstraints {
        ViewConstraints {
            bounds: MapBounds {
                min_lat: 40.4774,
                max_lat: 40.9176,
                min_lon: -74.2591,
                max_lon: -73.7004,
            },
            min_zoom: 10.0,
            max_zoom: 18.0,
        }
    }

    #[test]
    fn test_clamp_rejects_zoom_outside_range() {
        let c = constraints();
        let center = Position::from_lat_lon(40.7, -73.9);

        assert_eq!(c.clamp(Viewport::new(center, 3.0)).zoom, 10.0);
        assert_eq!(c.clamp(Viewport::new(center, 21.5)).zoom, 18.0);
        assert_eq!(c.clamp(Viewport::new(center, 12.5)).zoom, 12.5);
    }

    #[test]
    fn test_clamp_pulls_center_into_bounds() {
        let c = constraints();
        let clamped = c.clamp(Viewport::new(Position::from_lat_lon(38.9, -77.0), 11.0));

        assert!(c.allows(&clamped));
        assert_eq!(clamped.center.lat(), 40.4774);
        assert_eq!(clamped.center.lon(), -74.2591);
    }

    #[test]
    fn test_mercator_round_trip() {
        let world = world_size(11.0);
        assert!((y_to_lat(lat_to_y(40.8448, world), world) - 40.8448).abs() < 1e-9);
        assert!((x_to_lon(lon_to_x(-73.8648, world), world) + 73.8648).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_in_view_keeps_visible_area_inside() {
        let c = constraints();
        let size = Vec2::new(800.0, 500.0);
        let corner = Viewport::new(Position::from_lat_lon(40.9176, -73.7004), 12.0);

        assert!(c.allows(&corner));
        assert!(!c.allows_in_view(&corner, Some(size)));

        let clamped = c.clamp_in_view(corner, Some(size));
        let world = world_size(12.0);
        let east_edge = lon_to_x(clamped.center.lon(), world) + 400.0;
        let north_edge = lat_to_y(clamped.center.lat(), world) - 250.0;

        assert!((east_edge - lon_to_x(-73.7004, world)).abs() < 1e-6);
        assert!((north_edge - lat_to_y(40.9176, world)).abs() < 1e-6);
        assert!(clamped.center.lon() < -73.83);
        assert!(c.allows_in_view(&clamped, Some(size)));
    }

    #[test]
    fn test_clamp_in_view_centers_when_view_exceeds_bounds() {
        let c = constraints();
        let wide = Viewport::new(Position::from_lat_lon(40.9, -73.71), 10.0);
        let clamped = c.clamp_in_view(wide, Some(Vec2::new(1600.0, 1200.0)));

        assert!((clamped.center.lon() - (-74.2591 + -73.7004) / 2.0).abs() < 1e-9);
        assert!(c.bounds.contains(&clamped.center));
        assert_eq!(clamped.zoom, 10.0);
    }

    #[test]
    fn test_clamp_in_view_without_size_matches_clamp() {
        let c = constraints();
        let viewport = Viewport::new(Position::from_lat_lon(42.0, -71.0), 3.0);
        assert_eq!(c.clamp_in_view(viewport, None), c.clamp(viewport));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let from = Viewport::new(Position::from_lat_lon(40.0, -74.0), 11.0);
        let to = Viewport::new(Position::from_lat_lon(41.0, -73.0), 15.0);

        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(from.lerp(&to, 7.0), to);

        let mid = from.lerp(&to, 0.5);
        assert!((mid.center.lat() - 40.5).abs() < 1e-9);
        assert!((mid.center.lon() + 73.5).abs() < 1e-9);
        assert!((mid.zoom - 13.0).abs() < 1e-9);
    }
}

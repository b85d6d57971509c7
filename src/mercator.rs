//! Reference `Viewport` backed by a Web Mercator tile pyramid.
//!
//! Hosts normally implement `Viewport` over their own map widget; this
//! implementation drives the replay binary and the test suite.

use crate::bridge::Viewport;
use crate::constants::{MAX_ZOOM_LEVEL, MERCATOR_MAX_LAT_DEG, TILE_SIZE};
use crate::geometry::{GeoBounds, GeoPoint, ScreenPoint, Size, wrap_lng};
use crate::layout::{ElementSnapshot, LayoutNode};
use std::f64::consts::PI;

/// World pixel size at a zoom level.
#[inline]
fn world_scale(zoom: u32) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(MAX_ZOOM_LEVEL))
}

fn world_x(lng: f64, scale: f64) -> f64 {
    (lng + 180.0) / 360.0 * scale
}

fn world_y(lat: f64, scale: f64) -> f64 {
    let sin = lat
        .clamp(-MERCATOR_MAX_LAT_DEG, MERCATOR_MAX_LAT_DEG)
        .to_radians()
        .sin();
    (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * scale
}

fn inverse_world_x(x: f64, scale: f64) -> f64 {
    x / scale * 360.0 - 180.0
}

fn inverse_world_y(y: f64, scale: f64) -> f64 {
    let n = PI - 2.0 * PI * y / scale;
    n.sinh().atan().to_degrees()
}

/// A north-up Web Mercator map of a fixed container size.
#[derive(Debug, Clone)]
pub struct MercatorViewport {
    container: ElementSnapshot,
    size: Size,
    center: GeoPoint,
    zoom: u32,
}

impl MercatorViewport {
    pub fn new(size: Size, center: GeoPoint, zoom: u32) -> Self {
        Self {
            container: ElementSnapshot::at(0.0, 0.0).within(ElementSnapshot::document()),
            size,
            center,
            zoom: zoom.min(MAX_ZOOM_LEVEL),
        }
    }

    /// Replace the container layout capture.
    pub fn with_container(mut self, container: ElementSnapshot) -> Self {
        self.container = container;
        self
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn container_mut(&mut self) -> &mut ElementSnapshot {
        &mut self.container
    }

    /// World pixel of the container's center.
    fn center_world(&self, scale: f64) -> (f64, f64) {
        (world_x(self.center.lng, scale), world_y(self.center.lat, scale))
    }
}

impl Viewport for MercatorViewport {
    fn container(&self) -> &dyn LayoutNode {
        &self.container
    }

    fn size(&self) -> Size {
        self.size
    }

    fn pixel_to_geo(&self, point: ScreenPoint) -> GeoPoint {
        let scale = world_scale(self.zoom);
        let (cx, cy) = self.center_world(scale);
        let wx = cx + point.x - self.size.width / 2.0;
        let wy = cy + point.y - self.size.height / 2.0;
        GeoPoint::new(
            inverse_world_y(wy, scale),
            wrap_lng(inverse_world_x(wx, scale)),
        )
    }

    fn geo_to_pixel(&self, geo: GeoPoint) -> ScreenPoint {
        let scale = world_scale(self.zoom);
        let (cx, cy) = self.center_world(scale);
        // Nearest copy of the world to the center
        let dx = (world_x(geo.lng, scale) - cx + scale / 2.0).rem_euclid(scale) - scale / 2.0;
        let dy = world_y(geo.lat, scale) - cy;
        ScreenPoint::new(self.size.width / 2.0 + dx, self.size.height / 2.0 + dy)
    }

    fn bounds_zoom_level(&self, bounds: &GeoBounds) -> u32 {
        let base = world_scale(0);
        let dx = bounds.lng_span() / 360.0 * base;
        let dy = (world_y(bounds.south_west.lat, base) - world_y(bounds.north_east.lat, base)).abs();

        (0..=MAX_ZOOM_LEVEL)
            .rev()
            .find(|&zoom| {
                let factor = f64::from(1u32 << zoom);
                dx * factor <= self.size.width && dy * factor <= self.size.height
            })
            .unwrap_or(0)
    }

    fn set_center(&mut self, center: GeoPoint, zoom: u32) {
        self.center = center;
        self.zoom = zoom.min(MAX_ZOOM_LEVEL);
    }
}

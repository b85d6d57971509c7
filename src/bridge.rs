//! Pixel ↔ geographic conversion against the host viewport.
//!
//! The host viewport owns projection and zoom computation; the bridge only
//! clamps pixel inputs into the viewport so a drag that leaves the map still
//! projects to a point on its edge.

use crate::geometry::{BorderInsets, GeoBounds, GeoPoint, ScreenPoint, SelectionRect, Size};
use crate::layout::LayoutNode;

/// Capabilities the gesture engine consumes from the host map.
pub trait Viewport {
    /// Layout node of the map's container element.
    fn container(&self) -> &dyn LayoutNode;

    /// Outer size of the map container in pixels.
    fn size(&self) -> Size;

    /// Geographic position of a container pixel.
    fn pixel_to_geo(&self, point: ScreenPoint) -> GeoPoint;

    /// Container pixel of a geographic position.
    fn geo_to_pixel(&self, geo: GeoPoint) -> ScreenPoint;

    /// Highest zoom level at which `bounds` fits in the viewport.
    fn bounds_zoom_level(&self, bounds: &GeoBounds) -> u32;

    /// Recenter the map and change its zoom level.
    fn set_center(&mut self, center: GeoPoint, zoom: u32);
}

/// Clamp a point into `[0, width] × [0, height]`.
#[inline]
pub fn clamp_to(point: ScreenPoint, size: Size) -> ScreenPoint {
    ScreenPoint::new(
        point.x.clamp(0.0, size.width.max(0.0)),
        point.y.clamp(0.0, size.height.max(0.0)),
    )
}

/// Thin wrapper around the host viewport used by the gesture engine.
pub struct CoordinateBridge<V> {
    viewport: V,
}

impl<V: Viewport> CoordinateBridge<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_inner(self) -> V {
        self.viewport
    }

    /// Project a pixel, clamped into the viewport first.
    pub fn pixel_to_geo(&self, point: ScreenPoint) -> GeoPoint {
        self.viewport
            .pixel_to_geo(clamp_to(point, self.viewport.size()))
    }

    pub fn geo_to_pixel(&self, geo: GeoPoint) -> ScreenPoint {
        self.viewport.geo_to_pixel(geo)
    }

    pub fn bounds_zoom_level(&self, bounds: &GeoBounds) -> u32 {
        self.viewport.bounds_zoom_level(bounds)
    }

    pub fn recenter(&mut self, center: GeoPoint, zoom: u32) {
        self.viewport.set_center(center, zoom);
    }

    /// Geographic bounds of a content-space selection.
    ///
    /// The selection is shifted by the container's left/top border so it is
    /// expressed in the container pixel space the host projects from.
    pub fn bounds_for_selection(&self, rect: &SelectionRect, border: &BorderInsets) -> GeoBounds {
        let rect = rect.translate(border.left, border.top);
        GeoBounds::new(
            self.pixel_to_geo(rect.south_west()),
            self.pixel_to_geo(rect.north_east()),
        )
    }

    /// Content-space corners of `bounds` under the current projection.
    ///
    /// Returns `(south_west, north_east)`.
    pub fn selection_for_bounds(
        &self,
        bounds: &GeoBounds,
        border: &BorderInsets,
    ) -> (ScreenPoint, ScreenPoint) {
        let sw = self.geo_to_pixel(bounds.south_west);
        let ne = self.geo_to_pixel(bounds.north_east);
        (
            sw.translate(-border.left, -border.top),
            ne.translate(-border.left, -border.top),
        )
    }
}

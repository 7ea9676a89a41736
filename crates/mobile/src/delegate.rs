//! Foreign-implemented map canvas.
//!
//! The platform map view (MapLibre on Android, MapKit on iOS) implements
//! [`MapCanvasDelegate`]; [`DelegateCanvas`] adapts it to the core canvas
//! seam so the tracker never sees FFI types.

use std::sync::Arc;

use geo::Point;
use pindrop_core::map::{MapCanvas, RouteOverlay, ScreenPoint};

/// A WGS84 coordinate as it crosses the FFI boundary.
#[derive(uniffi::Record, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LatLng> for Point {
    fn from(c: LatLng) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

impl From<Point> for LatLng {
    fn from(p: Point) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

/// Implemented by the platform map view.
///
/// Show/remove calls are paired: the view keeps the one marker and one
/// route line it was last given and drops it on the matching remove.
#[uniffi::export(with_foreign)]
pub trait MapCanvasDelegate: Send + Sync {
    /// Convert a view-space point (logical pixels) into a map coordinate.
    fn screen_to_coordinate(&self, x: f64, y: f64) -> LatLng;

    fn show_marker(&self, at: LatLng);
    fn remove_marker(&self);

    fn show_route(&self, polyline: Vec<LatLng>, distance_m: f64);
    fn remove_route(&self);
}

/// Adapts the FFI delegate to [`MapCanvas`].
pub(crate) struct DelegateCanvas {
    delegate: Arc<dyn MapCanvasDelegate>,
}

impl DelegateCanvas {
    pub(crate) fn new(delegate: Arc<dyn MapCanvasDelegate>) -> Self {
        Self { delegate }
    }
}

impl MapCanvas for DelegateCanvas {
    fn screen_to_coordinate(&self, point: ScreenPoint) -> Point {
        self.delegate.screen_to_coordinate(point.x, point.y).into()
    }

    fn show_marker(&self, at: Point) {
        self.delegate.show_marker(at.into());
    }

    fn remove_marker(&self) {
        self.delegate.remove_marker();
    }

    fn show_route(&self, overlay: &RouteOverlay) {
        let polyline: Vec<LatLng> = overlay.polyline.points().map(LatLng::from).collect();
        self.delegate.show_route(polyline, overlay.distance_m);
    }

    fn remove_route(&self) {
        self.delegate.remove_route();
    }
}

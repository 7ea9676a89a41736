//! Map-facing types and the canvas seam.
//!
//! The actual map view lives on the platform side (MapLibre/MapKit); this
//! module defines what the core needs from it: point conversion and the
//! ability to show or remove exactly one marker and one route line.

use geo::{LineString, Point};

/// A point in view coordinates (logical pixels), as emitted by a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The destination annotation placed on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub coordinate: Point,
}

impl Marker {
    pub fn new(coordinate: Point) -> Self {
        Self { coordinate }
    }
}

/// A drawable walking route.
///
/// The polyline is in lon/lat order (x = longitude, y = latitude), matching
/// `geo` conventions.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteOverlay {
    pub polyline: LineString,
    pub distance_m: f64,
}

impl RouteOverlay {
    pub fn new(polyline: LineString, distance_m: f64) -> Self {
        Self {
            polyline,
            distance_m,
        }
    }
}

/// Render side of the map service.
///
/// Implementations draw by reference: the canvas itself remembers the one
/// marker and one route it was last given, so removal takes no arguments.
pub trait MapCanvas: Send + Sync {
    /// Convert a view-space point into a map coordinate.
    fn screen_to_coordinate(&self, point: ScreenPoint) -> Point;

    fn show_marker(&self, at: Point);
    fn remove_marker(&self);

    fn show_route(&self, overlay: &RouteOverlay);
    fn remove_route(&self);
}

//! # pindrop-core
//!
//! The interaction core of PinDrop: a single-destination walking-route
//! tracker for a map screen.
//!
//! ## Features
//!
//! - **Single destination**: at most one marker and one route overlay at a
//!   time; placing a new destination replaces both
//! - **Stale-result filtering**: route results for a superseded destination
//!   are dropped, regardless of arrival order
//! - **Pluggable collaborators**: the map view and the route planner are
//!   traits, so the platform side and the routing backend are swappable
//! - **OSRM backend**: a ready-made walking-route planner over the OSRM
//!   HTTP API
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use futures_util::future::BoxFuture;
//! use geo::Point;
//! use pindrop_core::prelude::*;
//!
//! struct NullCanvas;
//!
//! impl MapCanvas for NullCanvas {
//!     fn screen_to_coordinate(&self, point: ScreenPoint) -> Point {
//!         Point::new(point.x, point.y)
//!     }
//!     fn show_marker(&self, _at: Point) {}
//!     fn remove_marker(&self) {}
//!     fn show_route(&self, _overlay: &RouteOverlay) {}
//!     fn remove_route(&self) {}
//! }
//!
//! struct NoRoutes;
//!
//! impl RoutePlanner for NoRoutes {
//!     fn plan_route(
//!         &self,
//!         _origin: Point,
//!         _destination: Point,
//!         _mode: TravelMode,
//!     ) -> BoxFuture<'static, pindrop_core::route::Result<Option<RouteOverlay>>> {
//!         Box::pin(std::future::ready(Ok(None)))
//!     }
//! }
//!
//! let mut tracker = DestinationTracker::new(Arc::new(NullCanvas), Arc::new(NoRoutes));
//! tracker.on_location_update(Point::new(-73.9935, 40.7505));
//!
//! // A long-press drops a pin and issues a walking-route request.
//! let pending = tracker.place_destination(Point::new(-73.9772, 40.7527));
//! assert!(pending.is_some());
//! assert_eq!(tracker.marker(), Some(Point::new(-73.9772, 40.7527)));
//! ```

pub mod destination;
pub mod map;
pub mod route;

// Re-exports for convenience
pub mod prelude {
    pub use crate::destination::{DestinationState, DestinationTracker, PendingRoute};
    pub use crate::map::{MapCanvas, Marker, RouteOverlay, ScreenPoint};
    pub use crate::route::{RouteError, RoutePlanner, TravelMode, osrm::OsrmPlanner};
}

pub use prelude::*;

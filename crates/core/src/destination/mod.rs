//! The destination tracker: at most one marker, at most one route.
//!
//! A long-press places a destination pin and, once a location fix exists,
//! issues a walking-route request. Placing a new destination replaces the
//! old marker and route; a route result that arrives for a destination that
//! is no longer the tracked one is dropped.
//!
//! The tracker is a plain `&mut self` state machine with no interior
//! locking. All mutation is expected to happen on one logical thread of
//! control; callers that share it across threads must serialize access
//! (the mobile shim puts it behind a mutex).

use std::sync::Arc;

use futures_util::future::BoxFuture;
use geo::Point;
use tracing::debug;

use crate::map::{MapCanvas, Marker, RouteOverlay, ScreenPoint};
use crate::route::{Result, RoutePlanner, TravelMode};

/// Lifecycle of the single tracked destination.
#[derive(Clone, Debug, PartialEq)]
pub enum DestinationState {
    /// Nothing placed.
    Idle,
    /// A destination pin is placed; no route is drawn (either no location
    /// fix at placement time, the request is still in flight, or it failed).
    Markered { marker: Marker },
    /// A destination pin is placed and its walking route is drawn.
    Routed {
        marker: Marker,
        route: RouteOverlay,
    },
}

impl DestinationState {
    pub fn marker(&self) -> Option<&Marker> {
        match self {
            Self::Idle => None,
            Self::Markered { marker } | Self::Routed { marker, .. } => Some(marker),
        }
    }

    pub fn route(&self) -> Option<&RouteOverlay> {
        match self {
            Self::Idle | Self::Markered { .. } => None,
            Self::Routed { route, .. } => Some(route),
        }
    }
}

/// A route request issued for a freshly placed destination.
///
/// The caller awaits `outcome` and feeds the result back through
/// [`DestinationTracker::on_route_computed`] together with `destination`.
/// That tag is what lets the tracker recognize and drop a result whose
/// destination has been superseded in the meantime.
pub struct PendingRoute {
    pub destination: Point,
    pub outcome: BoxFuture<'static, Result<Option<RouteOverlay>>>,
}

/// Owns the destination lifecycle and drives the map canvas.
pub struct DestinationTracker {
    canvas: Arc<dyn MapCanvas>,
    planner: Arc<dyn RoutePlanner>,
    state: DestinationState,
    current_location: Option<Point>,
}

impl DestinationTracker {
    pub fn new(canvas: Arc<dyn MapCanvas>, planner: Arc<dyn RoutePlanner>) -> Self {
        Self {
            canvas,
            planner,
            state: DestinationState::Idle,
            current_location: None,
        }
    }

    pub fn state(&self) -> &DestinationState {
        &self.state
    }

    /// Coordinate of the tracked destination, if one is placed.
    pub fn marker(&self) -> Option<Point> {
        self.state.marker().map(|m| m.coordinate)
    }

    /// The currently drawn route, if any.
    pub fn route(&self) -> Option<&RouteOverlay> {
        self.state.route()
    }

    pub fn current_location(&self) -> Option<Point> {
        self.current_location
    }

    /// Record a location fix.
    ///
    /// Never triggers a route recomputation; routes are only planned at
    /// placement time.
    pub fn on_location_update(&mut self, coordinate: Point) {
        self.current_location = Some(coordinate);
    }

    /// Gesture entry point: convert the pressed view point and place the
    /// destination there.
    pub fn place_from_screen(&mut self, point: ScreenPoint) -> Option<PendingRoute> {
        let coordinate = self.canvas.screen_to_coordinate(point);
        self.place_destination(coordinate)
    }

    /// Place (or replace) the destination pin and issue a walking-route
    /// request when a location fix is available.
    ///
    /// Returns the pending request so the caller can await it; `None` means
    /// no request was issued (no fix yet) and the destination stays
    /// markered without a route.
    pub fn place_destination(&mut self, coordinate: Point) -> Option<PendingRoute> {
        self.remove_drawn_route();
        self.remove_drawn_marker();

        self.canvas.show_marker(coordinate);
        self.state = DestinationState::Markered {
            marker: Marker::new(coordinate),
        };

        let Some(origin) = self.current_location else {
            debug!(
                destination = ?coordinate,
                "destination placed before first fix; no route requested"
            );
            return None;
        };

        debug!(?origin, destination = ?coordinate, "requesting walking route");
        let outcome = self
            .planner
            .plan_route(origin, coordinate, TravelMode::Walking);

        Some(PendingRoute {
            destination: coordinate,
            outcome,
        })
    }

    /// Feed back a completed route request.
    ///
    /// `requested_destination` is the tag the request was issued with. A
    /// result whose tag no longer matches the tracked marker is dropped
    /// silently; a missing overlay (no path found / request failed) leaves
    /// the state markered without a route.
    pub fn on_route_computed(
        &mut self,
        requested_destination: Point,
        overlay: Option<RouteOverlay>,
    ) {
        let Some(current) = self.marker() else {
            debug!(?requested_destination, "dropping route result: nothing tracked");
            return;
        };
        if current != requested_destination {
            debug!(
                ?requested_destination,
                tracked = ?current,
                "dropping stale route result"
            );
            return;
        }
        let Some(overlay) = overlay else {
            debug!(destination = ?current, "route request completed without a path");
            return;
        };

        self.remove_drawn_route();
        self.canvas.show_route(&overlay);
        self.state = DestinationState::Routed {
            marker: Marker::new(current),
            route: overlay,
        };
    }

    /// Remove the pin and route, if any. Idempotent.
    pub fn clear(&mut self) {
        self.remove_drawn_route();
        self.remove_drawn_marker();
        self.state = DestinationState::Idle;
    }

    fn remove_drawn_route(&mut self) {
        if self.state.route().is_some() {
            self.canvas.remove_route();
        }
    }

    fn remove_drawn_marker(&mut self) {
        if self.state.marker().is_some() {
            self.canvas.remove_marker();
        }
    }
}

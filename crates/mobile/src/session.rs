//! The single-screen tracking session exposed to the platform.
//!
//! One session per map screen. The platform feeds gestures and location
//! fixes in; the session drives the map through the canvas delegate and
//! runs route requests on its own runtime so no exported call blocks.

use std::sync::Arc;

use geo::Point;
use tokio::runtime::Runtime;
use tokio::sync::Mutex;
use tracing::warn;

use pindrop_core::destination::DestinationTracker;
use pindrop_core::map::ScreenPoint;
use pindrop_core::route::osrm::{OsrmConfig, OsrmPlanner};

use crate::delegate::{DelegateCanvas, LatLng, MapCanvasDelegate};

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum SessionError {
    #[error("{0}")]
    Runtime(String),
}

#[derive(uniffi::Object)]
pub struct TrackerSession {
    tracker: Arc<Mutex<DestinationTracker>>,
    #[allow(dead_code)] // Kept alive so in-flight route requests can finish
    runtime: Runtime,
}

#[uniffi::export]
impl TrackerSession {
    /// `osrm_url` overrides the default public OSRM instance. Fails only
    /// if the route runtime cannot be started.
    #[uniffi::constructor]
    pub fn new(
        delegate: Arc<dyn MapCanvasDelegate>,
        osrm_url: Option<String>,
    ) -> Result<Self, SessionError> {
        let config = match osrm_url {
            Some(url) => OsrmConfig::with_base_url(url),
            None => OsrmConfig::default(),
        };
        let canvas = Arc::new(DelegateCanvas::new(delegate));
        let planner = Arc::new(OsrmPlanner::new(config));
        let runtime = Runtime::new().map_err(|e| SessionError::Runtime(e.to_string()))?;

        Ok(Self {
            tracker: Arc::new(Mutex::new(DestinationTracker::new(canvas, planner))),
            runtime,
        })
    }

    /// Long-press gesture: drop the destination pin and, if a fix exists,
    /// request a walking route.
    ///
    /// The request completes in the background; a result for a destination
    /// that was replaced in the meantime is dropped by the tracker.
    pub fn on_long_press(&self, x: f64, y: f64) {
        let pending = self
            .tracker
            .blocking_lock()
            .place_from_screen(ScreenPoint::new(x, y));
        let Some(pending) = pending else {
            return;
        };

        let tracker = Arc::clone(&self.tracker);
        self.runtime.spawn(async move {
            let overlay = match pending.outcome.await {
                Ok(overlay) => overlay,
                Err(error) => {
                    // Surfaced to the user only as the absence of a line.
                    warn!(%error, "walking route request failed");
                    None
                }
            };
            tracker
                .lock()
                .await
                .on_route_computed(pending.destination, overlay);
        });
    }

    /// Location-service callback: record the newest fix. Never replans.
    pub fn on_location_update(&self, location: LatLng) {
        self.tracker
            .blocking_lock()
            .on_location_update(Point::from(location));
    }

    /// The "remove pin and route" button. Idempotent.
    pub fn clear(&self) {
        self.tracker.blocking_lock().clear();
    }

    /// Coordinate of the tracked destination, if one is placed.
    pub fn destination(&self) -> Option<LatLng> {
        self.tracker.blocking_lock().marker().map(LatLng::from)
    }

    pub fn has_route(&self) -> bool {
        self.tracker.blocking_lock().route().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct FakeMapView {
        markers_shown: Mutex<Vec<LatLng>>,
    }

    impl MapCanvasDelegate for FakeMapView {
        fn screen_to_coordinate(&self, x: f64, y: f64) -> LatLng {
            // Pretend the view projects pixels 1:1 onto coordinates.
            LatLng {
                latitude: y,
                longitude: x,
            }
        }

        fn show_marker(&self, at: LatLng) {
            self.markers_shown.lock().unwrap().push(at);
        }

        fn remove_marker(&self) {}
        fn show_route(&self, _polyline: Vec<LatLng>, _distance_m: f64) {}
        fn remove_route(&self) {}
    }

    #[test]
    fn test_construction_reports_errors_instead_of_panicking() {
        let view = Arc::new(FakeMapView::default());

        let session = TrackerSession::new(view, Some("http://osrm.local".to_owned()));

        assert!(session.is_ok());
    }

    #[test]
    fn test_long_press_before_first_fix_places_pin_only() {
        let view = Arc::new(FakeMapView::default());
        let session = TrackerSession::new(view.clone(), None).unwrap();

        // No fix yet, so no route request goes out (nothing touches the
        // network here).
        session.on_long_press(20.0, 20.0);

        assert_eq!(
            session.destination(),
            Some(LatLng {
                latitude: 20.0,
                longitude: 20.0,
            })
        );
        assert!(!session.has_route());
        assert_eq!(view.markers_shown.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_resets_session() {
        let view = Arc::new(FakeMapView::default());
        let session = TrackerSession::new(view, None).unwrap();

        session.on_long_press(20.0, 20.0);
        session.clear();

        assert_eq!(session.destination(), None);
        assert!(!session.has_route());

        // A second clear is a no-op, not an error.
        session.clear();
        assert_eq!(session.destination(), None);
    }
}

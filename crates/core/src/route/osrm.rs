//! Walking routes from an OSRM HTTP endpoint.
//!
//! Speaks the OSRM v5 `route` API with GeoJSON geometry. Any server with a
//! foot profile works, including the public demo instance.

use futures_util::future::BoxFuture;
use geo::{LineString, Point};
use serde::Deserialize;
use tracing::debug;

use crate::map::RouteOverlay;
use crate::route::{Result, RouteError, RoutePlanner, TravelMode};

/// Endpoint configuration for an OSRM server.
#[derive(Clone, Debug)]
pub struct OsrmConfig {
    /// Server root, without a trailing slash (e.g. `http://router.example.com`).
    pub base_url: String,
    /// Routing profile name as exposed by the server.
    pub profile: String,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_owned(),
            profile: "foot".to_owned(),
        }
    }
}

impl OsrmConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    fn route_url(&self, origin: Point, destination: Point) -> String {
        // OSRM takes lon,lat pairs; full overview so the drawn line follows
        // the actual path instead of a simplified sketch.
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.base_url.trim_end_matches('/'),
            self.profile,
            origin.x(),
            origin.y(),
            destination.x(),
            destination.y(),
        )
    }
}

/// [`RoutePlanner`] backed by an OSRM server.
#[derive(Clone, Debug)]
pub struct OsrmPlanner {
    client: reqwest::Client,
    config: OsrmConfig,
}

impl OsrmPlanner {
    pub fn new(config: OsrmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Default for OsrmPlanner {
    fn default() -> Self {
        Self::new(OsrmConfig::default())
    }
}

impl RoutePlanner for OsrmPlanner {
    fn plan_route(
        &self,
        origin: Point,
        destination: Point,
        mode: TravelMode,
    ) -> BoxFuture<'static, Result<Option<RouteOverlay>>> {
        // The profile is fixed per server config; the mode only exists to
        // keep the request shape explicit.
        let TravelMode::Walking = mode;

        let url = self.config.route_url(origin, destination);
        let client = self.client.clone();

        Box::pin(async move {
            debug!(%url, "requesting walking route");
            let response = client.get(&url).send().await?.error_for_status()?;
            let body: OsrmResponse = response.json().await?;
            decode_response(body)
        })
    }
}

// ============================================================================
// Wire Format
// ============================================================================

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

fn decode_response(body: OsrmResponse) -> Result<Option<RouteOverlay>> {
    match body.code.as_str() {
        "Ok" => {
            let Some(route) = body.routes.into_iter().next() else {
                return Ok(None);
            };
            if route.geometry.coordinates.len() < 2 {
                return Err(RouteError::InvalidResponse(format!(
                    "route geometry has {} coordinates",
                    route.geometry.coordinates.len()
                )));
            }
            let polyline = LineString::from(
                route
                    .geometry
                    .coordinates
                    .into_iter()
                    .map(|[lon, lat]| (lon, lat))
                    .collect::<Vec<_>>(),
            );
            Ok(Some(RouteOverlay::new(polyline, route.distance)))
        }
        // "No path found" is a normal outcome, not an error.
        "NoRoute" | "NoSegment" => Ok(None),
        code => Err(RouteError::Service {
            code: code.to_owned(),
            message: body.message.unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_route_url() {
        let config = OsrmConfig::with_base_url("http://osrm.local/");
        let url = config.route_url(
            Point::new(-73.9935, 40.7505),
            Point::new(-73.9772, 40.7527),
        );

        assert_eq!(
            url,
            "http://osrm.local/route/v1/foot/-73.993500,40.750500;-73.977200,40.752700\
             ?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn test_decode_route() {
        let body: OsrmResponse = serde_json::from_str(
            r#"{
                "code": "Ok",
                "routes": [{
                    "distance": 1532.7,
                    "duration": 1103.0,
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[-73.9935, 40.7505], [-73.9860, 40.7516], [-73.9772, 40.7527]]
                    }
                }],
                "waypoints": []
            }"#,
        )
        .unwrap();

        let overlay = decode_response(body).unwrap().expect("route expected");
        assert_relative_eq!(overlay.distance_m, 1532.7);
        assert_eq!(overlay.polyline.0.len(), 3);
        assert_relative_eq!(overlay.polyline.0[0].x, -73.9935);
        assert_relative_eq!(overlay.polyline.0[2].y, 40.7527);
    }

    #[test]
    fn test_decode_no_route() {
        let body: OsrmResponse = serde_json::from_str(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        )
        .unwrap();

        assert!(decode_response(body).unwrap().is_none());
    }

    #[test]
    fn test_decode_service_error() {
        let body: OsrmResponse = serde_json::from_str(
            r#"{"code": "InvalidQuery", "message": "Query string malformed"}"#,
        )
        .unwrap();

        match decode_response(body) {
            Err(RouteError::Service { code, message }) => {
                assert_eq!(code, "InvalidQuery");
                assert_eq!(message, "Query string malformed");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_degenerate_geometry() {
        let body: OsrmResponse = serde_json::from_str(
            r#"{
                "code": "Ok",
                "routes": [{
                    "distance": 0.0,
                    "geometry": {"type": "LineString", "coordinates": [[-73.9935, 40.7505]]}
                }]
            }"#,
        )
        .unwrap();

        assert!(matches!(
            decode_response(body),
            Err(RouteError::InvalidResponse(_))
        ));
    }
}

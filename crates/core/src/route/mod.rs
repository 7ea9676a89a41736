//! Route planning seam and errors.
//!
//! The planner is pluggable: the core only needs "origin + destination in,
//! zero or one overlay out, asynchronously". [`osrm`] provides the real
//! HTTP-backed implementation.

use futures_util::future::BoxFuture;
use geo::Point;

use crate::map::RouteOverlay;

pub mod osrm;

/// Transport mode for a route request.
///
/// Walking only; the request carries it explicitly so it mirrors the shape
/// of platform directions APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Walking,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("route request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("route service returned {code}: {message}")]
    Service { code: String, message: String },

    #[error("invalid route response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;

// ============================================================================
// Planner Trait
// ============================================================================

/// Asynchronous route computation.
///
/// `Ok(None)` means the service found no path between the endpoints; `Err`
/// means the request itself failed. The tracker treats both the same way
/// (no overlay to draw), so implementations should reserve `Err` for
/// transport and decoding problems.
pub trait RoutePlanner: Send + Sync {
    fn plan_route(
        &self,
        origin: Point,
        destination: Point,
        mode: TravelMode,
    ) -> BoxFuture<'static, Result<Option<RouteOverlay>>>;
}

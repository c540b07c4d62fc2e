//! LocationIQ integration for Geodesk
//!
//! Typed client for the [LocationIQ](https://locationiq.com) geospatial REST
//! API: forward and reverse geocoding, autocomplete, directions, travel-time
//! matrices, nearest road lookup, timezone resolution, nearby points of
//! interest, static map URLs, and account balance.
//!
//! # Architecture
//!
//! [`GeoPlatformClient`] defines one operation per network endpoint and is
//! implemented by [`LocationIqClient`], which owns the API key and base URL
//! for its lifetime and is immutable after construction. Each operation maps
//! a typed request to an explicit, ordered query-parameter list (see
//! `params`), issues a single GET, and classifies failures into
//! [`LocationIqError`]. The client never retries, caches, or recovers.
//!
//! Explicit construction is the primary path; the [`registry`] module offers
//! a thin process-wide accessor for callers that cannot thread a client
//! reference through every call site.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_locationiq::{GeocodingRequest, LocationIqClient, LocationIqConfig};
//!
//! let config = LocationIqConfig::new("pk.my-key");
//! let client = LocationIqClient::new(&config)?;
//!
//! let places = client.geocode(&GeocodingRequest::new("Paris")).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod params;
pub mod registry;
mod static_map;

pub use client::{GeoPlatformClient, LocationIqClient};
pub use config::{DEFAULT_BASE_URL, LocationIqConfig};
pub use error::LocationIqError;
pub use models::{
    AccountBalance, AddressDetails, AutocompleteRequest, AutocompleteResult, GeoJsonGeometry,
    GeocodingRequest, GeocodingResult, Geometries, ImageFormat, Maneuver, MapMarker, MatrixRequest,
    MatrixResult, MatrixWaypoint, NearbyPoiRequest, NearbyPoiResult, NearestRequest, NearestResult,
    NearestWaypoint, Profile, ReverseGeocodingRequest, ReverseGeocodingResult, RouteGeometry,
    RoutingLeg, RoutingRequest, RoutingRoute, RoutingStep, StaticMapRequest, TimezoneResult,
};

//! Typed request and response models for the LocationIQ API
//!
//! Response types spell out which fields the API always returns and which
//! are conditional; a response missing a mandatory field fails decoding
//! instead of passing through an unknown shape. Coordinates arrive on the
//! wire as strings and stay strings here; use the `coordinate()` accessors
//! to lift them into the domain type.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use domain::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::LocationIqError;

/// Travel profile for the routing family of endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Driving (the API default)
    #[default]
    Car,
    /// Cycling
    Bike,
    /// Walking
    Foot,
}

impl Profile {
    /// The URL path segment for this profile
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Foot => "foot",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry encoding requested from the directions endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometries {
    /// GeoJSON line strings
    #[default]
    GeoJson,
    /// Encoded polyline, precision 5
    Polyline,
    /// Encoded polyline, precision 6
    Polyline6,
}

impl Geometries {
    /// The query-parameter value for this encoding
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeoJson => "geojson",
            Self::Polyline => "polyline",
            Self::Polyline6 => "polyline6",
        }
    }
}

/// Image format for static map URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpg,
    /// GIF image
    Gif,
}

impl ImageFormat {
    /// The query-parameter value for this format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Gif => "gif",
        }
    }
}

/// Structured address details, present when `addressdetails` was requested
/// (always present in autocomplete responses)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressDetails {
    /// Feature name (autocomplete only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbourhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

fn parse_wire_coordinate(lat: &str, lon: &str) -> Result<Coordinate, LocationIqError> {
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| LocationIqError::Decode(format!("invalid latitude in response: {lat}")))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| LocationIqError::Decode(format!("invalid longitude in response: {lon}")))?;
    Coordinate::new(latitude, longitude).map_err(|e| LocationIqError::Decode(e.to_string()))
}

// --- Geocoding ---

/// One forward-geocoding match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<String>,
    /// Latitude as the wire sends it (decimal string)
    pub lat: String,
    /// Longitude as the wire sends it (decimal string)
    pub lon: String,
    /// Full display name of the match
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    /// `[min_lat, max_lat, min_lon, max_lon]` as decimal strings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundingbox: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Present when `addressdetails` was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
}

impl GeocodingResult {
    /// Parse the wire lat/lon strings into a validated coordinate
    ///
    /// # Errors
    ///
    /// Returns `Decode` if either value is not a decimal number in range.
    pub fn coordinate(&self) -> Result<Coordinate, LocationIqError> {
        parse_wire_coordinate(&self.lat, &self.lon)
    }
}

/// Result of a reverse-geocoding lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodingResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<String>,
    /// Latitude as the wire sends it (decimal string)
    pub lat: String,
    /// Longitude as the wire sends it (decimal string)
    pub lon: String,
    /// Full display name of the address
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundingbox: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
}

impl ReverseGeocodingResult {
    /// Parse the wire lat/lon strings into a validated coordinate
    ///
    /// # Errors
    ///
    /// Returns `Decode` if either value is not a decimal number in range.
    pub fn coordinate(&self) -> Result<Coordinate, LocationIqError> {
        parse_wire_coordinate(&self.lat, &self.lon)
    }
}

/// One autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    /// Latitude as the wire sends it (decimal string)
    pub lat: String,
    /// Longitude as the wire sends it (decimal string)
    pub lon: String,
    /// Full display name of the suggestion
    pub display_name: String,
    /// Name of the matched place itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_place: Option<String>,
    /// Address portion of the display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundingbox: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
}

impl AutocompleteResult {
    /// Parse the wire lat/lon strings into a validated coordinate
    ///
    /// # Errors
    ///
    /// Returns `Decode` if either value is not a decimal number in range.
    pub fn coordinate(&self) -> Result<Coordinate, LocationIqError> {
        parse_wire_coordinate(&self.lat, &self.lon)
    }
}

// --- Routing ---

/// Route geometry, either GeoJSON or an encoded polyline depending on the
/// `geometries` request parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteGeometry {
    /// GeoJSON line string
    GeoJson(GeoJsonGeometry),
    /// Encoded polyline string
    Encoded(String),
}

/// GeoJSON line-string geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonGeometry {
    /// `[lon, lat]` pairs
    pub coordinates: Vec<[f64; 2]>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Turn maneuver within a routing step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// `[lon, lat]` of the maneuver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearing_before: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearing_after: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One navigation step within a routing leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingStep {
    /// Step distance in meters
    pub distance: f64,
    /// Step duration in seconds
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RouteGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver: Option<Maneuver>,
}

/// One leg of a route (between consecutive waypoints)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingLeg {
    /// Leg distance in meters
    pub distance: f64,
    /// Leg duration in seconds
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Present when `steps` was requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<RoutingStep>,
}

/// A complete route from the directions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingRoute {
    /// Total distance in meters
    pub distance: f64,
    /// Total duration in seconds
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RouteGeometry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<RoutingLeg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

// --- Matrix ---

/// Snapped source/destination point in a matrix response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixWaypoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// `[lon, lat]` of the snapped point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
    /// Snap distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Duration/distance matrix between coordinate sets
///
/// `durations` and `distances` are each present only when the corresponding
/// annotation was requested; unroutable cells are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixResult {
    /// `"Ok"` on success
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<Vec<Vec<Option<f64>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<Vec<Option<f64>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<MatrixWaypoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<MatrixWaypoint>>,
}

// --- Nearest ---

/// Road-network point snapped by the nearest endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestWaypoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `[lon, lat]` of the snapped point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
    /// Snap distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Response of the nearest endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestResult {
    /// `"Ok"` on success
    pub code: String,
    /// Snapped road-network points, the endpoint's payload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<NearestWaypoint>,
    /// Mirrors the wire shape; the endpoint does not compute routes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RoutingRoute>,
}

// --- Timezone ---

/// Timezone information for a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneResult {
    /// IANA timezone name, e.g. `America/New_York`
    pub timezone: String,
    /// Short abbreviation, e.g. `EST`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    /// UTC offset, e.g. `-05:00`
    pub utc_offset: String,
    /// Whether daylight saving time is in effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dst: Option<bool>,
    /// Current local time at the coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time: Option<DateTime<FixedOffset>>,
}

// --- Nearby POI ---

/// One nearby point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPoiResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full display name of the POI
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundingbox: Vec<String>,
    /// Latitude as the wire sends it (decimal string)
    pub lat: String,
    /// Longitude as the wire sends it (decimal string)
    pub lon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
}

impl NearbyPoiResult {
    /// Parse the wire lat/lon strings into a validated coordinate
    ///
    /// # Errors
    ///
    /// Returns `Decode` if either value is not a decimal number in range.
    pub fn coordinate(&self) -> Result<Coordinate, LocationIqError> {
        parse_wire_coordinate(&self.lat, &self.lon)
    }
}

// --- Balance ---

/// Account balance as reported by the balance endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Remaining request balance
    pub balance: f64,
    /// Currency or unit of the balance
    pub currency: String,
}

// --- Requests ---

/// Parameters for forward geocoding (`/search`)
///
/// Only `query` is mandatory; optional fields are serialized only when set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodingRequest {
    /// Free-form query text
    pub query: String,
    /// Comma-separated ISO 3166-1 alpha-2 codes to restrict results
    pub countrycodes: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
    /// Preferred result area, `minLon,minLat,maxLon,maxLat`
    pub viewbox: Option<String>,
    /// Restrict results strictly to the viewbox
    pub bounded: Option<bool>,
    /// Include a structured address breakdown
    pub addressdetails: Option<bool>,
    /// Include name details
    pub namedetails: Option<bool>,
    /// Include extra OSM tags
    pub extratags: Option<bool>,
    /// Preferred result language
    pub accept_language: Option<String>,
}

impl GeocodingRequest {
    /// Create a request with just the query text
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Parameters for reverse geocoding (`/reverse`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReverseGeocodingRequest {
    /// Latitude of the point to describe
    pub lat: f64,
    /// Longitude of the point to describe
    pub lon: f64,
    /// Detail level of the returned address (country .. building)
    pub zoom: Option<u8>,
    /// Include a structured address breakdown
    pub addressdetails: Option<bool>,
    /// Include name details
    pub namedetails: Option<bool>,
    /// Include extra OSM tags
    pub extratags: Option<bool>,
    /// Preferred result language
    pub accept_language: Option<String>,
}

impl ReverseGeocodingRequest {
    /// Create a request for the given point
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Self::default()
        }
    }
}

/// Parameters for autocomplete (`/autocomplete`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutocompleteRequest {
    /// Partial query text
    pub query: String,
    /// Comma-separated ISO 3166-1 alpha-2 codes to restrict results
    pub countrycodes: Option<String>,
    /// Maximum number of suggestions
    pub limit: Option<u32>,
    /// Preferred result area, `minLon,minLat,maxLon,maxLat`
    pub viewbox: Option<String>,
    /// Restrict results strictly to the viewbox
    pub bounded: Option<bool>,
    /// Merge duplicate suggestions
    pub dedupe: Option<bool>,
    /// Restrict suggestions to an OSM tag, e.g. `place:city`
    pub tag: Option<String>,
    /// Preferred result language
    pub accept_language: Option<String>,
}

impl AutocompleteRequest {
    /// Create a request with just the partial query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Parameters for the directions endpoint (`/directions/{profile}/{coords}`)
///
/// Coordinate pairs are forwarded verbatim in the order supplied; the routing
/// engine expects longitude-first pairs. At least two pairs are required.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutingRequest {
    /// Waypoints of the route, at least two
    pub coordinates: Vec<(f64, f64)>,
    /// Travel profile path segment
    pub profile: Profile,
    /// Search for alternative routes
    pub alternatives: Option<bool>,
    /// Return per-leg navigation steps
    pub steps: Option<bool>,
    /// Extra per-segment metadata, e.g. `duration`, `distance`
    pub annotations: Option<Vec<String>>,
    /// Geometry encoding of returned routes
    pub geometries: Geometries,
    /// Force the route to keep going straight at waypoints
    pub continue_straight: Option<bool>,
    /// Display names for the waypoints
    pub waypoint_names: Option<Vec<String>>,
    /// Indices of input coordinates to treat as via points
    pub waypoints: Option<Vec<u32>>,
    /// Curb-side approach per waypoint
    pub approaches: Option<Vec<String>>,
    /// Road classes to avoid, e.g. `toll`, `motorway`, `ferry`
    pub exclude: Option<Vec<String>>,
}

impl RoutingRequest {
    /// Create a request for the given waypoints with default options
    #[must_use]
    pub fn new(coordinates: Vec<(f64, f64)>) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }
}

/// Parameters for the matrix endpoint (`/matrix/{profile}/{coords}`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatrixRequest {
    /// Coordinate pairs, at least two, forwarded verbatim
    pub coordinates: Vec<(f64, f64)>,
    /// Travel profile path segment
    pub profile: Profile,
    /// Indices of coordinates to use as sources
    pub sources: Option<Vec<u32>>,
    /// Indices of coordinates to use as destinations
    pub destinations: Option<Vec<u32>>,
    /// Which matrices to compute, e.g. `duration`, `distance`
    pub annotations: Option<Vec<String>>,
    /// Road classes to avoid
    pub exclude: Option<Vec<String>>,
}

impl MatrixRequest {
    /// Create a request for the given coordinate set with default options
    #[must_use]
    pub fn new(coordinates: Vec<(f64, f64)>) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }
}

/// Parameters for the nearest endpoint (`/nearest/{profile}/{coords}`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NearestRequest {
    /// Coordinate pairs, at least two, forwarded verbatim
    pub coordinates: Vec<(f64, f64)>,
    /// Travel profile path segment
    pub profile: Profile,
    /// Number of snapped points to return
    pub number: Option<u32>,
    /// Road classes to avoid
    pub exclude: Option<Vec<String>>,
}

impl NearestRequest {
    /// Create a request for the given coordinate set with default options
    #[must_use]
    pub fn new(coordinates: Vec<(f64, f64)>) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }
}

/// Parameters for the nearby points-of-interest endpoint (`/nearby`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NearbyPoiRequest {
    /// Latitude of the search center
    pub lat: f64,
    /// Longitude of the search center
    pub lon: f64,
    /// POI category tag, e.g. `restaurant`
    pub tag: Option<String>,
    /// Search radius in meters
    pub radius: Option<u32>,
    /// Maximum number of results
    pub limit: Option<u32>,
}

impl NearbyPoiRequest {
    /// Create a request centered on the given point
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Self::default()
        }
    }
}

/// A marker on a static map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapMarker {
    /// Marker latitude
    pub lat: f64,
    /// Marker longitude
    pub lon: f64,
    /// Marker size, e.g. `small`, `mid`, `large`
    pub size: Option<String>,
    /// Marker color name or hex value
    pub color: Option<String>,
    /// Icon identifier
    pub icon: Option<String>,
}

impl MapMarker {
    /// Create a marker at the given point with default appearance
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Self::default()
        }
    }
}

/// Parameters for static map URL construction (`/staticmap`)
///
/// Building the URL is pure; the image itself is fetched by whoever renders it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticMapRequest {
    /// Map center as `(lat, lon)`
    pub center: Option<(f64, f64)>,
    /// Zoom level
    pub zoom: Option<u8>,
    /// Image size as `(width, height)` in pixels
    pub size: Option<(u32, u32)>,
    /// Image format
    pub format: Option<ImageFormat>,
    /// Map style identifier
    pub style: Option<String>,
    /// Markers to draw, rendered in the given order
    pub markers: Vec<MapMarker>,
}

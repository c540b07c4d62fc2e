//! LocationIQ HTTP client
//!
//! One GET per operation against the configured base URL. Failures are
//! classified into [`LocationIqError`] and re-raised; there is no retry,
//! caching, or recovery at this layer.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::LocationIqConfig;
use crate::error::LocationIqError;
use crate::models::{
    AccountBalance, AutocompleteRequest, AutocompleteResult, GeocodingRequest, GeocodingResult,
    MatrixRequest, MatrixResult, NearbyPoiRequest, NearbyPoiResult, NearestRequest, NearestResult,
    ReverseGeocodingRequest, ReverseGeocodingResult, RoutingRequest, RoutingRoute, TimezoneResult,
};
use crate::params::{QueryParams, join_coordinates};

/// Fixed transport timeout; deliberately not configurable
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Autocomplete queries shorter than this resolve to an empty list without
/// a network call
const MIN_AUTOCOMPLETE_LEN: usize = 3;

/// The routing family requires at least this many coordinate pairs
const MIN_ROUTE_COORDINATES: usize = 2;

/// Trait for geospatial platform clients
#[async_trait]
pub trait GeoPlatformClient: Send + Sync + fmt::Debug {
    /// Convert a free-form query into geocoding matches
    async fn geocode(
        &self,
        request: &GeocodingRequest,
    ) -> Result<Vec<GeocodingResult>, LocationIqError>;

    /// Convert a coordinate into an address
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseGeocodingResult, LocationIqError>;

    /// Reverse geocode with full request options
    async fn reverse_geocode_with(
        &self,
        request: &ReverseGeocodingRequest,
    ) -> Result<ReverseGeocodingResult, LocationIqError>;

    /// Suggest completions for a partial query
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<AutocompleteResult>, LocationIqError>;

    /// Compute routes through the given waypoints
    async fn directions(
        &self,
        request: &RoutingRequest,
    ) -> Result<Vec<RoutingRoute>, LocationIqError>;

    /// Compute a duration/distance matrix between coordinates
    async fn matrix(&self, request: &MatrixRequest) -> Result<MatrixResult, LocationIqError>;

    /// Snap coordinates to the nearest road-network points
    async fn nearest(&self, request: &NearestRequest) -> Result<NearestResult, LocationIqError>;

    /// Resolve the timezone at a coordinate
    async fn timezone(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<TimezoneResult, LocationIqError>;

    /// Find points of interest near a coordinate
    async fn nearby_poi(
        &self,
        request: &NearbyPoiRequest,
    ) -> Result<Vec<NearbyPoiResult>, LocationIqError>;

    /// Fetch the account's remaining request balance
    async fn balance(&self) -> Result<AccountBalance, LocationIqError>;
}

/// HTTP client for the LocationIQ API
///
/// Owns the API key and base URL for its lifetime; immutable after
/// construction, so a reference captured at call time stays valid even if
/// the process-wide registry is re-initialized mid-flight.
#[derive(Debug)]
pub struct LocationIqClient {
    client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl LocationIqClient {
    /// Create a new client from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the config is invalid (empty API key) and
    /// `Transport` if the HTTP client cannot be initialized.
    pub fn new(config: &LocationIqConfig) -> Result<Self, LocationIqError> {
        config.validate().map_err(LocationIqError::Configuration)?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(LocationIqError::Transport)?;

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Classify a non-success status; pass successful responses through
    async fn check_status(response: Response) -> Result<Response, LocationIqError> {
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(LocationIqError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after_secs = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                Err(LocationIqError::RateLimited { retry_after_secs })
            }
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.unwrap_or_default();
                Err(LocationIqError::BadRequest(body))
            }
            status => match response.error_for_status() {
                Ok(response) => Ok(response),
                Err(source) => Err(LocationIqError::Http { status, source }),
            },
        }
    }

    /// Issue one GET and decode the JSON body
    ///
    /// Injects the API key and output format on every call.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, LocationIqError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "Sending LocationIQ request");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("format", "json")])
            .query(params)
            .send()
            .await
            .map_err(LocationIqError::Transport)?;

        let response = Self::check_status(response).await?;

        let body = response.text().await.map_err(LocationIqError::Transport)?;
        serde_json::from_str(&body).map_err(|e| LocationIqError::Decode(e.to_string()))
    }

    fn ensure_route_coordinates(
        coordinates: &[(f64, f64)],
        endpoint: &'static str,
    ) -> Result<(), LocationIqError> {
        if coordinates.len() < MIN_ROUTE_COORDINATES {
            return Err(LocationIqError::InvalidArgument(format!(
                "{endpoint} requires at least {MIN_ROUTE_COORDINATES} coordinates"
            )));
        }
        Ok(())
    }
}

/// Wire shape of the directions response; the client unwraps `routes`
#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<RoutingRoute>,
}

#[async_trait]
impl GeoPlatformClient for LocationIqClient {
    #[instrument(skip(self, request), fields(query = %request.query))]
    async fn geocode(
        &self,
        request: &GeocodingRequest,
    ) -> Result<Vec<GeocodingResult>, LocationIqError> {
        if request.query.trim().is_empty() {
            return Err(LocationIqError::InvalidArgument(
                "geocoding query must not be empty".to_string(),
            ));
        }

        self.get_json("/search", &request.query_params()).await
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseGeocodingResult, LocationIqError> {
        self.reverse_geocode_with(&ReverseGeocodingRequest::new(latitude, longitude))
            .await
    }

    #[instrument(skip(self, request), fields(lat = request.lat, lon = request.lon))]
    async fn reverse_geocode_with(
        &self,
        request: &ReverseGeocodingRequest,
    ) -> Result<ReverseGeocodingResult, LocationIqError> {
        self.get_json("/reverse", &request.query_params()).await
    }

    #[instrument(skip(self, request), fields(query = %request.query))]
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<AutocompleteResult>, LocationIqError> {
        if request.query.trim().len() < MIN_AUTOCOMPLETE_LEN {
            debug!("Autocomplete query below minimum length, skipping request");
            return Ok(Vec::new());
        }

        self.get_json("/autocomplete", &request.query_params()).await
    }

    #[instrument(
        skip(self, request),
        fields(profile = %request.profile, waypoints = request.coordinates.len())
    )]
    async fn directions(
        &self,
        request: &RoutingRequest,
    ) -> Result<Vec<RoutingRoute>, LocationIqError> {
        Self::ensure_route_coordinates(&request.coordinates, "directions")?;

        let path = format!(
            "/directions/{}/{}",
            request.profile.as_str(),
            join_coordinates(&request.coordinates)
        );
        let response: DirectionsResponse = self.get_json(&path, &request.query_params()).await?;
        Ok(response.routes)
    }

    #[instrument(
        skip(self, request),
        fields(profile = %request.profile, waypoints = request.coordinates.len())
    )]
    async fn matrix(&self, request: &MatrixRequest) -> Result<MatrixResult, LocationIqError> {
        Self::ensure_route_coordinates(&request.coordinates, "matrix")?;

        let path = format!(
            "/matrix/{}/{}",
            request.profile.as_str(),
            join_coordinates(&request.coordinates)
        );
        self.get_json(&path, &request.query_params()).await
    }

    #[instrument(
        skip(self, request),
        fields(profile = %request.profile, waypoints = request.coordinates.len())
    )]
    async fn nearest(&self, request: &NearestRequest) -> Result<NearestResult, LocationIqError> {
        Self::ensure_route_coordinates(&request.coordinates, "nearest")?;

        let path = format!(
            "/nearest/{}/{}",
            request.profile.as_str(),
            join_coordinates(&request.coordinates)
        );
        self.get_json(&path, &request.query_params()).await
    }

    #[instrument(skip(self))]
    async fn timezone(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<TimezoneResult, LocationIqError> {
        let params: QueryParams = vec![
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
        ];
        self.get_json("/timezone", &params).await
    }

    #[instrument(skip(self, request), fields(lat = request.lat, lon = request.lon))]
    async fn nearby_poi(
        &self,
        request: &NearbyPoiRequest,
    ) -> Result<Vec<NearbyPoiResult>, LocationIqError> {
        self.get_json("/nearby", &request.query_params()).await
    }

    #[instrument(skip(self))]
    async fn balance(&self) -> Result<AccountBalance, LocationIqError> {
        self.get_json("/balance", &QueryParams::new()).await
    }
}

//! Shared test doubles and fixtures for the query state machines

use async_trait::async_trait;
use integration_locationiq::{
    AccountBalance, AutocompleteRequest, AutocompleteResult, GeoPlatformClient, GeocodingRequest,
    GeocodingResult, LocationIqError, MatrixRequest, MatrixResult, NearbyPoiRequest,
    NearbyPoiResult, NearestRequest, NearestResult, ReverseGeocodingRequest,
    ReverseGeocodingResult, RoutingRequest, RoutingRoute, TimezoneResult,
};
use mockall::mock;

mock! {
    #[derive(Debug)]
    pub GeoClient {}

    #[async_trait]
    impl GeoPlatformClient for GeoClient {
        async fn geocode(
            &self,
            request: &GeocodingRequest,
        ) -> Result<Vec<GeocodingResult>, LocationIqError>;

        async fn reverse_geocode(
            &self,
            latitude: f64,
            longitude: f64,
        ) -> Result<ReverseGeocodingResult, LocationIqError>;

        async fn reverse_geocode_with(
            &self,
            request: &ReverseGeocodingRequest,
        ) -> Result<ReverseGeocodingResult, LocationIqError>;

        async fn autocomplete(
            &self,
            request: &AutocompleteRequest,
        ) -> Result<Vec<AutocompleteResult>, LocationIqError>;

        async fn directions(
            &self,
            request: &RoutingRequest,
        ) -> Result<Vec<RoutingRoute>, LocationIqError>;

        async fn matrix(&self, request: &MatrixRequest) -> Result<MatrixResult, LocationIqError>;

        async fn nearest(&self, request: &NearestRequest) -> Result<NearestResult, LocationIqError>;

        async fn timezone(
            &self,
            latitude: f64,
            longitude: f64,
        ) -> Result<TimezoneResult, LocationIqError>;

        async fn nearby_poi(
            &self,
            request: &NearbyPoiRequest,
        ) -> Result<Vec<NearbyPoiResult>, LocationIqError>;

        async fn balance(&self) -> Result<AccountBalance, LocationIqError>;
    }
}

/// Minimal geocoding result fixture
pub(crate) fn place(lat: &str, lon: &str, display_name: &str) -> GeocodingResult {
    serde_json::from_value(serde_json::json!({
        "lat": lat,
        "lon": lon,
        "display_name": display_name,
    }))
    .expect("valid fixture")
}

/// Minimal reverse-geocoding result fixture
pub(crate) fn reverse_place(display_name: &str) -> ReverseGeocodingResult {
    serde_json::from_value(serde_json::json!({
        "lat": "40.7128",
        "lon": "-74.006",
        "display_name": display_name,
    }))
    .expect("valid fixture")
}

/// Minimal autocomplete suggestion fixture
pub(crate) fn suggestion(display_name: &str) -> AutocompleteResult {
    serde_json::from_value(serde_json::json!({
        "lat": "40.7128",
        "lon": "-74.006",
        "display_name": display_name,
    }))
    .expect("valid fixture")
}

/// Minimal route fixture
pub(crate) fn route(distance: f64, duration: f64) -> RoutingRoute {
    serde_json::from_value(serde_json::json!({
        "distance": distance,
        "duration": duration,
    }))
    .expect("valid fixture")
}

/// Minimal matrix fixture
pub(crate) fn matrix_of(durations: Vec<Vec<Option<f64>>>) -> MatrixResult {
    serde_json::from_value(serde_json::json!({
        "code": "Ok",
        "durations": durations,
    }))
    .expect("valid fixture")
}

/// Minimal timezone fixture
pub(crate) fn timezone(name: &str, offset: &str) -> TimezoneResult {
    serde_json::from_value(serde_json::json!({
        "timezone": name,
        "utc_offset": offset,
    }))
    .expect("valid fixture")
}

/// Minimal nearby POI fixture
pub(crate) fn poi(display_name: &str) -> NearbyPoiResult {
    serde_json::from_value(serde_json::json!({
        "lat": "51.5052",
        "lon": "-0.0788",
        "display_name": display_name,
    }))
    .expect("valid fixture")
}

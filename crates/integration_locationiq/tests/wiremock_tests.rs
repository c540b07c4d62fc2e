//! Integration tests for the LocationIQ client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_locationiq::{
    AutocompleteRequest, GeoPlatformClient, GeocodingRequest, LocationIqClient, LocationIqConfig,
    LocationIqError, MatrixRequest, NearbyPoiRequest, NearestRequest, Profile, RoutingRequest,
    registry,
};

fn config_for_mock(base_url: &str) -> LocationIqConfig {
    LocationIqConfig {
        base_url: base_url.to_string(),
        ..LocationIqConfig::for_testing()
    }
}

fn client_for_mock(server: &MockServer) -> LocationIqClient {
    LocationIqClient::new(&config_for_mock(&server.uri())).expect("valid config")
}

const fn sample_geocode_json() -> &'static str {
    r#"[
        {
            "place_id": "332659752",
            "licence": "https://locationiq.com/attribution",
            "osm_type": "relation",
            "osm_id": "7444",
            "boundingbox": ["48.815573", "48.902145", "2.224199", "2.469921"],
            "lat": "48.8566",
            "lon": "2.3522",
            "display_name": "Paris, Ile-de-France, Metropolitan France, France",
            "class": "place",
            "type": "city",
            "importance": 0.9417
        }
    ]"#
}

const fn sample_reverse_json() -> &'static str {
    r#"{
        "place_id": "129334197",
        "licence": "https://locationiq.com/attribution",
        "osm_type": "way",
        "osm_id": "162221958",
        "lat": "40.7127281",
        "lon": "-74.0060152",
        "display_name": "New York City Hall, 260, Broadway, Manhattan, New York, 10000, USA",
        "place_rank": 30,
        "boundingbox": ["40.7126281", "40.7128281", "-74.0061152", "-74.0059152"],
        "address": {
            "name": "New York City Hall",
            "road": "Broadway",
            "city": "New York",
            "country": "United States of America",
            "country_code": "us"
        }
    }"#
}

const fn sample_autocomplete_json() -> &'static str {
    r#"[
        {
            "place_id": "227616974",
            "osm_id": "118557",
            "osm_type": "relation",
            "lat": "40.7127281",
            "lon": "-74.0060152",
            "display_name": "New York, New York, USA",
            "display_place": "New York",
            "display_address": "New York, USA",
            "address": {
                "name": "New York",
                "state": "New York",
                "country": "United States of America"
            }
        }
    ]"#
}

const fn sample_directions_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [{
            "distance": 1886.8,
            "duration": 259.3,
            "weight": 259.3,
            "weight_name": "routability",
            "geometry": {
                "coordinates": [[13.38886, 52.517033], [13.397631, 52.529432]],
                "type": "LineString"
            },
            "legs": [{
                "distance": 1886.8,
                "duration": 259.3,
                "summary": "Friedrichstraße, Torstraße",
                "steps": [{
                    "distance": 271.4,
                    "duration": 55.1,
                    "name": "Friedrichstraße",
                    "maneuver": {
                        "location": [13.38886, 52.517033],
                        "bearing_before": 0.0,
                        "bearing_after": 2.0,
                        "type": "depart"
                    }
                }]
            }]
        }],
        "waypoints": [
            {"name": "Friedrichstraße", "location": [13.38886, 52.517033]},
            {"name": "Torstraße", "location": [13.397631, 52.529432]}
        ]
    }"#
}

const fn sample_matrix_json() -> &'static str {
    r#"{
        "code": "Ok",
        "durations": [[0.0, 411.5], [402.1, 0.0]],
        "sources": [
            {"name": "Friedrichstraße", "location": [13.38886, 52.517033]},
            {"name": "Torstraße", "location": [13.397631, 52.529432]}
        ],
        "destinations": [
            {"name": "Friedrichstraße", "location": [13.38886, 52.517033]},
            {"name": "Torstraße", "location": [13.397631, 52.529432]}
        ]
    }"#
}

const fn sample_nearest_json() -> &'static str {
    r#"{
        "code": "Ok",
        "waypoints": [
            {
                "hint": "KSoKADRYroqUBAEAEAAAABkAAAAGAAAAAAAAAA",
                "name": "Friedrichstraße",
                "location": [13.388799, 52.517033],
                "distance": 4.085341
            }
        ]
    }"#
}

const fn sample_timezone_json() -> &'static str {
    r#"{
        "timezone": "America/New_York",
        "abbreviation": "EST",
        "utc_offset": "-05:00",
        "is_dst": false,
        "current_time": "2026-01-15T09:30:00-05:00"
    }"#
}

const fn sample_nearby_json() -> &'static str {
    r#"[
        {
            "place_id": "322134284",
            "osm_type": "way",
            "osm_id": "378919652",
            "boundingbox": ["51.505125", "51.5053", "-0.0789647", "-0.0786647"],
            "lat": "51.5052129",
            "lon": "-0.07882",
            "display_name": "Cafe Brood, Tooley Street, London, SE1 2TF, United Kingdom",
            "class": "amenity",
            "type": "cafe",
            "name": "Cafe Brood"
        }
    ]"#
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("key", "pk.test"))
        .and(query_param("format", "json"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_geocode_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let results = client
        .geocode(&GeocodingRequest::new("Paris"))
        .await
        .expect("geocode succeeds");

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].display_name,
        "Paris, Ile-de-France, Metropolitan France, France"
    );
    let coord = results[0].coordinate().expect("valid coordinate");
    assert!((coord.latitude() - 48.8566).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.geocode(&GeocodingRequest::new("Paris")).await;

    assert!(matches!(result, Err(LocationIqError::Unauthorized)));
}

#[tokio::test]
async fn test_geocode_rate_limited_with_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.geocode(&GeocodingRequest::new("Paris")).await;

    match result {
        Err(LocationIqError::RateLimited { retry_after_secs }) => {
            assert_eq!(retry_after_secs, Some(30));
        }
        other => unreachable!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_bad_request_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error": "Invalid viewbox"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.geocode(&GeocodingRequest::new("Paris")).await;

    match result {
        Err(LocationIqError::BadRequest(body)) => assert!(body.contains("Invalid viewbox")),
        other => unreachable!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_server_error_is_classified_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.geocode(&GeocodingRequest::new("Paris")).await;

    match result {
        Err(err @ LocationIqError::Http { status, .. }) => {
            assert_eq!(status.as_u16(), 503);
            assert!(err.is_retryable());
        }
        other => unreachable!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_decode_failure_on_wrong_shape() {
    let server = MockServer::start().await;

    // An object where a list of results is mandatory
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"unexpected": true}"#))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.geocode(&GeocodingRequest::new("Paris")).await;

    assert!(matches!(result, Err(LocationIqError::Decode(_))));
}

#[tokio::test]
async fn test_geocode_decode_failure_on_missing_mandatory_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"lat": "48.85", "lon": "2.35"}]"#),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.geocode(&GeocodingRequest::new("Paris")).await;

    assert!(matches!(result, Err(LocationIqError::Decode(_))));
}

#[tokio::test]
async fn test_reverse_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "40.7128"))
        .and(query_param("lon", "-74.006"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_reverse_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client
        .reverse_geocode(40.7128, -74.006)
        .await
        .expect("reverse geocode succeeds");

    assert!(result.display_name.starts_with("New York City Hall"));
    assert_eq!(result.place_rank, Some(30));
    let address = result.address.expect("address details present");
    assert_eq!(address.country_code.as_deref(), Some("us"));
}

#[tokio::test]
async fn test_autocomplete_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/autocomplete"))
        .and(query_param("q", "New Yo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_autocomplete_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let results = client
        .autocomplete(&AutocompleteRequest::new("New Yo"))
        .await
        .expect("autocomplete succeeds");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_place.as_deref(), Some("New York"));
}

#[tokio::test]
async fn test_autocomplete_short_query_never_hits_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/autocomplete"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let results = client
        .autocomplete(&AutocompleteRequest::new("ab"))
        .await
        .expect("short query resolves");

    assert!(results.is_empty());
    // MockServer verifies the zero-call expectation on drop
}

#[tokio::test]
async fn test_directions_embeds_profile_and_coordinates_in_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/car/13.38886,52.517037;13.397634,52.529407"))
        .and(query_param("geometries", "geojson"))
        .and(query_param("steps", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let request = RoutingRequest {
        steps: Some(true),
        ..RoutingRequest::new(vec![(13.38886, 52.517037), (13.397634, 52.529407)])
    };
    let routes = client.directions(&request).await.expect("directions succeed");

    assert_eq!(routes.len(), 1);
    assert!((routes[0].distance - 1886.8).abs() < f64::EPSILON);
    assert_eq!(routes[0].legs[0].steps.len(), 1);
    assert_eq!(
        routes[0].legs[0].steps[0].name.as_deref(),
        Some("Friedrichstraße")
    );
}

#[tokio::test]
async fn test_directions_bike_profile_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directions/bike/13.38,52.51;13.39,52.52"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"code": "Ok", "routes": []}"#),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let request = RoutingRequest {
        profile: Profile::Bike,
        ..RoutingRequest::new(vec![(13.38, 52.51), (13.39, 52.52)])
    };
    let routes = client.directions(&request).await.expect("directions succeed");
    assert!(routes.is_empty());
}

#[tokio::test]
async fn test_directions_too_few_coordinates_never_hits_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client
        .directions(&RoutingRequest::new(vec![(13.38, 52.51)]))
        .await;

    assert!(matches!(result, Err(LocationIqError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_matrix_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matrix/car/13.38886,52.517037;13.397634,52.529407"))
        .and(query_param("sources", "0;1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_matrix_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let request = MatrixRequest {
        sources: Some(vec![0, 1]),
        ..MatrixRequest::new(vec![(13.38886, 52.517037), (13.397634, 52.529407)])
    };
    let result = client.matrix(&request).await.expect("matrix succeeds");

    assert_eq!(result.code, "Ok");
    let durations = result.durations.expect("durations present");
    assert_eq!(durations[0][1], Some(411.5));
    assert_eq!(result.sources.expect("sources present").len(), 2);
}

#[tokio::test]
async fn test_nearest_returns_waypoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearest/foot/13.38,52.51;13.39,52.52"))
        .and(query_param("number", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_nearest_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let request = NearestRequest {
        profile: Profile::Foot,
        number: Some(1),
        ..NearestRequest::new(vec![(13.38, 52.51), (13.39, 52.52)])
    };
    let result = client.nearest(&request).await.expect("nearest succeeds");

    assert_eq!(result.code, "Ok");
    assert_eq!(result.waypoints.len(), 1);
    assert_eq!(result.waypoints[0].name.as_deref(), Some("Friedrichstraße"));
    assert!(result.routes.is_empty());
}

#[tokio::test]
async fn test_timezone_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/timezone"))
        .and(query_param("lat", "40.7128"))
        .and(query_param("lon", "-74.006"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_timezone_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client
        .timezone(40.7128, -74.006)
        .await
        .expect("timezone succeeds");

    assert_eq!(result.timezone, "America/New_York");
    assert_eq!(result.abbreviation.as_deref(), Some("EST"));
    assert_eq!(result.is_dst, Some(false));
}

#[tokio::test]
async fn test_nearby_poi_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearby"))
        .and(query_param("tag", "cafe"))
        .and(query_param("radius", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_nearby_json()))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let request = NearbyPoiRequest {
        tag: Some("cafe".to_string()),
        radius: Some(500),
        ..NearbyPoiRequest::new(51.5052, -0.0788)
    };
    let results = client.nearby_poi(&request).await.expect("nearby succeeds");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name.as_deref(), Some("Cafe Brood"));
    assert_eq!(results[0].kind.as_deref(), Some("cafe"));
}

#[tokio::test]
async fn test_balance_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(query_param("key", "pk.test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"balance": 4985.0, "currency": "requests"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let balance = client.balance().await.expect("balance succeeds");

    assert!((balance.balance - 4985.0).abs() < f64::EPSILON);
    assert_eq!(balance.currency, "requests");
}

#[tokio::test]
async fn test_registry_client_uses_initialized_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("key", "pk.test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    registry::initialize_client(&config_for_mock(&server.uri())).expect("valid config");
    let client = registry::client().expect("initialized");

    let results = client
        .geocode(&GeocodingRequest::new("Paris"))
        .await
        .expect("geocode through registry succeeds");
    assert_eq!(results.len(), 1);
}

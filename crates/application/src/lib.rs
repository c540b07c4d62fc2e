//! Application layer for Geodesk
//!
//! Reactive, observable query state machines over the LocationIQ client,
//! the geolocation-source port, and display formatting helpers. Presentation
//! code consumes `{data, loading, error}` snapshots and treats `error` as a
//! display-only value; recovery is never attempted here.

pub mod format;
pub mod geolocation;
pub mod queries;

pub use geolocation::{FixedPositionSource, GeolocationError, GeolocationSource};
pub use queries::{
    AutocompleteQuery, BalanceQuery, DirectionsQuery, GeocodeQuery, MatrixQuery, NearbyPoiQuery,
    QueryError, QueryState, ReverseGeocodeQuery, TimezoneQuery,
};

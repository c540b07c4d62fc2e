//! Query-parameter serialization
//!
//! Every request type flattens into an explicit, ordered list of
//! `(name, value)` pairs. Optional fields are emitted only when set. The
//! client injects `key` and `format` itself; they never appear here.
//!
//! Join rules differ by field family and are pinned as constants below:
//! coordinate pairs use [`PAIR_SEPARATOR`] within a pair and
//! [`COORDINATE_SEPARATOR`] between pairs (the same string is embedded as a
//! URL path segment for the routing family), annotation and exclude lists
//! use [`LIST_SEPARATOR`], waypoint-style lists use [`WAYPOINT_SEPARATOR`].

use crate::models::{
    AutocompleteRequest, GeocodingRequest, MatrixRequest, NearbyPoiRequest, NearestRequest,
    ReverseGeocodingRequest, RoutingRequest,
};

/// Separator within one coordinate pair
pub(crate) const PAIR_SEPARATOR: char = ',';

/// Separator between coordinate pairs
pub(crate) const COORDINATE_SEPARATOR: char = ';';

/// Separator for annotation and exclude lists
pub(crate) const LIST_SEPARATOR: char = ',';

/// Separator for waypoint, approach, and waypoint-name lists
pub(crate) const WAYPOINT_SEPARATOR: char = ';';

/// An ordered query-parameter list
pub(crate) type QueryParams = Vec<(&'static str, String)>;

/// Join coordinate pairs into the routing-family path segment
pub(crate) fn join_coordinates(coordinates: &[(f64, f64)]) -> String {
    coordinates
        .iter()
        .map(|(a, b)| format!("{a}{PAIR_SEPARATOR}{b}"))
        .collect::<Vec<_>>()
        .join(&COORDINATE_SEPARATOR.to_string())
}

fn join_with<T: ToString>(items: &[T], separator: char) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// `1`/`0` flags for the search-family endpoints
const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// `true`/`false` flags for the routing-family endpoints
const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn push_flag(params: &mut QueryParams, name: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        params.push((name, flag(value).to_string()));
    }
}

fn push_bool(params: &mut QueryParams, name: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        params.push((name, bool_str(value).to_string()));
    }
}

impl GeocodingRequest {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut params: QueryParams = vec![("q", self.query.clone())];
        if let Some(codes) = &self.countrycodes {
            params.push(("countrycodes", codes.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(viewbox) = &self.viewbox {
            params.push(("viewbox", viewbox.clone()));
        }
        push_flag(&mut params, "bounded", self.bounded);
        push_flag(&mut params, "addressdetails", self.addressdetails);
        push_flag(&mut params, "namedetails", self.namedetails);
        push_flag(&mut params, "extratags", self.extratags);
        if let Some(language) = &self.accept_language {
            params.push(("accept_language", language.clone()));
        }
        params
    }
}

impl ReverseGeocodingRequest {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut params: QueryParams = vec![
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
        ];
        if let Some(zoom) = self.zoom {
            params.push(("zoom", zoom.to_string()));
        }
        push_flag(&mut params, "addressdetails", self.addressdetails);
        push_flag(&mut params, "namedetails", self.namedetails);
        push_flag(&mut params, "extratags", self.extratags);
        if let Some(language) = &self.accept_language {
            params.push(("accept_language", language.clone()));
        }
        params
    }
}

impl AutocompleteRequest {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut params: QueryParams = vec![("q", self.query.clone())];
        if let Some(codes) = &self.countrycodes {
            params.push(("countrycodes", codes.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(viewbox) = &self.viewbox {
            params.push(("viewbox", viewbox.clone()));
        }
        push_flag(&mut params, "bounded", self.bounded);
        push_flag(&mut params, "dedupe", self.dedupe);
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(language) = &self.accept_language {
            params.push(("accept_language", language.clone()));
        }
        params
    }
}

impl RoutingRequest {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut params: QueryParams =
            vec![("geometries", self.geometries.as_str().to_string())];
        push_bool(&mut params, "alternatives", self.alternatives);
        push_bool(&mut params, "steps", self.steps);
        if let Some(annotations) = &self.annotations {
            params.push(("annotations", join_with(annotations, LIST_SEPARATOR)));
        }
        push_bool(&mut params, "continue_straight", self.continue_straight);
        if let Some(names) = &self.waypoint_names {
            params.push(("waypoint_names", join_with(names, WAYPOINT_SEPARATOR)));
        }
        if let Some(waypoints) = &self.waypoints {
            params.push(("waypoints", join_with(waypoints, WAYPOINT_SEPARATOR)));
        }
        if let Some(approaches) = &self.approaches {
            params.push(("approaches", join_with(approaches, WAYPOINT_SEPARATOR)));
        }
        if let Some(exclude) = &self.exclude {
            params.push(("exclude", join_with(exclude, LIST_SEPARATOR)));
        }
        params
    }
}

impl MatrixRequest {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(sources) = &self.sources {
            params.push(("sources", join_with(sources, WAYPOINT_SEPARATOR)));
        }
        if let Some(destinations) = &self.destinations {
            params.push(("destinations", join_with(destinations, WAYPOINT_SEPARATOR)));
        }
        if let Some(annotations) = &self.annotations {
            params.push(("annotations", join_with(annotations, LIST_SEPARATOR)));
        }
        if let Some(exclude) = &self.exclude {
            params.push(("exclude", join_with(exclude, LIST_SEPARATOR)));
        }
        params
    }
}

impl NearestRequest {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(number) = self.number {
            params.push(("number", number.to_string()));
        }
        if let Some(exclude) = &self.exclude {
            params.push(("exclude", join_with(exclude, LIST_SEPARATOR)));
        }
        params
    }
}

impl NearbyPoiRequest {
    pub(crate) fn query_params(&self) -> QueryParams {
        let mut params: QueryParams = vec![
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
        ];
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(radius) = self.radius {
            params.push(("radius", radius.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

//! Pure geometry utilities over coordinate sets

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// Axis-aligned bounding box around a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southernmost latitude
    pub min_lat: f64,
    /// Northernmost latitude
    pub max_lat: f64,
    /// Westernmost longitude
    pub min_lon: f64,
    /// Easternmost longitude
    pub max_lon: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a coordinate set
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn of(coordinates: &[Coordinate]) -> Option<Self> {
        let first = coordinates.first()?;
        let mut bbox = Self {
            min_lat: first.latitude(),
            max_lat: first.latitude(),
            min_lon: first.longitude(),
            max_lon: first.longitude(),
        };
        for coord in &coordinates[1..] {
            bbox.min_lat = bbox.min_lat.min(coord.latitude());
            bbox.max_lat = bbox.max_lat.max(coord.latitude());
            bbox.min_lon = bbox.min_lon.min(coord.longitude());
            bbox.max_lon = bbox.max_lon.max(coord.longitude());
        }
        Some(bbox)
    }

    /// Render in the `viewbox` parameter format the search endpoints accept
    ///
    /// Order is `minLon,minLat,maxLon,maxLat`.
    #[must_use]
    pub fn viewbox(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

/// Arithmetic center of a coordinate set
///
/// Returns `None` for an empty slice. The mean of in-range latitudes and
/// longitudes is itself in range.
#[must_use]
pub fn centroid(coordinates: &[Coordinate]) -> Option<Coordinate> {
    if coordinates.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let len = coordinates.len() as f64;
    let lat_sum: f64 = coordinates.iter().map(Coordinate::latitude).sum();
    let lon_sum: f64 = coordinates.iter().map(Coordinate::longitude).sum();
    Some(Coordinate::new_unchecked(lat_sum / len, lon_sum / len))
}

//! Domain layer for Geodesk
//!
//! Coordinate value objects and pure geometry utilities. This layer has no
//! I/O dependencies and defines the vocabulary shared by the client and
//! query layers.

pub mod geometry;
pub mod value_objects;

pub use geometry::{BoundingBox, centroid};
pub use value_objects::{Coordinate, InvalidCoordinates};

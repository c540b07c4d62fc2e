//! Geolocation source port
//!
//! The environment collaborator that originates reverse-geocoding lookups:
//! an asynchronous, single-shot position provider that may fail or be
//! unavailable. The runtime implementation is supplied by the host; this
//! crate only defines the contract and a fixed-position implementation for
//! tests and headless use.

use std::fmt;

use async_trait::async_trait;
use domain::Coordinate;
use thiserror::Error;

/// Errors produced by a geolocation source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The host environment offers no position source
    #[error("Geolocation is not available in this environment")]
    Unavailable,

    /// The source failed to produce a position
    #[error("Failed to resolve current position: {0}")]
    Failed(String),
}

/// Single-shot source of the current position
#[async_trait]
pub trait GeolocationSource: Send + Sync + fmt::Debug {
    /// Resolve the current position once
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

/// A source pinned to a fixed position
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionSource {
    position: Coordinate,
}

impl FixedPositionSource {
    /// Create a source that always reports the given position
    #[must_use]
    pub const fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationSource for FixedPositionSource {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        Ok(self.position)
    }
}

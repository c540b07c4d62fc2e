//! Reverse-geocoding query

use std::sync::Arc;

use domain::Coordinate;
use integration_locationiq::{
    GeoPlatformClient, LocationIqError, ReverseGeocodingResult, registry,
};
use tokio::sync::watch;

use super::state::{QueryCell, QueryState};
use crate::geolocation::GeolocationSource;

/// Reactive wrapper around reverse geocoding
///
/// May be bound to a default position at construction; per-call overrides
/// take precedence. With neither, `execute` is a no-op.
#[derive(Debug)]
pub struct ReverseGeocodeQuery {
    client: Arc<dyn GeoPlatformClient>,
    default_position: Option<Coordinate>,
    cell: QueryCell<ReverseGeocodingResult>,
}

impl ReverseGeocodeQuery {
    /// Create a query backed by the given client
    #[must_use]
    pub fn new(client: Arc<dyn GeoPlatformClient>) -> Self {
        Self {
            client,
            default_position: None,
            cell: QueryCell::new(),
        }
    }

    /// Create a query backed by the process-wide client
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if no client has been initialized.
    pub fn from_registry() -> Result<Self, LocationIqError> {
        Ok(Self::new(registry::client()?))
    }

    /// Bind a default position
    #[must_use]
    pub fn with_position(mut self, position: Coordinate) -> Self {
        self.default_position = Some(position);
        self
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> QueryState<ReverseGeocodingResult> {
        self.cell.snapshot()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<ReverseGeocodingResult>> {
        self.cell.subscribe()
    }

    /// Return to the initial state from any state
    pub fn reset(&self) {
        self.cell.reset();
    }

    /// Run the lookup; `position` overrides the bound default
    ///
    /// A missing effective position leaves the state untouched.
    pub async fn execute(&self, position: Option<Coordinate>) {
        let Some(position) = position.or(self.default_position) else {
            return;
        };

        let client = Arc::clone(&self.client);
        self.cell
            .run(async move {
                Ok(client
                    .reverse_geocode(position.latitude(), position.longitude())
                    .await?)
            })
            .await;
    }

    /// Resolve the position from a geolocation source, then run the lookup
    ///
    /// The whole resolution happens inside the loading window; a source
    /// failure is stored in the error state like any other failure.
    pub async fn execute_from(&self, source: &dyn GeolocationSource) {
        let client = Arc::clone(&self.client);
        self.cell
            .run(async move {
                let position = source.current_position().await?;
                Ok(client
                    .reverse_geocode(position.latitude(), position.longitude())
                    .await?)
            })
            .await;
    }
}

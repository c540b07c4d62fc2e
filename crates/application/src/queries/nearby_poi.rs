//! Nearby points-of-interest query

use std::sync::Arc;

use domain::Coordinate;
use integration_locationiq::{
    GeoPlatformClient, LocationIqError, NearbyPoiRequest, NearbyPoiResult, registry,
};
use tokio::sync::watch;

use super::state::{QueryCell, QueryState};

/// Upper bound on results requested per lookup
const NEARBY_RESULT_LIMIT: u32 = 50;

/// Reactive wrapper around nearby POI search
///
/// May be bound to a default position at construction; per-call overrides
/// take precedence. With neither, `execute` is a no-op.
#[derive(Debug)]
pub struct NearbyPoiQuery {
    client: Arc<dyn GeoPlatformClient>,
    default_position: Option<Coordinate>,
    cell: QueryCell<Vec<NearbyPoiResult>>,
}

impl NearbyPoiQuery {
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

    /// Bind a default search center
    #[must_use]
    pub fn with_position(mut self, position: Coordinate) -> Self {
        self.default_position = Some(position);
        self
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> QueryState<Vec<NearbyPoiResult>> {
        self.cell.snapshot()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<Vec<NearbyPoiResult>>> {
        self.cell.subscribe()
    }

    /// Return to the initial state from any state
    pub fn reset(&self) {
        self.cell.reset();
    }

    /// Search around the effective position, optionally filtered by tag
    pub async fn execute(&self, position: Option<Coordinate>, tag: Option<&str>) {
        let Some(position) = position.or(self.default_position) else {
            return;
        };

        let request = NearbyPoiRequest {
            tag: tag.map(str::to_owned),
            limit: Some(NEARBY_RESULT_LIMIT),
            ..NearbyPoiRequest::new(position.latitude(), position.longitude())
        };
        let client = Arc::clone(&self.client);
        self.cell
            .run(async move { Ok(client.nearby_poi(&request).await?) })
            .await;
    }
}

//! Directions query

use std::sync::Arc;

use integration_locationiq::{
    GeoPlatformClient, LocationIqError, Profile, RoutingRequest, RoutingRoute, registry,
};
use tokio::sync::watch;

use super::state::{QueryCell, QueryState};

/// Extra per-segment metadata requested with every route
const ROUTE_ANNOTATIONS: [&str; 2] = ["duration", "distance"];

/// Reactive wrapper around route computation
///
/// Requests GeoJSON geometry with per-leg steps and duration/distance
/// annotations. May be bound to default waypoints at construction; per-call
/// overrides take precedence. Without at least two effective waypoints,
/// `execute` is a no-op (the client itself rejects short coordinate lists
/// with an error when called directly).
#[derive(Debug)]
pub struct DirectionsQuery {
    client: Arc<dyn GeoPlatformClient>,
    default_coordinates: Option<Vec<(f64, f64)>>,
    cell: QueryCell<Vec<RoutingRoute>>,
}

impl DirectionsQuery {
    /// Create a query backed by the given client
    #[must_use]
    pub fn new(client: Arc<dyn GeoPlatformClient>) -> Self {
        Self {
            client,
            default_coordinates: None,
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

    /// Bind default waypoints
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Vec<(f64, f64)>) -> Self {
        self.default_coordinates = Some(coordinates);
        self
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> QueryState<Vec<RoutingRoute>> {
        self.cell.snapshot()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<Vec<RoutingRoute>>> {
        self.cell.subscribe()
    }

    /// Return to the initial state from any state
    pub fn reset(&self) {
        self.cell.reset();
    }

    /// Compute routes; `coordinates` overrides the bound default
    pub async fn execute(&self, coordinates: Option<&[(f64, f64)]>, profile: Option<Profile>) {
        let coordinates = coordinates
            .map(<[(f64, f64)]>::to_vec)
            .or_else(|| self.default_coordinates.clone());
        let Some(coordinates) = coordinates else {
            return;
        };
        if coordinates.len() < 2 {
            return;
        }

        let request = RoutingRequest {
            profile: profile.unwrap_or_default(),
            steps: Some(true),
            annotations: Some(ROUTE_ANNOTATIONS.map(str::to_owned).to_vec()),
            ..RoutingRequest::new(coordinates)
        };
        let client = Arc::clone(&self.client);
        self.cell
            .run(async move { Ok(client.directions(&request).await?) })
            .await;
    }
}

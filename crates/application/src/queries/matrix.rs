//! Travel-time matrix query

use std::sync::Arc;

use integration_locationiq::{
    GeoPlatformClient, LocationIqError, MatrixRequest, MatrixResult, Profile, registry,
};
use tokio::sync::watch;

use super::state::{QueryCell, QueryState};

/// Reactive wrapper around duration/distance matrix computation
///
/// May be bound to default coordinates at construction; per-call overrides
/// take precedence. Without at least two effective coordinates, `execute`
/// is a no-op.
#[derive(Debug)]
pub struct MatrixQuery {
    client: Arc<dyn GeoPlatformClient>,
    default_coordinates: Option<Vec<(f64, f64)>>,
    cell: QueryCell<MatrixResult>,
}

impl MatrixQuery {
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

    /// Bind default coordinates
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Vec<(f64, f64)>) -> Self {
        self.default_coordinates = Some(coordinates);
        self
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> QueryState<MatrixResult> {
        self.cell.snapshot()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<MatrixResult>> {
        self.cell.subscribe()
    }

    /// Return to the initial state from any state
    pub fn reset(&self) {
        self.cell.reset();
    }

    /// Compute the matrix; `coordinates` overrides the bound default
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

        let request = MatrixRequest {
            profile: profile.unwrap_or_default(),
            ..MatrixRequest::new(coordinates)
        };
        let client = Arc::clone(&self.client);
        self.cell
            .run(async move { Ok(client.matrix(&request).await?) })
            .await;
    }
}

//! Forward-geocoding query

use std::sync::Arc;

use integration_locationiq::{
    GeoPlatformClient, GeocodingRequest, GeocodingResult, LocationIqError, registry,
};
use tokio::sync::watch;

use super::state::{QueryCell, QueryState};

/// Reactive wrapper around forward geocoding
///
/// May be bound to a default query text at construction; per-call overrides
/// take precedence. With neither, `execute` is a no-op.
#[derive(Debug)]
pub struct GeocodeQuery {
    client: Arc<dyn GeoPlatformClient>,
    default_query: Option<String>,
    cell: QueryCell<Vec<GeocodingResult>>,
}

impl GeocodeQuery {
    /// Create a query backed by the given client
    #[must_use]
    pub fn new(client: Arc<dyn GeoPlatformClient>) -> Self {
        Self {
            client,
            default_query: None,
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

    /// Bind a default query text
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.default_query = Some(query.into());
        self
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> QueryState<Vec<GeocodingResult>> {
        self.cell.snapshot()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<Vec<GeocodingResult>>> {
        self.cell.subscribe()
    }

    /// Return to the initial state from any state
    pub fn reset(&self) {
        self.cell.reset();
    }

    /// Run the lookup; `query` overrides the bound default
    ///
    /// A missing or blank effective query leaves the state untouched.
    pub async fn execute(&self, query: Option<&str>) {
        let Some(query) = query.map(str::to_owned).or_else(|| self.default_query.clone()) else {
            return;
        };
        if query.trim().is_empty() {
            return;
        }

        let client = Arc::clone(&self.client);
        let request = GeocodingRequest::new(query);
        self.cell
            .run(async move { Ok(client.geocode(&request).await?) })
            .await;
    }
}

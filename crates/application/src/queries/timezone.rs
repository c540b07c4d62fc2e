//! Timezone query

use std::sync::Arc;

use domain::Coordinate;
use integration_locationiq::{GeoPlatformClient, LocationIqError, TimezoneResult, registry};
use tokio::sync::watch;

use super::state::{QueryCell, QueryState};

/// Reactive wrapper around timezone resolution
///
/// May be bound to a default position at construction; per-call overrides
/// take precedence. With neither, `execute` is a no-op.
#[derive(Debug)]
pub struct TimezoneQuery {
    client: Arc<dyn GeoPlatformClient>,
    default_position: Option<Coordinate>,
    cell: QueryCell<TimezoneResult>,
}

impl TimezoneQuery {
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
    pub fn state(&self) -> QueryState<TimezoneResult> {
        self.cell.snapshot()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<TimezoneResult>> {
        self.cell.subscribe()
    }

    /// Return to the initial state from any state
    pub fn reset(&self) {
        self.cell.reset();
    }

    /// Resolve the timezone; `position` overrides the bound default
    pub async fn execute(&self, position: Option<Coordinate>) {
        let Some(position) = position.or(self.default_position) else {
            return;
        };

        let client = Arc::clone(&self.client);
        self.cell
            .run(async move {
                Ok(client
                    .timezone(position.latitude(), position.longitude())
                    .await?)
            })
            .await;
    }
}

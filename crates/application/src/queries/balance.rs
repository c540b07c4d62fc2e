//! Account balance query

use std::sync::Arc;

use integration_locationiq::{AccountBalance, GeoPlatformClient, LocationIqError, registry};
use tokio::sync::watch;

use super::state::{QueryCell, QueryState};

/// Reactive wrapper around the account balance lookup
///
/// Takes no parameters; there is nothing to bind or override.
#[derive(Debug)]
pub struct BalanceQuery {
    client: Arc<dyn GeoPlatformClient>,
    cell: QueryCell<AccountBalance>,
}

impl BalanceQuery {
    /// Create a query backed by the given client
    #[must_use]
    pub fn new(client: Arc<dyn GeoPlatformClient>) -> Self {
        Self {
            client,
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

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> QueryState<AccountBalance> {
        self.cell.snapshot()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<AccountBalance>> {
        self.cell.subscribe()
    }

    /// Return to the initial state from any state
    pub fn reset(&self) {
        self.cell.reset();
    }

    /// Fetch the account balance
    pub async fn execute(&self) {
        let client = Arc::clone(&self.client);
        self.cell
            .run(async move { Ok(client.balance().await?) })
            .await;
    }
}

//! Shared query state machinery

use std::future::Future;
use std::sync::Arc;

use integration_locationiq::LocationIqError;
use thiserror::Error;
use tokio::sync::watch;

use crate::geolocation::GeolocationError;

/// Failure stored by a query state machine
#[derive(Debug, Error)]
pub enum QueryError {
    /// The API client reported a failure
    #[error(transparent)]
    Api(#[from] LocationIqError),

    /// The geolocation source could not produce a position
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
}

/// Observable state of one asynchronous operation
///
/// At any observation point either a call is in flight (`loading`, with
/// data and error both absent) or at most one of `data`/`error` is present.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    /// Result of the most recently settled call
    pub data: Option<T>,
    /// Whether a call is in flight
    pub loading: bool,
    /// Failure of the most recently settled call
    pub error: Option<Arc<QueryError>>,
}

impl<T> QueryState<T> {
    /// The initial state: no data, not loading, no error
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// True in the initial state
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Watch-backed container applying the state transitions
///
/// Transitions are applied in the order completions arrive; overlapping
/// calls are not sequenced.
#[derive(Debug)]
pub(crate) struct QueryCell<T> {
    tx: watch::Sender<QueryState<T>>,
}

impl<T: Clone> QueryCell<T> {
    pub(crate) fn new() -> Self {
        Self {
            tx: watch::Sender::new(QueryState::idle()),
        }
    }

    /// Clone of the current state
    pub(crate) fn snapshot(&self) -> QueryState<T> {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every state change
    pub(crate) fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.tx.subscribe()
    }

    /// Return to the initial state from any state
    pub(crate) fn reset(&self) {
        self.tx.send_replace(QueryState::idle());
    }

    /// Drive one call: clear data and error, mark loading, then settle with
    /// either the value or the failure
    pub(crate) async fn run<F>(&self, operation: F)
    where
        F: Future<Output = Result<T, QueryError>>,
    {
        self.tx.send_replace(QueryState {
            data: None,
            loading: true,
            error: None,
        });

        let settled = match operation.await {
            Ok(data) => QueryState {
                data: Some(data),
                loading: false,
                error: None,
            },
            Err(error) => QueryState {
                data: None,
                loading: false,
                error: Some(Arc::new(error)),
            },
        };
        self.tx.send_replace(settled);
    }
}

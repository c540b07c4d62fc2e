//! Process-wide client registry
//!
//! Explicit construction via [`LocationIqClient::new`] is the primary,
//! testable path; this module is the ergonomic fallback for callers that
//! cannot thread a client reference through every call site.
//!
//! The stored instance is the one piece of shared mutable process state in
//! this crate. It is written only by [`initialize_client`] (re-initialization
//! simply replaces the previous instance) and read by [`client`]. Callers
//! capture the `Arc` at call time, so work already in flight keeps the
//! client it started with even if the registry is re-initialized before it
//! settles.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::client::LocationIqClient;
use crate::config::LocationIqConfig;
use crate::error::LocationIqError;

static CLIENT: ArcSwapOption<LocationIqClient> = ArcSwapOption::const_empty();

/// Construct a client from the given configuration and store it as the
/// process-wide instance, replacing any previous one
///
/// # Errors
///
/// Returns `Configuration` if the config is invalid; the previous instance
/// (if any) is left in place in that case.
pub fn initialize_client(
    config: &LocationIqConfig,
) -> Result<Arc<LocationIqClient>, LocationIqError> {
    let client = Arc::new(LocationIqClient::new(config)?);
    CLIENT.store(Some(Arc::clone(&client)));
    Ok(client)
}

/// Retrieve the process-wide client
///
/// # Errors
///
/// Returns `NotInitialized` if [`initialize_client`] has not been called.
pub fn client() -> Result<Arc<LocationIqClient>, LocationIqError> {
    CLIENT.load_full().ok_or(LocationIqError::NotInitialized)
}

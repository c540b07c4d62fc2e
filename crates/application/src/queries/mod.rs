//! Per-endpoint query state machines
//!
//! Each query wraps one client operation in an observable
//! `{data, loading, error}` state: `execute` moves the state from idle (or
//! any settled state) to loading and then to exactly one of data or error;
//! `reset` returns to idle from anywhere. Queries may be constructed with
//! bound default parameters and invoked with per-call overrides; overrides
//! win, and when neither side supplies the mandatory input `execute` is a
//! no-op that leaves the state untouched.
//!
//! Overlapping `execute` calls on one query are not coalesced or sequenced:
//! each new call immediately clears data/error and sets loading, and
//! completions apply in the order they settle. An earlier call that settles
//! after a later one overwrites the newer result with stale data. Callers
//! that care must sequence calls themselves; this layer deliberately does
//! not.

mod autocomplete;
mod balance;
mod directions;
mod geocode;
mod matrix;
mod nearby_poi;
mod reverse_geocode;
mod state;
mod timezone;

#[cfg(test)]
pub(crate) mod test_support;

pub use autocomplete::AutocompleteQuery;
pub use balance::BalanceQuery;
pub use directions::DirectionsQuery;
pub use geocode::GeocodeQuery;
pub use matrix::MatrixQuery;
pub use nearby_poi::NearbyPoiQuery;
pub use reverse_geocode::ReverseGeocodeQuery;
pub use state::{QueryError, QueryState};
pub use timezone::TimezoneQuery;

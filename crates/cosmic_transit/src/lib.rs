//! Transit snapshots for the cosmic weather display.
//!
//! [`build_snapshot`] places the Sun, Moon and eight planets for an instant
//! using the approximations in `cosmic_zodiac`. [`fetch_transits_for`]
//! prefers a pluggable [`RemoteTransitSource`] and falls back to the local
//! builder whenever the remote path fails, so it never returns an error.

pub mod body;
pub mod error;
pub mod remote;
pub mod snapshot;
pub mod transit_types;

pub use body::{Body, SNAPSHOT_ORDER};
pub use error::TransitError;
pub use remote::{
    RemoteTransitSource, fetch_current_transits, fetch_transits_for, parse_remote_payload,
    transit_query,
};
pub use snapshot::build_snapshot;
pub use transit_types::{TransitEntry, TransitFetch, TransitOrigin, TransitSnapshot};

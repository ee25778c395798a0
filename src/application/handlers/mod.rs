//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod venue;

pub use venue::{GetVenuePermissionsHandler, GetVenuePermissionsQuery, VenuePermissions};

//! Application layer - authorization service and query handlers.
//!
//! This layer orchestrates domain policies and coordinates with ports.

mod authorization;
pub mod handlers;

pub use authorization::VenueAuthorizer;
pub use handlers::{GetVenuePermissionsHandler, GetVenuePermissionsQuery, VenuePermissions};

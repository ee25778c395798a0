//! Venue query handlers.

mod get_venue_permissions;

pub use get_venue_permissions::{
    GetVenuePermissionsHandler, GetVenuePermissionsQuery, VenuePermissions,
};

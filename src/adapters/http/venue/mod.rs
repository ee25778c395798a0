//! Venue authorization HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::{VenueApiError, VenueAppState};
pub use routes::{venue_router, venue_routes};

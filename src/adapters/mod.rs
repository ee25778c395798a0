//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (JWT, mock)
//! - `http` - REST API over the venue authorizer
//! - `memory` - In-memory membership store
//! - `postgres` - PostgreSQL membership lookup

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use http::{app_router, VenueAppState};
pub use memory::InMemoryVenueMembershipReader;
pub use postgres::PostgresVenueMembershipReader;

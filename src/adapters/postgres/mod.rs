//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresVenueMembershipReader` - Venue membership lookup

mod venue_membership_reader;

pub use venue_membership_reader::PostgresVenueMembershipReader;

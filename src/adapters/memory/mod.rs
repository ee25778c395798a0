//! In-memory adapters.
//!
//! - `InMemoryVenueMembershipReader` - Map-backed membership lookup for tests and local runs

mod venue_membership_reader;

pub use venue_membership_reader::InMemoryVenueMembershipReader;

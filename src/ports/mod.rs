//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `VenueMembershipReader` - Membership lookup consumed by the authorization engine
//! - `SessionValidator` - Bearer token validation for the HTTP layer

mod session_validator;
mod venue_membership_reader;

pub use session_validator::SessionValidator;
pub use venue_membership_reader::VenueMembershipReader;

//! Venue module - role hierarchy, membership records, and authorization policies.
//!
//! # Module Organization
//!
//! - `role` - `VenueRole` ordered hierarchy (`Client < Coach < Admin < Owner`)
//! - `status` - `VenueMembershipStatus`; only `Active` grants anything
//! - `membership` - `VenueMembership` record read from the external store
//! - `decision` - `AuthorizationDecision` returned by named policies
//! - `policy` - pure decision functions over a single membership lookup

mod decision;
mod membership;
pub mod policy;
mod role;
mod status;

pub use decision::{AuthorizationDecision, DenialReason, VenueAction};
pub use membership::VenueMembership;
pub use role::VenueRole;
pub use status::VenueMembershipStatus;

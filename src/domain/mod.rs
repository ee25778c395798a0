//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth identity)
//! - `venue` - Venue roles, memberships, and authorization policies

pub mod foundation;
pub mod venue;

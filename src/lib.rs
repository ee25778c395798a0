//! Venue Access - Role-based authorization for venues
//!
//! Answers "may this user act on this venue?" from a single membership record:
//! role hierarchy checks (client < coach < admin < owner) and the
//! manage-venue, manage-sessions and view-bookings policies.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

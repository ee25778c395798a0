//! Venue role hierarchy.
//!
//! Roles are totally ordered `Client < Coach < Admin < Owner`. A member holding
//! a higher role satisfies any requirement expressed as a lower or equal role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A member's standing within a venue.
///
/// Variant order matches rank so the derived `Ord` agrees with [`VenueRole::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VenueRole {
    /// Books sessions, sees their own bookings.
    Client,

    /// Runs sessions, sees bookings for sessions they coach.
    Coach,

    /// Manages venue settings and staff.
    Admin,

    /// Full control, sees every booking.
    Owner,
}

impl VenueRole {
    /// All roles, lowest first.
    pub const ALL: [VenueRole; 4] = [
        VenueRole::Client,
        VenueRole::Coach,
        VenueRole::Admin,
        VenueRole::Owner,
    ];

    /// Numeric rank of this role. Higher rank = more privilege.
    pub fn rank(&self) -> u8 {
        match self {
            VenueRole::Client => 0,
            VenueRole::Coach => 1,
            VenueRole::Admin => 2,
            VenueRole::Owner => 3,
        }
    }

    /// Returns true if holding `self` meets a requirement of `required`.
    pub fn satisfies(&self, required: VenueRole) -> bool {
        self.rank() >= required.rank()
    }

    /// Canonical upper-case name, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueRole::Client => "CLIENT",
            VenueRole::Coach => "COACH",
            VenueRole::Admin => "ADMIN",
            VenueRole::Owner => "OWNER",
        }
    }
}

impl fmt::Display for VenueRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLIENT" => Ok(VenueRole::Client),
            "COACH" => Ok(VenueRole::Coach),
            "ADMIN" => Ok(VenueRole::Admin),
            "OWNER" => Ok(VenueRole::Owner),
            _ => Err(ValidationError::invalid_format(
                "role",
                format!("unknown venue role '{}'", s),
            )),
        }
    }
}

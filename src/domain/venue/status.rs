//! Venue membership status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Whether a venue membership currently grants anything.
///
/// Only `Active` grants authorization. Every other status is treated exactly
/// like having no membership at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VenueMembershipStatus {
    Active,

    /// Temporarily barred by venue staff.
    Suspended,

    /// The user left the venue.
    Left,
}

impl VenueMembershipStatus {
    /// Returns true if this status grants authorization.
    pub fn is_active(&self) -> bool {
        matches!(self, VenueMembershipStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VenueMembershipStatus::Active => "ACTIVE",
            VenueMembershipStatus::Suspended => "SUSPENDED",
            VenueMembershipStatus::Left => "LEFT",
        }
    }
}

impl fmt::Display for VenueMembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueMembershipStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(VenueMembershipStatus::Active),
            "SUSPENDED" => Ok(VenueMembershipStatus::Suspended),
            "LEFT" => Ok(VenueMembershipStatus::Left),
            _ => Err(ValidationError::invalid_format(
                "status",
                format!("unknown membership status '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_is_active() {
        assert!(VenueMembershipStatus::Active.is_active());
        assert!(!VenueMembershipStatus::Suspended.is_active());
        assert!(!VenueMembershipStatus::Left.is_active());
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!(
            "suspended".parse::<VenueMembershipStatus>().unwrap(),
            VenueMembershipStatus::Suspended
        );
        assert_eq!(
            "LEFT".parse::<VenueMembershipStatus>().unwrap(),
            VenueMembershipStatus::Left
        );
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("banned".parse::<VenueMembershipStatus>().is_err());
    }

    #[test]
    fn serializes_upper_case() {
        let json = serde_json::to_string(&VenueMembershipStatus::Suspended).unwrap();
        assert_eq!(json, "\"SUSPENDED\"");
    }
}

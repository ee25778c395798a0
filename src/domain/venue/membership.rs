//! Venue membership record.
//!
//! The relationship between one user and one venue. Records are owned and
//! persisted by an external store; this crate only reads them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, VenueId, VenueMembershipId};

use super::{VenueMembershipStatus, VenueRole};

/// A user's membership in a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMembership {
    pub id: VenueMembershipId,
    pub user_id: UserId,
    pub venue_id: VenueId,
    pub role: VenueRole,
    pub status: VenueMembershipStatus,
    pub joined_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VenueMembership {
    /// Builds an active membership, as created when a user joins a venue.
    pub fn new(user_id: UserId, venue_id: VenueId, role: VenueRole) -> Self {
        let now = Timestamp::now();
        Self {
            id: VenueMembershipId::new(),
            user_id,
            venue_id,
            role,
            status: VenueMembershipStatus::Active,
            joined_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: VenueMembershipStatus) -> Self {
        self.status = status;
        self
    }

    /// The role this membership grants, or `None` when it grants nothing.
    pub fn active_role(&self) -> Option<VenueRole> {
        self.status.is_active().then_some(self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(role: VenueRole) -> VenueMembership {
        VenueMembership::new(
            UserId::new("user-1").unwrap(),
            VenueId::new("venue-1").unwrap(),
            role,
        )
    }

    #[test]
    fn new_membership_is_active() {
        let m = membership(VenueRole::Coach);
        assert_eq!(m.status, VenueMembershipStatus::Active);
        assert_eq!(m.active_role(), Some(VenueRole::Coach));
    }

    #[test]
    fn inactive_membership_grants_no_role() {
        let suspended = membership(VenueRole::Owner).with_status(VenueMembershipStatus::Suspended);
        let left = membership(VenueRole::Admin).with_status(VenueMembershipStatus::Left);

        assert_eq!(suspended.active_role(), None);
        assert_eq!(left.active_role(), None);
        // The stored role is untouched.
        assert_eq!(suspended.role, VenueRole::Owner);
    }
}

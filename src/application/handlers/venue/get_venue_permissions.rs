//! GetVenuePermissionsHandler - Query handler summarizing a caller's standing in a venue.
//!
//! UI guards typically need every role flag at once. Answering them from one
//! `get_user_venue_role` call keeps it to a single membership lookup.

use crate::application::VenueAuthorizer;
use crate::domain::foundation::{DomainError, UserId, VenueId};
use crate::domain::venue::VenueRole;

/// Query for the caller's permissions in a venue.
#[derive(Debug, Clone)]
pub struct GetVenuePermissionsQuery {
    pub user_id: UserId,
    pub venue_id: VenueId,
}

/// Role flags for one (user, venue) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenuePermissions {
    pub venue_id: VenueId,
    /// Active role, `None` when the user has no active membership.
    pub role: Option<VenueRole>,
    pub is_owner: bool,
    pub is_admin: bool,
    pub is_coach: bool,
    pub is_member: bool,
}

impl VenuePermissions {
    fn from_role(venue_id: VenueId, role: Option<VenueRole>) -> Self {
        let holds = |required: VenueRole| role.is_some_and(|r| r.satisfies(required));
        Self {
            is_owner: holds(VenueRole::Owner),
            is_admin: holds(VenueRole::Admin),
            is_coach: holds(VenueRole::Coach),
            is_member: holds(VenueRole::Client),
            venue_id,
            role,
        }
    }
}

pub struct GetVenuePermissionsHandler {
    authorizer: VenueAuthorizer,
}

impl GetVenuePermissionsHandler {
    pub fn new(authorizer: VenueAuthorizer) -> Self {
        Self { authorizer }
    }

    pub async fn handle(
        &self,
        query: GetVenuePermissionsQuery,
    ) -> Result<VenuePermissions, DomainError> {
        let role = self
            .authorizer
            .get_user_venue_role(&query.user_id, &query.venue_id)
            .await?;

        Ok(VenuePermissions::from_role(query.venue_id, role))
    }
}

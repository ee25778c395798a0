//! Venue membership lookup port.
//!
//! The only external collaborator of the authorization engine. Adapters own
//! persistence; the engine trusts the returned role and status verbatim.
//!
//! # Contract
//!
//! - At most one membership per (user, venue) pair.
//! - `Ok(None)` means "no membership"; it is not an error.
//! - Infrastructure failures are returned as `Err`, never folded into `Ok(None)`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId, VenueId};
use crate::domain::venue::VenueMembership;

/// Reader port for venue memberships.
#[async_trait]
pub trait VenueMembershipReader: Send + Sync {
    /// Find the membership linking `user_id` to `venue_id`, whatever its status.
    async fn find_membership(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<Option<VenueMembership>, DomainError>;
}

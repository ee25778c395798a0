//! In-memory implementation of VenueMembershipReader.
//!
//! Keyed by (user, venue), so the one-membership-per-pair invariant holds by
//! construction: inserting for an existing pair replaces the record.
//! Used by tests and local development runs without a database.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, VenueId};
use crate::domain::venue::VenueMembership;
use crate::ports::VenueMembershipReader;

type MembershipKey = (UserId, VenueId);

#[derive(Debug, Default)]
pub struct InMemoryVenueMembershipReader {
    memberships: RwLock<HashMap<MembershipKey, VenueMembership>>,
    /// When set, every lookup fails with this error.
    force_error: RwLock<Option<DomainError>>,
}

impl InMemoryVenueMembershipReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    ///
    /// Owning `self` means no other thread holds the lock, so a poisoned
    /// map is taken over as is.
    pub fn with_membership(mut self, membership: VenueMembership) -> Self {
        let key = (membership.user_id.clone(), membership.venue_id.clone());
        self.memberships
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, membership);
        self
    }

    /// Forces every lookup to fail, simulating an unavailable store.
    pub fn with_error(mut self, error: DomainError) -> Self {
        *self
            .force_error
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Stores a membership, replacing any existing one for the same pair.
    ///
    /// Returns the replaced record.
    pub fn insert(
        &self,
        membership: VenueMembership,
    ) -> Result<Option<VenueMembership>, DomainError> {
        let key = (membership.user_id.clone(), membership.venue_id.clone());
        let mut map = self.memberships.write().map_err(|_| poisoned())?;
        Ok(map.insert(key, membership))
    }

    pub fn remove(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<Option<VenueMembership>, DomainError> {
        let mut map = self.memberships.write().map_err(|_| poisoned())?;
        Ok(map.remove(&(user_id.clone(), venue_id.clone())))
    }

    pub fn len(&self) -> usize {
        self.memberships
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Membership store lock poisoned")
}

#[async_trait]
impl VenueMembershipReader for InMemoryVenueMembershipReader {
    async fn find_membership(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<Option<VenueMembership>, DomainError> {
        if let Some(error) = self.force_error.read().map_err(|_| poisoned())?.clone() {
            return Err(error);
        }

        let map = self.memberships.read().map_err(|_| poisoned())?;
        Ok(map.get(&(user_id.clone(), venue_id.clone())).cloned())
    }
}

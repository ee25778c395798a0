//! Venue authorization service.
//!
//! `VenueAuthorizer` is the entry point route handlers and UI guards call to
//! decide whether a user may act on a venue. Each operation issues exactly one
//! membership lookup through the `VenueMembershipReader` port and then applies
//! a pure policy from [`crate::domain::venue::policy`].
//!
//! ```text
//! caller ─► VenueAuthorizer ─► VenueMembershipReader ─► policy ─► decision
//! ```
//!
//! Denials are values (`false`, `None`, `AuthorizationDecision::Denied`).
//! The error arm of every method carries lookup failures only, unchanged.
//!
//! # Example
//!
//! ```ignore
//! let authorizer = VenueAuthorizer::new(reader);
//!
//! authorizer
//!     .can_manage_venue(&user.id, &venue_id)
//!     .await?
//!     .into_result(VenueAction::ManageVenue, &user.id, &venue_id)?;
//! ```

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId, VenueId};
use crate::domain::venue::{policy, AuthorizationDecision, VenueAction, VenueMembership, VenueRole};
use crate::ports::VenueMembershipReader;

/// Stateless venue authorization engine.
///
/// Cheap to clone; holds nothing but the reader handle.
#[derive(Clone)]
pub struct VenueAuthorizer {
    reader: Arc<dyn VenueMembershipReader>,
}

impl VenueAuthorizer {
    pub fn new(reader: Arc<dyn VenueMembershipReader>) -> Self {
        Self { reader }
    }

    async fn lookup(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<Option<VenueMembership>, DomainError> {
        self.reader
            .find_membership(user_id, venue_id)
            .await
            .map_err(|e| {
                tracing::warn!(
                    user_id = %user_id,
                    venue_id = %venue_id,
                    error = %e,
                    "Venue membership lookup failed"
                );
                e
            })
    }

    /// True iff the user holds an active membership ranked at least `required_role`.
    pub async fn has_venue_role(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
        required_role: VenueRole,
    ) -> Result<bool, DomainError> {
        let membership = self.lookup(user_id, venue_id).await?;
        let granted = policy::has_role(membership.as_ref(), required_role);

        tracing::debug!(
            user_id = %user_id,
            venue_id = %venue_id,
            required_role = %required_role,
            granted,
            "Venue role check"
        );

        Ok(granted)
    }

    pub async fn is_venue_owner(&self, user_id: &UserId, venue_id: &VenueId) -> Result<bool, DomainError> {
        self.has_venue_role(user_id, venue_id, VenueRole::Owner).await
    }

    /// Admins and owners.
    pub async fn is_venue_admin(&self, user_id: &UserId, venue_id: &VenueId) -> Result<bool, DomainError> {
        self.has_venue_role(user_id, venue_id, VenueRole::Admin).await
    }

    /// Coaches, admins, and owners.
    pub async fn is_venue_coach(&self, user_id: &UserId, venue_id: &VenueId) -> Result<bool, DomainError> {
        self.has_venue_role(user_id, venue_id, VenueRole::Coach).await
    }

    /// Any active membership, whatever the role.
    pub async fn is_venue_member(&self, user_id: &UserId, venue_id: &VenueId) -> Result<bool, DomainError> {
        self.has_venue_role(user_id, venue_id, VenueRole::Client).await
    }

    /// The user's role if their membership is active, `None` otherwise.
    pub async fn get_user_venue_role(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<Option<VenueRole>, DomainError> {
        let membership = self.lookup(user_id, venue_id).await?;
        Ok(policy::active_role(membership.as_ref()))
    }

    /// Venue settings and staff management: admins and owners.
    pub async fn can_manage_venue(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<AuthorizationDecision, DomainError> {
        let membership = self.lookup(user_id, venue_id).await?;
        let decision = policy::manage_venue(membership.as_ref());
        log_decision(VenueAction::ManageVenue, user_id, venue_id, decision);
        Ok(decision)
    }

    /// Session scheduling: coaches and above.
    pub async fn can_manage_sessions(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<AuthorizationDecision, DomainError> {
        let membership = self.lookup(user_id, venue_id).await?;
        let decision = policy::manage_sessions(membership.as_ref());
        log_decision(VenueAction::ManageSessions, user_id, venue_id, decision);
        Ok(decision)
    }

    /// Booking visibility for `target_user_id`'s bookings and/or bookings of
    /// sessions coached by `coach_id`. See [`policy::view_bookings`].
    pub async fn can_view_bookings(
        &self,
        user_id: &UserId,
        venue_id: &VenueId,
        target_user_id: Option<&UserId>,
        coach_id: Option<&UserId>,
    ) -> Result<AuthorizationDecision, DomainError> {
        let membership = self.lookup(user_id, venue_id).await?;
        let decision = policy::view_bookings(user_id, membership.as_ref(), target_user_id, coach_id);
        log_decision(VenueAction::ViewBookings, user_id, venue_id, decision);
        Ok(decision)
    }
}

fn log_decision(
    action: VenueAction,
    user_id: &UserId,
    venue_id: &VenueId,
    decision: AuthorizationDecision,
) {
    match decision.reason() {
        None => tracing::debug!(
            action = %action,
            user_id = %user_id,
            venue_id = %venue_id,
            authorized = true,
            "Venue authorization granted"
        ),
        Some(reason) => tracing::debug!(
            action = %action,
            user_id = %user_id,
            venue_id = %venue_id,
            authorized = false,
            reason = %reason,
            "Venue authorization denied"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::venue::{DenialReason, VenueMembershipStatus};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    /// Returns one canned membership (or none) and counts lookups.
    struct MockVenueMembershipReader {
        membership: Option<VenueMembership>,
        fail_read: bool,
        lookups: AtomicUsize,
    }

    impl MockVenueMembershipReader {
        fn with_member(role: VenueRole, status: VenueMembershipStatus) -> Self {
            Self {
                membership: Some(
                    VenueMembership::new(test_user_id(), test_venue_id(), role).with_status(status),
                ),
                fail_read: false,
                lookups: AtomicUsize::new(0),
            }
        }

        fn active(role: VenueRole) -> Self {
            Self::with_member(role, VenueMembershipStatus::Active)
        }

        fn no_membership() -> Self {
            Self {
                membership: None,
                fail_read: false,
                lookups: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                membership: None,
                fail_read: true,
                lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VenueMembershipReader for MockVenueMembershipReader {
        async fn find_membership(
            &self,
            _user_id: &UserId,
            _venue_id: &VenueId,
        ) -> Result<Option<VenueMembership>, DomainError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail_read {
                return Err(DomainError::database("Simulated read failure"));
            }
            Ok(self.membership.clone())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn test_user_id() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn test_venue_id() -> VenueId {
        VenueId::new("venue-1").unwrap()
    }

    fn authorizer(reader: MockVenueMembershipReader) -> (VenueAuthorizer, Arc<MockVenueMembershipReader>) {
        let reader = Arc::new(reader);
        (VenueAuthorizer::new(reader.clone()), reader)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // has_venue_role
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn member_not_found_fails_client_check() {
        let (auth, _) = authorizer(MockVenueMembershipReader::no_membership());
        let result = auth
            .has_venue_role(&test_user_id(), &test_venue_id(), VenueRole::Client)
            .await
            .unwrap();
        assert!(!result);
    }

    #[tokio::test]
    async fn suspended_client_fails_client_check() {
        let (auth, _) = authorizer(MockVenueMembershipReader::with_member(
            VenueRole::Client,
            VenueMembershipStatus::Suspended,
        ));
        let result = auth
            .has_venue_role(&test_user_id(), &test_venue_id(), VenueRole::Client)
            .await
            .unwrap();
        assert!(!result);
    }

    #[tokio::test]
    async fn owner_passes_admin_check() {
        let (auth, _) = authorizer(MockVenueMembershipReader::active(VenueRole::Owner));
        let result = auth
            .has_venue_role(&test_user_id(), &test_venue_id(), VenueRole::Admin)
            .await
            .unwrap();
        assert!(result);
    }

    #[tokio::test]
    async fn client_fails_coach_check() {
        let (auth, _) = authorizer(MockVenueMembershipReader::active(VenueRole::Client));
        let result = auth
            .has_venue_role(&test_user_id(), &test_venue_id(), VenueRole::Coach)
            .await
            .unwrap();
        assert!(!result);
    }

    #[tokio::test]
    async fn each_check_issues_one_lookup() {
        let (auth, reader) = authorizer(MockVenueMembershipReader::active(VenueRole::Coach));
        let user = test_user_id();
        let venue = test_venue_id();

        auth.is_venue_coach(&user, &venue).await.unwrap();
        auth.can_view_bookings(&user, &venue, Some(&user), Some(&user)).await.unwrap();

        assert_eq!(reader.lookups.load(Ordering::SeqCst), 2);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Derived role checks
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn derived_checks_for_admin() {
        let (auth, _) = authorizer(MockVenueMembershipReader::active(VenueRole::Admin));
        let (u, v) = (test_user_id(), test_venue_id());

        assert!(!auth.is_venue_owner(&u, &v).await.unwrap());
        assert!(auth.is_venue_admin(&u, &v).await.unwrap());
        assert!(auth.is_venue_coach(&u, &v).await.unwrap());
        assert!(auth.is_venue_member(&u, &v).await.unwrap());
    }

    #[tokio::test]
    async fn derived_checks_all_false_without_membership() {
        let (auth, _) = authorizer(MockVenueMembershipReader::no_membership());
        let (u, v) = (test_user_id(), test_venue_id());

        assert!(!auth.is_venue_owner(&u, &v).await.unwrap());
        assert!(!auth.is_venue_admin(&u, &v).await.unwrap());
        assert!(!auth.is_venue_coach(&u, &v).await.unwrap());
        assert!(!auth.is_venue_member(&u, &v).await.unwrap());
    }

    #[tokio::test]
    async fn left_member_is_not_a_member() {
        let (auth, _) = authorizer(MockVenueMembershipReader::with_member(
            VenueRole::Client,
            VenueMembershipStatus::Left,
        ));
        assert!(!auth.is_venue_member(&test_user_id(), &test_venue_id()).await.unwrap());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // get_user_venue_role
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn role_returned_for_active_membership() {
        let (auth, _) = authorizer(MockVenueMembershipReader::active(VenueRole::Coach));
        let role = auth
            .get_user_venue_role(&test_user_id(), &test_venue_id())
            .await
            .unwrap();
        assert_eq!(role, Some(VenueRole::Coach));
    }

    #[tokio::test]
    async fn role_hidden_for_suspended_membership() {
        let (auth, _) = authorizer(MockVenueMembershipReader::with_member(
            VenueRole::Owner,
            VenueMembershipStatus::Suspended,
        ));
        let role = auth
            .get_user_venue_role(&test_user_id(), &test_venue_id())
            .await
            .unwrap();
        assert_eq!(role, None);
    }

    #[tokio::test]
    async fn role_none_without_membership() {
        let (auth, _) = authorizer(MockVenueMembershipReader::no_membership());
        let role = auth
            .get_user_venue_role(&test_user_id(), &test_venue_id())
            .await
            .unwrap();
        assert_eq!(role, None);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Policy operations
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn coach_can_manage_sessions() {
        let (auth, _) = authorizer(MockVenueMembershipReader::active(VenueRole::Coach));
        let decision = auth
            .can_manage_sessions(&test_user_id(), &test_venue_id())
            .await
            .unwrap();
        assert!(decision.is_authorized());
    }

    #[tokio::test]
    async fn coach_cannot_manage_venue() {
        let (auth, _) = authorizer(MockVenueMembershipReader::active(VenueRole::Coach));
        let decision = auth
            .can_manage_venue(&test_user_id(), &test_venue_id())
            .await
            .unwrap();
        assert_eq!(decision.reason(), Some(DenialReason::InsufficientPermissions));
    }

    #[tokio::test]
    async fn client_cannot_view_other_users_bookings() {
        let (auth, _) = authorizer(MockVenueMembershipReader::active(VenueRole::Client));
        let other = UserId::new("other-user").unwrap();

        let decision = auth
            .can_view_bookings(&test_user_id(), &test_venue_id(), Some(&other), None)
            .await
            .unwrap();

        assert!(!decision.is_authorized());
        assert_eq!(decision.reason(), Some(DenialReason::InsufficientPermissions));
    }

    #[tokio::test]
    async fn non_member_can_view_own_bookings() {
        let (auth, _) = authorizer(MockVenueMembershipReader::no_membership());
        let user = test_user_id();

        let decision = auth
            .can_view_bookings(&user, &test_venue_id(), Some(&user), None)
            .await
            .unwrap();

        assert!(decision.is_authorized());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn lookup_failure_propagates_from_role_check() {
        let (auth, _) = authorizer(MockVenueMembershipReader::failing());
        let err = auth
            .has_venue_role(&test_user_id(), &test_venue_id(), VenueRole::Client)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Simulated read failure");
    }

    #[tokio::test]
    async fn lookup_failure_is_not_a_denial() {
        let (auth, _) = authorizer(MockVenueMembershipReader::failing());
        let user = test_user_id();
        let venue = test_venue_id();

        assert!(auth.can_manage_venue(&user, &venue).await.is_err());
        assert!(auth.can_manage_sessions(&user, &venue).await.is_err());
        assert!(auth.get_user_venue_role(&user, &venue).await.is_err());
        // Even the self-view rule needs the lookup to succeed first.
        assert!(auth
            .can_view_bookings(&user, &venue, Some(&user), None)
            .await
            .is_err());
    }
}

//! Integration tests for the venue authorization engine.
//!
//! Drives `VenueAuthorizer` through its public API against the in-memory
//! membership store, covering the reference scenarios and the policy matrix.

use std::sync::Arc;

use venue_access::adapters::memory::InMemoryVenueMembershipReader;
use venue_access::application::{
    GetVenuePermissionsHandler, GetVenuePermissionsQuery, VenueAuthorizer,
};
use venue_access::domain::foundation::{DomainError, ErrorCode, UserId, VenueId};
use venue_access::domain::venue::{
    AuthorizationDecision, DenialReason, VenueAction, VenueMembership, VenueMembershipStatus,
    VenueRole,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn venue() -> VenueId {
    VenueId::new("venue-1").unwrap()
}

fn membership(user_id: &str, role: VenueRole, status: VenueMembershipStatus) -> VenueMembership {
    VenueMembership::new(user(user_id), venue(), role).with_status(status)
}

fn authorizer_with(memberships: Vec<VenueMembership>) -> VenueAuthorizer {
    let reader = memberships
        .into_iter()
        .fold(InMemoryVenueMembershipReader::new(), |reader, m| {
            reader.with_membership(m)
        });
    VenueAuthorizer::new(Arc::new(reader))
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[tokio::test]
async fn member_not_found_has_no_client_role() {
    let authorizer = authorizer_with(vec![]);

    let result = authorizer
        .has_venue_role(&user("user-1"), &venue(), VenueRole::Client)
        .await
        .unwrap();

    assert!(!result);
}

#[tokio::test]
async fn suspended_client_has_no_client_role() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Client,
        VenueMembershipStatus::Suspended,
    )]);

    let result = authorizer
        .has_venue_role(&user("user-1"), &venue(), VenueRole::Client)
        .await
        .unwrap();

    assert!(!result);
}

#[tokio::test]
async fn active_owner_satisfies_admin() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Owner,
        VenueMembershipStatus::Active,
    )]);

    assert!(authorizer
        .has_venue_role(&user("user-1"), &venue(), VenueRole::Admin)
        .await
        .unwrap());
}

#[tokio::test]
async fn active_client_does_not_satisfy_coach() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Client,
        VenueMembershipStatus::Active,
    )]);

    assert!(!authorizer
        .has_venue_role(&user("user-1"), &venue(), VenueRole::Coach)
        .await
        .unwrap());
}

#[tokio::test]
async fn active_coach_can_manage_sessions() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Coach,
        VenueMembershipStatus::Active,
    )]);

    let decision = authorizer
        .can_manage_sessions(&user("user-1"), &venue())
        .await
        .unwrap();

    assert!(decision.is_authorized());
}

#[tokio::test]
async fn active_client_cannot_view_other_users_bookings() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Client,
        VenueMembershipStatus::Active,
    )]);

    let decision = authorizer
        .can_view_bookings(&user("user-1"), &venue(), Some(&user("other-user")), None)
        .await
        .unwrap();

    assert_eq!(decision, AuthorizationDecision::insufficient_permissions());
    assert_eq!(decision.reason(), Some(DenialReason::InsufficientPermissions));
}

// =============================================================================
// Role Queries
// =============================================================================

#[tokio::test]
async fn missing_membership_answers_false_everywhere() {
    let authorizer = authorizer_with(vec![]);
    let (u, v) = (user("nobody"), venue());

    assert!(!authorizer.is_venue_owner(&u, &v).await.unwrap());
    assert!(!authorizer.is_venue_admin(&u, &v).await.unwrap());
    assert!(!authorizer.is_venue_coach(&u, &v).await.unwrap());
    assert!(!authorizer.is_venue_member(&u, &v).await.unwrap());
    assert_eq!(authorizer.get_user_venue_role(&u, &v).await.unwrap(), None);
}

#[tokio::test]
async fn inactive_membership_hides_stored_role() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Owner,
        VenueMembershipStatus::Left,
    )]);

    assert_eq!(
        authorizer
            .get_user_venue_role(&user("user-1"), &venue())
            .await
            .unwrap(),
        None
    );
    assert!(!authorizer
        .is_venue_member(&user("user-1"), &venue())
        .await
        .unwrap());
}

#[tokio::test]
async fn membership_is_scoped_to_its_venue() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Owner,
        VenueMembershipStatus::Active,
    )]);
    let other_venue = VenueId::new("venue-2").unwrap();

    assert!(!authorizer
        .is_venue_member(&user("user-1"), &other_venue)
        .await
        .unwrap());
}

#[tokio::test]
async fn role_flags_follow_hierarchy_for_every_role() {
    for role in VenueRole::ALL {
        let authorizer = authorizer_with(vec![membership(
            "user-1",
            role,
            VenueMembershipStatus::Active,
        )]);
        let (u, v) = (user("user-1"), venue());

        assert_eq!(authorizer.get_user_venue_role(&u, &v).await.unwrap(), Some(role));
        assert_eq!(authorizer.is_venue_owner(&u, &v).await.unwrap(), role == VenueRole::Owner);
        assert_eq!(authorizer.is_venue_admin(&u, &v).await.unwrap(), role >= VenueRole::Admin);
        assert_eq!(authorizer.is_venue_coach(&u, &v).await.unwrap(), role >= VenueRole::Coach);
        assert!(authorizer.is_venue_member(&u, &v).await.unwrap());
    }
}

// =============================================================================
// Policy Decisions
// =============================================================================

#[tokio::test]
async fn manage_venue_requires_admin() {
    for role in VenueRole::ALL {
        let authorizer = authorizer_with(vec![membership(
            "user-1",
            role,
            VenueMembershipStatus::Active,
        )]);

        let decision = authorizer
            .can_manage_venue(&user("user-1"), &venue())
            .await
            .unwrap();

        assert_eq!(decision.is_authorized(), role >= VenueRole::Admin, "{role}");
    }
}

#[tokio::test]
async fn suspended_owner_cannot_manage_venue() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Owner,
        VenueMembershipStatus::Suspended,
    )]);

    let decision = authorizer
        .can_manage_venue(&user("user-1"), &venue())
        .await
        .unwrap();

    assert!(!decision.is_authorized());
}

#[tokio::test]
async fn owner_views_any_bookings() {
    let authorizer = authorizer_with(vec![membership(
        "owner",
        VenueRole::Owner,
        VenueMembershipStatus::Active,
    )]);

    let decision = authorizer
        .can_view_bookings(&user("owner"), &venue(), Some(&user("someone")), None)
        .await
        .unwrap();

    assert!(decision.is_authorized());
}

#[tokio::test]
async fn coach_views_bookings_of_own_sessions_only() {
    let authorizer = authorizer_with(vec![membership(
        "coach-1",
        VenueRole::Coach,
        VenueMembershipStatus::Active,
    )]);

    let own = authorizer
        .can_view_bookings(&user("coach-1"), &venue(), None, Some(&user("coach-1")))
        .await
        .unwrap();
    let other = authorizer
        .can_view_bookings(&user("coach-1"), &venue(), None, Some(&user("coach-2")))
        .await
        .unwrap();

    assert!(own.is_authorized());
    assert!(!other.is_authorized());
}

#[tokio::test]
async fn client_views_own_bookings() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Client,
        VenueMembershipStatus::Active,
    )]);

    let decision = authorizer
        .can_view_bookings(&user("user-1"), &venue(), Some(&user("user-1")), None)
        .await
        .unwrap();

    assert!(decision.is_authorized());
}

#[tokio::test]
async fn denial_converts_to_insufficient_permissions_error() {
    let authorizer = authorizer_with(vec![]);

    let err = authorizer
        .can_manage_sessions(&user("user-1"), &venue())
        .await
        .unwrap()
        .into_result(VenueAction::ManageSessions, &user("user-1"), &venue())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InsufficientPermissions);
}

// =============================================================================
// Failure Propagation
// =============================================================================

#[tokio::test]
async fn lookup_failure_is_an_error_not_a_denial() {
    let reader = InMemoryVenueMembershipReader::new()
        .with_error(DomainError::database("connection refused"));
    let authorizer = VenueAuthorizer::new(Arc::new(reader));

    let err = authorizer
        .can_manage_venue(&user("user-1"), &venue())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::DatabaseError);
}

#[tokio::test]
async fn permissions_handler_reports_all_flags() {
    let authorizer = authorizer_with(vec![membership(
        "user-1",
        VenueRole::Coach,
        VenueMembershipStatus::Active,
    )]);
    let handler = GetVenuePermissionsHandler::new(authorizer);

    let permissions = handler
        .handle(GetVenuePermissionsQuery {
            user_id: user("user-1"),
            venue_id: venue(),
        })
        .await
        .unwrap();

    assert_eq!(permissions.role, Some(VenueRole::Coach));
    assert!(!permissions.is_owner);
    assert!(!permissions.is_admin);
    assert!(permissions.is_coach);
    assert!(permissions.is_member);
}

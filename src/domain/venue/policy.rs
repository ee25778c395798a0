//! Pure venue authorization policies.
//!
//! Every function here decides over the result of a single membership lookup
//! (`None` when the user has no membership in the venue). Nothing here does
//! I/O; the application layer performs the lookup and delegates.

use crate::domain::foundation::UserId;

use super::{AuthorizationDecision, VenueMembership, VenueRole};

/// Role granted by the membership, if it is active.
pub fn active_role(membership: Option<&VenueMembership>) -> Option<VenueRole> {
    membership.and_then(VenueMembership::active_role)
}

/// True iff the membership is active and its role ranks at least `required`.
pub fn has_role(membership: Option<&VenueMembership>, required: VenueRole) -> bool {
    active_role(membership).is_some_and(|role| role.satisfies(required))
}

/// Venue settings and staff: admins and owners.
pub fn manage_venue(membership: Option<&VenueMembership>) -> AuthorizationDecision {
    has_role(membership, VenueRole::Admin).into()
}

/// Session schedule: coaches and above.
pub fn manage_sessions(membership: Option<&VenueMembership>) -> AuthorizationDecision {
    has_role(membership, VenueRole::Coach).into()
}

/// Booking visibility.
///
/// Checked in order, first match wins:
/// 1. owners see every booking;
/// 2. a coach sees bookings for sessions they coach (`coach_id` is the caller);
/// 3. anyone sees their own bookings (`target_user_id` is the caller).
pub fn view_bookings(
    caller: &UserId,
    membership: Option<&VenueMembership>,
    target_user_id: Option<&UserId>,
    coach_id: Option<&UserId>,
) -> AuthorizationDecision {
    if has_role(membership, VenueRole::Owner) {
        return AuthorizationDecision::Authorized;
    }

    if coach_id == Some(caller) && has_role(membership, VenueRole::Coach) {
        return AuthorizationDecision::Authorized;
    }

    if target_user_id == Some(caller) {
        return AuthorizationDecision::Authorized;
    }

    AuthorizationDecision::insufficient_permissions()
}

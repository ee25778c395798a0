//! Structured authorization decisions.
//!
//! A denial is a value, not an error. Callers branch on the decision; those
//! that prefer `?` can convert it with [`AuthorizationDecision::into_result`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, UserId, VenueId};

/// Venue actions guarded by a named policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueAction {
    ManageVenue,
    ManageSessions,
    ViewBookings,
}

impl VenueAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueAction::ManageVenue => "manage_venue",
            VenueAction::ManageSessions => "manage_sessions",
            VenueAction::ViewBookings => "view_bookings",
        }
    }
}

impl fmt::Display for VenueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a policy denied the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialReason {
    /// The caller's active role is too low, or they hold no active membership.
    InsufficientPermissions,
}

impl DenialReason {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            DenialReason::InsufficientPermissions => ErrorCode::InsufficientPermissions,
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_code())
    }
}

/// Outcome of a venue policy check.
///
/// Serializes as `{"authorized": true}` or
/// `{"authorized": false, "reason": "INSUFFICIENT_PERMISSIONS"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DecisionBody", into = "DecisionBody")]
pub enum AuthorizationDecision {
    Authorized,
    Denied(DenialReason),
}

impl AuthorizationDecision {
    pub fn insufficient_permissions() -> Self {
        AuthorizationDecision::Denied(DenialReason::InsufficientPermissions)
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationDecision::Authorized)
    }

    /// The denial reason, present only when denied.
    pub fn reason(&self) -> Option<DenialReason> {
        match self {
            AuthorizationDecision::Authorized => None,
            AuthorizationDecision::Denied(reason) => Some(*reason),
        }
    }

    /// Converts a denial into a `DomainError` carrying the request context.
    pub fn into_result(
        self,
        action: VenueAction,
        user_id: &UserId,
        venue_id: &VenueId,
    ) -> Result<(), DomainError> {
        match self {
            AuthorizationDecision::Authorized => Ok(()),
            AuthorizationDecision::Denied(reason) => Err(DomainError::new(
                reason.error_code(),
                format!("User {} may not {} at venue {}", user_id, action, venue_id),
            )
            .with_detail("action", action.as_str())
            .with_detail("user_id", user_id.as_str())
            .with_detail("venue_id", venue_id.as_str())),
        }
    }
}

impl From<bool> for AuthorizationDecision {
    /// Maps a role check onto a decision, denying with `InsufficientPermissions`.
    fn from(authorized: bool) -> Self {
        if authorized {
            AuthorizationDecision::Authorized
        } else {
            AuthorizationDecision::insufficient_permissions()
        }
    }
}

#[derive(Serialize, Deserialize)]
struct DecisionBody {
    authorized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<DenialReason>,
}

impl From<AuthorizationDecision> for DecisionBody {
    fn from(decision: AuthorizationDecision) -> Self {
        DecisionBody {
            authorized: decision.is_authorized(),
            reason: decision.reason(),
        }
    }
}

impl From<DecisionBody> for AuthorizationDecision {
    fn from(body: DecisionBody) -> Self {
        if body.authorized {
            AuthorizationDecision::Authorized
        } else {
            AuthorizationDecision::Denied(
                body.reason.unwrap_or(DenialReason::InsufficientPermissions),
            )
        }
    }
}

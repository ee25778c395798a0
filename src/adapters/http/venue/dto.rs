//! HTTP DTOs for venue authorization endpoints.

use serde::{Deserialize, Serialize};

use crate::application::VenuePermissions;
use crate::domain::venue::{AuthorizationDecision, VenueAction, VenueRole};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string for `GET /authorize/view-bookings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewBookingsParams {
    /// Whose bookings the caller wants to see.
    #[serde(default)]
    pub target_user_id: Option<String>,
    /// Coach of the session whose bookings the caller wants to see.
    #[serde(default)]
    pub coach_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct VenueRoleResponse {
    pub venue_id: String,
    /// Active role, or null.
    pub role: Option<VenueRole>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HasRoleResponse {
    pub venue_id: String,
    pub required_role: VenueRole,
    pub has_role: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenuePermissionsResponse {
    pub venue_id: String,
    pub role: Option<VenueRole>,
    pub is_owner: bool,
    pub is_admin: bool,
    pub is_coach: bool,
    pub is_member: bool,
}

impl From<VenuePermissions> for VenuePermissionsResponse {
    fn from(p: VenuePermissions) -> Self {
        Self {
            venue_id: p.venue_id.to_string(),
            role: p.role,
            is_owner: p.is_owner,
            is_admin: p.is_admin,
            is_coach: p.is_coach,
            is_member: p.is_member,
        }
    }
}

/// Policy decision: `{"venue_id", "action", "authorized", "reason"?}`.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResponse {
    pub venue_id: String,
    pub action: VenueAction,
    #[serde(flatten)]
    pub decision: AuthorizationDecision,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
